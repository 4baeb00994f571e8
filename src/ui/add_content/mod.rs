// SPDX-License-Identifier: MPL-2.0
//! "Add Content" popover: form state machine and its iced component.

pub mod component;
pub mod form;

pub use component::{Event, Message, State, ViewContext};
pub use form::{Effect, Form, Phase};
