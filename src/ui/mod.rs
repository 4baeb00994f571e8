// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes a `Message` for its widgets, an `Event` it reports to the
//! application and a `ViewContext` carrying what it needs to render.
//!
//! # Screens
//!
//! - [`dashboard`] - List of stored content
//! - [`settings`] - Backend connection, language and theme
//!
//! # Overlays
//!
//! - [`add_content`] - "Add Content" popover and its submission state machine
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar
//! - [`widgets`] - Custom iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod add_content;
pub mod dashboard;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod widgets;
