// SPDX-License-Identifier: MPL-2.0
//! `brainstash` is a desktop client for collecting documents, videos, tweets
//! and links into a personal library, built with the Iced GUI framework.
//!
//! Content is stored by a remote backend reached over HTTP. The client adds
//! new items through the "Add Content" popover, lists the library on the
//! dashboard, and reports outcomes through toast notifications.

pub mod api;
pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod library;
pub mod ui;
