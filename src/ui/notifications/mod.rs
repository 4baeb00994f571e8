// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! A single transient message is shown at a time. Producers such as the
//! "Add Content" form hand a [`Notification`] to the [`Sink`], which replaces
//! whatever was showing and hides it again after a fixed delay.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`sink`] - Single-slot store owning visibility and the dismiss timer
//! - [`toast`] - Toast widget component for rendering the notification
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Notification, Sink};
//!
//! let mut sink = Sink::new();
//!
//! // The returned task fires the auto-dismiss timer; hand it to iced.
//! let task = sink
//!     .trigger(Notification::success("notification-success-title", "notification-content-added"))
//!     .map(Message::Notification);
//!
//! // In your view function, render the toast
//! let toast_overlay = Toast::view_overlay(&sink, &i18n).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 3s for every severity
//! - One toast at a time, newest wins
//! - Position: bottom-right corner

mod notification;
mod sink;
mod toast;

pub use notification::{Notification, NotificationId, Severity};
pub use sink::{Message as NotificationMessage, Sink, AUTO_DISMISS_AFTER};
pub use toast::Toast;
