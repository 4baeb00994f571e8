// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Neutral message (gray accent).
    #[default]
    Default,
    /// Operation completed successfully (green accent).
    Success,
    /// Operation failed (red accent).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Default => palette::GRAY_400,
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// A notification to be displayed to the user.
///
/// Title and description are i18n keys resolved at render time, so a
/// language switch also applies to the toast currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title_key: String,
    message_key: String,
    /// Arguments interpolated into the description.
    message_args: Vec<(String, String)>,
}

impl Notification {
    /// Creates a new notification with the given severity, title and description keys.
    pub fn new(
        severity: Severity,
        title_key: impl Into<String>,
        message_key: impl Into<String>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title_key: title_key.into(),
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    /// Creates a neutral notification.
    pub fn info(title_key: impl Into<String>, message_key: impl Into<String>) -> Self {
        Self::new(Severity::Default, title_key, message_key)
    }

    /// Creates a success notification.
    pub fn success(title_key: impl Into<String>, message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, title_key, message_key)
    }

    /// Creates an error notification.
    pub fn error(title_key: impl Into<String>, message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, title_key, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Looks up an interpolation argument by name.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.message_args
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("title", "test");
        let n2 = Notification::success("title", "test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let default = Severity::Default.color();
        let success = Severity::Success.color();
        let error = Severity::Error.color();

        assert_ne!(default, success);
        assert_ne!(default, error);
        assert_ne!(success, error);
    }

    #[test]
    fn default_severity_is_neutral() {
        assert_eq!(Severity::default(), Severity::Default);
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::error("title-key", "test-error")
            .with_arg("reason", "timeout")
            .with_arg("status", "500");

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.title_key(), "title-key");
        assert_eq!(notification.message_key(), "test-error");
        assert_eq!(notification.message_args().len(), 2);
        assert_eq!(notification.arg("reason"), Some("timeout"));
        assert_eq!(notification.arg("missing"), None);
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::info("", "").severity(), Severity::Default);
        assert_eq!(Notification::success("", "").severity(), Severity::Success);
        assert_eq!(Notification::error("", "").severity(), Severity::Error);
    }
}
