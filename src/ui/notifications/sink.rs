// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Sink` holds at most one notification. Triggering a new one replaces
//! the current one and restarts the auto-dismiss timer. The timer is an
//! abortable iced task whose handle lives in the sink, so it is aborted on
//! replacement, on manual dismissal and when the sink is dropped.

use super::notification::{Notification, NotificationId};
use iced::task::{self, Task};
use std::fmt;
use std::time::Duration;

/// Delay after which a visible notification hides itself.
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user closed the toast.
    Dismiss,
    /// The dismiss timer started for this notification elapsed.
    Expired(NotificationId),
}

/// Pending auto-dismiss for one notification.
struct DismissTimer {
    notification: NotificationId,
    /// Aborts the sleeping task when dropped.
    handle: task::Handle,
}

impl fmt::Debug for DismissTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissTimer")
            .field("notification", &self.notification)
            .finish_non_exhaustive()
    }
}

/// Single-slot notification store.
#[derive(Debug)]
pub struct Sink {
    slot: Option<Notification>,
    visible: bool,
    timer: Option<DismissTimer>,
    dismiss_after: Duration,
}

impl Default for Sink {
    fn default() -> Self {
        Self {
            slot: None,
            visible: false,
            timer: None,
            dismiss_after: AUTO_DISMISS_AFTER,
        }
    }
}

impl Sink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, replacing whatever was showing.
    ///
    /// Any pending dismiss timer is cancelled first. The returned task
    /// sleeps for [`AUTO_DISMISS_AFTER`] and then reports
    /// [`Message::Expired`]; it must be handed to the iced runtime.
    pub fn trigger(&mut self, notification: Notification) -> Task<Message> {
        self.cancel_timer();

        let id = notification.id();
        tracing::debug!(
            ?id,
            severity = ?notification.severity(),
            key = notification.message_key(),
            "showing notification"
        );

        self.slot = Some(notification);
        self.visible = true;

        let delay = self.dismiss_after;
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::Expired(id),
        )
        .abortable();

        self.timer = Some(DismissTimer {
            notification: id,
            handle: handle.abort_on_drop(),
        });

        task
    }

    /// Hides the notification immediately and cancels its timer.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.cancel_timer();
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss => self.dismiss(),
            Message::Expired(id) => self.expire(id),
        }
    }

    /// Hides the notification if `id` is the one the live timer belongs to.
    ///
    /// An expiry for a replaced or dismissed notification is ignored, so a
    /// late timer can never hide a newer toast.
    fn expire(&mut self, id: NotificationId) {
        let is_live = self
            .timer
            .as_ref()
            .is_some_and(|timer| timer.notification == id);

        if !is_live {
            tracing::debug!(?id, "ignoring stale dismiss timer");
            return;
        }

        self.timer = None;
        self.visible = false;
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.handle.abort();
        }
    }

    /// The notification currently on screen.
    #[must_use]
    pub fn visible(&self) -> Option<&Notification> {
        if self.visible {
            self.slot.as_ref()
        } else {
            None
        }
    }

    /// Whether a notification is on screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The most recently triggered notification, shown or not.
    #[must_use]
    pub fn last(&self) -> Option<&Notification> {
        self.slot.as_ref()
    }

    /// Whether an auto-dismiss timer is outstanding.
    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Auto-dismiss delay.
    #[must_use]
    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }
}
