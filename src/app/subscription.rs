// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the busy-spinner animation.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes Escape presses to the application.
///
/// Escape is forwarded even when a focused text input captured it, so the
/// popover closes while the user is typing.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription, active only while a submission is
/// in flight.
pub fn create_tick_subscription(is_submitting: bool) -> Subscription<Message> {
    if is_submitting {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
