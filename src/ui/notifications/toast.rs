// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the active notification.
//!
//! The toast is a small card with a severity-colored border, a bold title,
//! the description and a dismiss button.

use super::notification::Notification;
use super::sink::{Message, Sink};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, font, Color, Element, Font, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent_color = notification.severity().color();

        let title = i18n.tr(notification.title_key());
        let description = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let title_widget = Text::new(title).size(typography::BODY_LG).font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        });
        let description_widget =
            Text::new(description)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                });

        let dismiss_button = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss)
            .padding([0.0, spacing::XS])
            .style(dismiss_button_style);

        // Layout: [title / description] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(title_widget)
                    .push(description_widget),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding([spacing::XS, spacing::MD])
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay, anchored to the bottom-right corner.
    pub fn view_overlay<'a>(sink: &'a Sink, i18n: &'a I18n) -> Element<'a, Message> {
        match sink.visible() {
            Some(notification) => Container::new(Self::view(notification, i18n))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into(),
            // Empty container that takes no space
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = Severity::Success.color();
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_is_transparent_until_hovered() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }

    #[test]
    fn overlay_renders_with_and_without_notification() {
        let i18n = I18n::default();
        let mut sink = Sink::new();
        let _ = Toast::view_overlay(&sink, &i18n);

        let _task = sink.trigger(
            Notification::error("notification-error-title", "notification-submit-failed")
                .with_arg("reason", "timeout"),
        );
        let _element = Toast::view_overlay(&sink, &i18n);
    }
}
