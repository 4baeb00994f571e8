// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every screen.
//!
//! Holds the application name, the "Add Content" toggle and the buttons
//! switching between the dashboard and the settings screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font,
    widget::{button, Container, Row, Space, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub on_dashboard: bool,
    pub add_content_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleAddContent,
    OpenDashboard,
    OpenSettings,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ToggleAddContent,
    OpenDashboard,
    OpenSettings,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ToggleAddContent => Event::ToggleAddContent,
        Message::OpenDashboard => Event::OpenDashboard,
        Message::OpenSettings => Event::OpenSettings,
    }
}

/// Render the navigation bar.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let app_name = Text::new(ctx.i18n.tr("app-name"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        });

    let dashboard_button = button(Text::new(ctx.i18n.tr("navbar-dashboard")))
        .on_press(Message::OpenDashboard)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::toggle(ctx.on_dashboard));

    let settings_button = button(Text::new(ctx.i18n.tr("navbar-settings")))
        .on_press(Message::OpenSettings)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::toggle(!ctx.on_dashboard));

    let add_button = button(Text::new(format!("+ {}", ctx.i18n.tr("navbar-add-content"))))
        .on_press(Message::ToggleAddContent)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::toggle(!ctx.add_content_open));

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(app_name)
        .push(Space::new().width(Length::Fill))
        .push(dashboard_button)
        .push(settings_button)
        .push(add_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        for (on_dashboard, add_content_open) in [(true, false), (false, true)] {
            let _element = view(ViewContext {
                i18n: &i18n,
                on_dashboard,
                add_content_open,
            });
        }
    }

    #[test]
    fn messages_map_to_events() {
        assert_eq!(update(&Message::ToggleAddContent), Event::ToggleAddContent);
        assert_eq!(update(&Message::OpenDashboard), Event::OpenDashboard);
        assert_eq!(update(&Message::OpenSettings), Event::OpenSettings);
    }
}
