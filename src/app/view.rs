// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: navbar and active screen, the "Add Content"
//! popover when open, then the toast overlay.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::library::Library;
use crate::ui::add_content;
use crate::ui::dashboard;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Sink, Toast};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub add_content: &'a add_content::State,
    pub library: &'a Library,
    pub settings: &'a settings::State,
    pub notifications: &'a Sink,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        on_dashboard: ctx.screen == Screen::Dashboard,
        add_content_open: ctx.add_content.is_open(),
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Dashboard => dashboard::view(dashboard::ViewContext {
            i18n: ctx.i18n,
            library: ctx.library,
        })
        .map(Message::Dashboard),
        Screen::Settings => ctx
            .settings
            .view(SettingsViewContext { i18n: ctx.i18n })
            .map(Message::Settings),
    };

    let base = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.add_content.is_open() {
        layers = layers.push(
            ctx.add_content
                .view(add_content::ViewContext { i18n: ctx.i18n })
                .map(Message::AddContent),
        );
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
