// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application state it may touch, and returns the follow-up task.

use super::{build_client, persistence, Message, Overrides, Screen};
use crate::api::{ApiError, ContentClient, CreateContentRequest};
use crate::app::config::Config;
use crate::i18n::fluent::I18n;
use crate::library::Library;
use crate::ui::add_content::{self, Effect};
use crate::ui::dashboard;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::Path;

/// Mutable view of the application state shared by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub overrides: &'a Overrides,
    pub config_dir: Option<&'a Path>,
    pub client: &'a mut Option<ContentClient>,
    pub add_content: &'a mut add_content::State,
    pub library: &'a mut Library,
    pub settings: &'a mut settings::State,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Sink,
}

impl UpdateContext<'_> {
    /// Shows a toast and returns its auto-dismiss task.
    pub fn notify(&mut self, notification: Notification) -> Task<Message> {
        self.notifications
            .trigger(notification)
            .map(Message::Notification)
    }
}

pub fn handle_add_content_message(
    ctx: &mut UpdateContext<'_>,
    message: add_content::Message,
) -> Task<Message> {
    match ctx.add_content.update(message) {
        add_content::Event::None | add_content::Event::Closed => Task::none(),
        add_content::Event::Effects(effects) => run_effects(ctx, effects),
    }
}

/// Carries out the effects requested by the submission form, in order.
pub fn run_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    let mut tasks = Vec::with_capacity(effects.len());

    for effect in effects {
        let task = match effect {
            Effect::Notify(notification) => ctx.notify(notification),
            Effect::Submit(request) => submit_content(ctx.client.as_ref(), request),
            Effect::RefreshLibrary => refresh_library(ctx),
            Effect::NavigateToDashboard => {
                ctx.add_content.close();
                handle_screen_switch(ctx, Screen::Dashboard)
            }
        };
        tasks.push(task);
    }

    Task::batch(tasks)
}

fn submit_content(client: Option<&ContentClient>, request: CreateContentRequest) -> Task<Message> {
    match client.cloned() {
        Some(client) => Task::perform(
            async move { client.create_content(&request).await },
            Message::ContentSubmitted,
        ),
        // Completes the submission so the form does not stay busy
        None => Task::done(Message::ContentSubmitted(Err(ApiError::Transport(
            "no backend configured".to_string(),
        )))),
    }
}

/// Starts a library refresh unless one is already running.
pub fn refresh_library(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(client) = ctx.client.clone() else {
        tracing::debug!("no backend client, skipping library refresh");
        return Task::none();
    };
    if !ctx.library.begin_refresh() {
        return Task::none();
    }

    Task::perform(
        async move { client.list_content().await },
        Message::LibraryLoaded,
    )
}

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: &dashboard::Message,
) -> Task<Message> {
    match dashboard::update(message) {
        dashboard::Event::Refresh => refresh_library(ctx),
    }
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: &navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::ToggleAddContent => {
            ctx.add_content.toggle();
            Task::none()
        }
        navbar::Event::OpenDashboard => handle_screen_switch(ctx, Screen::Dashboard),
        navbar::Event::OpenSettings => handle_screen_switch(ctx, Screen::Settings),
    }
}

pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen != target {
        tracing::debug!(from = ?*ctx.screen, to = ?target, "switching screen");
    }
    *ctx.screen = target;
    Task::none()
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        SettingsEvent::None => Task::none(),
        SettingsEvent::Back => handle_screen_switch(ctx, Screen::Dashboard),
        SettingsEvent::LanguageChanged(locale) => {
            ctx.i18n.set_locale(locale);
            ctx.config.general.language = Some(ctx.i18n.current_locale().to_string());
            persistence::persist_config(ctx)
        }
        SettingsEvent::ThemeModeChanged(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            persistence::persist_config(ctx)
        }
        SettingsEvent::Invalid(key) => {
            ctx.notify(Notification::error("notification-settings-invalid-title", key))
        }
        SettingsEvent::Save(backend) => {
            let mut stored = ctx.config.clone();
            stored.backend = backend;
            let effective = ctx.overrides.apply(&stored);
            let Some(client) = build_client(&effective.backend) else {
                return ctx.notify(Notification::error(
                    "notification-error-title",
                    "notification-backend-client-error",
                ));
            };
            *ctx.client = Some(client);
            *ctx.config = stored;

            let persisted = persistence::save_config(ctx.config, ctx.config_dir);
            let notification = match persisted {
                Ok(()) => Notification::success(
                    "notification-success-title",
                    "notification-settings-saved",
                ),
                Err(key) => Notification::error("notification-error-title", key),
            };
            let toast = ctx.notify(notification);
            Task::batch([toast, refresh_library(ctx)])
        }
    }
}
