// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens and overlays.
//!
//! The `App` struct wires together the content library, the "Add Content"
//! popover, the settings screen, localization and the toast sink, and
//! translates their events into side effects like HTTP requests or config
//! persistence.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::ContentClient;
use crate::i18n::fluent::I18n;
use crate::library::Library;
use crate::ui::add_content;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Settings as stored on disk, without CLI or environment overrides.
    config: Config,
    /// Command-line values layered over `config` for the backend client.
    overrides: Overrides,
    /// Config directory override; `None` uses the standard resolution.
    config_dir: Option<PathBuf>,
    /// Backend client, absent when it could not be built.
    client: Option<ContentClient>,
    add_content: add_content::State,
    library: Library,
    settings: settings::State,
    theme_mode: ThemeMode,
    /// Toast sink for user feedback.
    notifications: notifications::Sink,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("add_content_open", &self.add_content.is_open())
            .field("items", &self.library.items().len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Backend values given on the command line.
///
/// They are layered over the stored configuration whenever the client is
/// built, and are never written back to `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub backend_url: Option<String>,
    pub token: Option<String>,
}

impl Overrides {
    /// Returns `config` with these values and `BRAINSTASH_TOKEN` applied.
    #[must_use]
    pub fn apply(&self, config: &Config) -> Config {
        let mut effective = config.clone();
        effective.apply_overrides(self.backend_url.clone(), self.token.clone());
        effective
    }
}

/// Builds the backend client for `backend`, logging when that fails.
fn build_client(backend: &config::BackendConfig) -> Option<ContentClient> {
    match ContentClient::new(&backend.base_url, backend.token(), backend.request_timeout()) {
        Ok(client) => {
            tracing::debug!(base_url = client.base_url(), "backend client ready");
            Some(client)
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not build backend client");
            None
        }
    }
}

impl App {
    /// Loads configuration, resolves overrides and starts the first library
    /// refresh.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let overrides = Overrides {
            backend_url: flags.backend_url,
            token: flags.token,
        };

        let mut app = Self::from_parts(config, overrides, i18n, None);

        let warning_task = match config_warning {
            Some(key) => app
                .notifications
                .trigger(Notification::error("notification-warning-title", key))
                .map(Message::Notification),
            None => Task::none(),
        };

        let refresh_task = update::refresh_library(&mut app.update_context());
        (app, Task::batch([warning_task, refresh_task]))
    }

    /// Assembles the state from already-resolved parts.
    ///
    /// The backend client uses `config` with `overrides` applied, while the
    /// settings form shows the stored values only, so saving it cannot
    /// persist an override.
    fn from_parts(
        config: Config,
        overrides: Overrides,
        i18n: I18n,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let theme_mode = config.general.theme_mode;
        let effective = overrides.apply(&config);
        Self {
            i18n,
            screen: Screen::default(),
            client: build_client(&effective.backend),
            settings: settings::State::new(&config.backend, theme_mode),
            config,
            overrides,
            config_dir,
            add_content: add_content::State::new(),
            library: Library::new(),
            theme_mode,
            notifications: notifications::Sink::new(),
        }
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            overrides: &self.overrides,
            config_dir: self.config_dir.as_deref(),
            client: &mut self.client,
            add_content: &mut self.add_content,
            library: &mut self.library,
            settings: &mut self.settings,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-name");
        let screen_name = match self.screen {
            Screen::Dashboard => self.i18n.tr("dashboard-title"),
            Screen::Settings => self.i18n.tr("settings-title"),
        };
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.add_content.is_submitting()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::AddContent(message) => update::handle_add_content_message(&mut ctx, message),
            Message::Dashboard(message) => update::handle_dashboard_message(&mut ctx, &message),
            Message::Settings(message) => update::handle_settings_message(&mut ctx, message),
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, &message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(message);
                Task::none()
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::ContentSubmitted(outcome) => {
                let effects = ctx.add_content.finish(outcome);
                update::run_effects(&mut ctx, effects)
            }
            Message::LibraryLoaded(result) => {
                ctx.library.apply(result);
                if ctx.library.take_queued() {
                    update::refresh_library(&mut ctx)
                } else {
                    Task::none()
                }
            }
            Message::Tick(_instant) => {
                ctx.add_content.tick();
                Task::none()
            }
            Message::EscapePressed => {
                ctx.add_content.close();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            add_content: &self.add_content,
            library: &self.library,
            settings: &self.settings,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, CreateContentResponse};
    use crate::domain::content::ContentType;
    use crate::ui::navbar;
    use crate::ui::notifications::Severity;
    use tempfile::tempdir;

    fn test_app(config_dir: Option<PathBuf>) -> App {
        test_app_with_overrides(config_dir, Overrides::default())
    }

    fn test_app_with_overrides(config_dir: Option<PathBuf>, overrides: Overrides) -> App {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".into()), &config);
        App::from_parts(config, overrides, i18n, config_dir)
    }

    fn fill_valid_link(app: &mut App) {
        for message in [
            add_content::Message::TypeSelected(ContentType::Link),
            add_content::Message::TitleChanged("Iced docs".into()),
            add_content::Message::LinkChanged("https://iced.rs".into()),
        ] {
            let _ = app.update(Message::AddContent(message));
        }
    }

    fn toast(app: &App) -> &Notification {
        app.notifications.visible().expect("a toast should be visible")
    }

    #[test]
    fn starts_on_dashboard_with_client() {
        let app = test_app(None);
        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.client.is_some());
        assert!(!app.add_content.is_open());
        assert!(!app.notifications.is_visible());
    }

    #[test]
    fn navbar_toggles_popover() {
        let mut app = test_app(None);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleAddContent));
        assert!(app.add_content.is_open());
        let _ = app.update(Message::Navbar(navbar::Message::ToggleAddContent));
        assert!(!app.add_content.is_open());
    }

    #[test]
    fn escape_closes_popover() {
        let mut app = test_app(None);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleAddContent));
        let _ = app.update(Message::EscapePressed);
        assert!(!app.add_content.is_open());
    }

    #[test]
    fn invalid_submit_shows_missing_fields_toast() {
        let mut app = test_app(None);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleAddContent));
        let _ = app.update(Message::AddContent(add_content::Message::Submit));

        let toast = toast(&app);
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.title_key(), "notification-missing-fields-title");
        assert!(!app.add_content.is_submitting());
        assert!(app.add_content.is_open());
    }

    #[test]
    fn valid_submit_enters_submitting() {
        let mut app = test_app(None);
        fill_valid_link(&mut app);
        let _ = app.update(Message::AddContent(add_content::Message::Submit));
        assert!(app.add_content.is_submitting());
        assert!(!app.notifications.is_visible());
    }

    #[test]
    fn confirmed_submission_navigates_and_refreshes() {
        let mut app = test_app(None);
        let _ = app.update(Message::SwitchScreen(Screen::Settings));
        let _ = app.update(Message::Navbar(navbar::Message::ToggleAddContent));
        fill_valid_link(&mut app);
        let _ = app.update(Message::AddContent(add_content::Message::Submit));

        let _ = app.update(Message::ContentSubmitted(Ok(CreateContentResponse {
            message: "Content added".into(),
        })));

        assert_eq!(app.screen, Screen::Dashboard);
        assert!(!app.add_content.is_open());
        assert!(!app.add_content.is_submitting());
        assert!(app.add_content.form().draft().is_pristine());
        assert!(app.library.is_loading());
        assert_eq!(toast(&app).severity(), Severity::Success);
    }

    #[test]
    fn failed_submission_stays_put_and_reports() {
        let mut app = test_app(None);
        let _ = app.update(Message::SwitchScreen(Screen::Settings));
        fill_valid_link(&mut app);
        let _ = app.update(Message::AddContent(add_content::Message::Submit));

        let _ = app.update(Message::ContentSubmitted(Err(ApiError::Rejected {
            status: 500,
            message: Some("Database down".into()),
        })));

        assert_eq!(app.screen, Screen::Settings);
        assert!(!app.library.is_loading());
        assert_eq!(toast(&app).arg("reason"), Some("Database down"));
        assert!(app.add_content.form().draft().is_pristine());
    }

    #[test]
    fn library_loaded_updates_dashboard_data() {
        let mut app = test_app(None);
        let _ = app.update(Message::Dashboard(crate::ui::dashboard::Message::Refresh));
        assert!(app.library.is_loading());

        let _ = app.update(Message::LibraryLoaded(Err(ApiError::Transport("offline".into()))));
        assert!(!app.library.is_loading());
        assert!(app.library.last_error().is_some());
    }

    #[test]
    fn creation_during_running_refresh_reloads_afterwards() {
        let mut app = test_app(None);
        let _ = app.update(Message::Dashboard(crate::ui::dashboard::Message::Refresh));
        assert!(app.library.is_loading());

        fill_valid_link(&mut app);
        let _ = app.update(Message::AddContent(add_content::Message::Submit));
        let _ = app.update(Message::ContentSubmitted(Ok(CreateContentResponse {
            message: "Content added".into(),
        })));
        assert!(app.library.has_queued_refresh());

        // This response was built before the item existed
        let task = app.update(Message::LibraryLoaded(Ok(Vec::new())));

        assert!(task.units() >= 1);
        assert!(app.library.is_loading());
        assert!(!app.library.has_queued_refresh());

        let task = app.update(Message::LibraryLoaded(Ok(Vec::new())));
        assert_eq!(task.units(), 0);
        assert!(!app.library.is_loading());
    }

    #[test]
    fn dismiss_hides_toast() {
        let mut app = test_app(None);
        let _ = app.update(Message::AddContent(add_content::Message::Submit));
        assert!(app.notifications.is_visible());

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss,
        ));
        assert!(!app.notifications.is_visible());
    }

    #[test]
    fn saving_settings_persists_and_rebuilds_client() {
        let temp_dir = tempdir().expect("temp dir");
        let mut app = test_app(Some(temp_dir.path().to_path_buf()));
        let _ = app.update(Message::SwitchScreen(Screen::Settings));

        for message in [
            settings::Message::BaseUrlChanged("https://stash.example.com/".into()),
            settings::Message::TokenChanged("secret".into()),
            settings::Message::Save,
        ] {
            let _ = app.update(Message::Settings(message));
        }

        assert_eq!(toast(&app).severity(), Severity::Success);
        assert_eq!(
            app.client.as_ref().map(ContentClient::base_url),
            Some("https://stash.example.com")
        );

        let saved = config::load_from_path(&temp_dir.path().join("settings.toml"))
            .expect("settings written");
        assert_eq!(saved.backend.base_url, "https://stash.example.com/");
        assert_eq!(saved.backend.token.as_deref(), Some("secret"));
    }

    #[test]
    fn saving_settings_keeps_overrides_off_disk() {
        let temp_dir = tempdir().expect("temp dir");
        let overrides = Overrides {
            backend_url: Some("https://cli.example.com".into()),
            token: Some("cli-token".into()),
        };
        let mut app = test_app_with_overrides(Some(temp_dir.path().to_path_buf()), overrides);
        assert_eq!(
            app.client.as_ref().map(ContentClient::base_url),
            Some("https://cli.example.com")
        );

        let form = app.settings.backend_config().expect("stored values are valid");
        assert_eq!(form.base_url, config::DEFAULT_BACKEND_URL);
        assert!(form.token.is_none());

        let _ = app.update(Message::Settings(settings::Message::TimeoutChanged("12".into())));
        let _ = app.update(Message::Settings(settings::Message::Save));

        let saved = config::load_from_path(&temp_dir.path().join("settings.toml"))
            .expect("settings written");
        assert_eq!(saved.backend.base_url, config::DEFAULT_BACKEND_URL);
        assert!(saved.backend.token.is_none());
        assert_eq!(saved.backend.request_timeout_secs, Some(12));
        // The command line still wins for the running client
        assert_eq!(
            app.client.as_ref().map(ContentClient::base_url),
            Some("https://cli.example.com")
        );
    }

    #[test]
    fn invalid_settings_are_not_saved() {
        let temp_dir = tempdir().expect("temp dir");
        let mut app = test_app(Some(temp_dir.path().to_path_buf()));

        let _ = app.update(Message::Settings(settings::Message::BaseUrlChanged(
            "not a url".into(),
        )));
        let _ = app.update(Message::Settings(settings::Message::Save));

        assert_eq!(toast(&app).severity(), Severity::Error);
        assert!(!temp_dir.path().join("settings.toml").exists());
    }

    #[test]
    fn theme_change_is_applied_and_persisted() {
        let temp_dir = tempdir().expect("temp dir");
        let mut app = test_app(Some(temp_dir.path().to_path_buf()));

        let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
            ThemeMode::Light,
        )));

        assert_eq!(app.theme(), Theme::Light);
        let saved = config::load_from_path(&temp_dir.path().join("settings.toml"))
            .expect("settings written");
        assert_eq!(saved.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn language_change_switches_locale() {
        let temp_dir = tempdir().expect("temp dir");
        let mut app = test_app(Some(temp_dir.path().to_path_buf()));

        let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
            "fr".parse().unwrap(),
        )));

        assert_eq!(app.i18n.current_locale().to_string(), "fr");
        assert_eq!(app.config.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn title_names_screen_and_app() {
        let mut app = test_app(None);
        assert_eq!(app.title(), "Dashboard - Brainstash");
        let _ = app.update(Message::SwitchScreen(Screen::Settings));
        assert_eq!(app.title(), "Settings - Brainstash");
    }

    #[test]
    fn view_renders_with_overlays() {
        let mut app = test_app(None);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleAddContent));
        let _ = app.update(Message::AddContent(add_content::Message::Submit));
        let _element = app.view();
    }
}
