// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{ApiError, ContentItem, CreateContentResponse};
use crate::ui::add_content;
use crate::ui::dashboard;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    AddContent(add_content::Message),
    Dashboard(dashboard::Message),
    Settings(settings::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    /// The create-content request completed.
    ContentSubmitted(Result<CreateContentResponse, ApiError>),
    /// The content list request completed.
    LibraryLoaded(Result<Vec<ContentItem>, ApiError>),
    /// Animation tick while a submission is in flight.
    Tick(Instant),
    /// Escape was pressed.
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `BRAINSTASH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Backend root overriding the configured one.
    pub backend_url: Option<String>,
    /// Access token overriding the configured one and `BRAINSTASH_TOKEN`.
    pub token: Option<String>,
}
