// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[backend]` - Content service URL, access token and request timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `BRAINSTASH_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use brainstash::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.backend.base_url = "https://stash.example.com".to_string();
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable supplying the access token.
pub const ENV_TOKEN: &str = "BRAINSTASH_TOKEN";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Content service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Root URL of the content service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Access token sent verbatim in the `authorization` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Token to authenticate with, empty when none is configured.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Content service settings.
    #[serde(default)]
    pub backend: BackendConfig,
}

impl Config {
    /// Applies command-line and environment overrides on top of the file values.
    ///
    /// Explicit CLI values win over `BRAINSTASH_TOKEN`, which wins over the file.
    pub fn apply_overrides(&mut self, backend_url: Option<String>, token: Option<String>) {
        if let Some(url) = backend_url.filter(|url| !url.trim().is_empty()) {
            self.backend.base_url = url;
        }

        let env_token = std::env::var(ENV_TOKEN).ok().filter(|t| !t.is_empty());
        if let Some(token) = token.or(env_token) {
            self.backend.token = Some(token);
        }
    }
}

// =============================================================================
// Serde Defaults
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Err(Error::Config("no config directory available".to_string()))
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
