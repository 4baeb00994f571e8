// SPDX-License-Identifier: MPL-2.0
//! Writing user preferences back to `settings.toml`.

use super::config::{self, Config};
use super::update::UpdateContext;
use super::Message;
use crate::ui::notifications::Notification;
use iced::Task;
use std::path::Path;

/// i18n key shown when the settings file cannot be written.
pub const SAVE_ERROR_KEY: &str = "notification-config-save-error";

/// Writes `config`, returning the i18n key of the failure.
pub fn save_config(config: &Config, config_dir: Option<&Path>) -> Result<(), &'static str> {
    config::save_with_override(config, config_dir.map(Path::to_path_buf)).map_err(|err| {
        tracing::warn!(error = %err, "failed to save config");
        SAVE_ERROR_KEY
    })
}

/// Persists the current preferences, showing a toast only on failure.
pub fn persist_config(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match save_config(ctx.config, ctx.config_dir) {
        Ok(()) => Task::none(),
        Err(key) => ctx.notify(Notification::error("notification-error-title", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_config_writes_into_override_dir() {
        let temp_dir = tempdir().expect("temp dir");
        let mut config = Config::default();
        config.backend.token = Some("abc".into());

        save_config(&config, Some(temp_dir.path())).expect("save succeeds");

        let loaded = config::load_from_path(&temp_dir.path().join("settings.toml"))
            .expect("load succeeds");
        assert_eq!(loaded, config);
    }

    #[test]
    fn save_config_reports_key_on_failure() {
        let temp_dir = tempdir().expect("temp dir");
        // A file where the directory should be
        let blocker = temp_dir.path().join("blocked");
        std::fs::write(&blocker, "").expect("write blocker");

        assert_eq!(
            save_config(&Config::default(), Some(&blocker)),
            Err(SAVE_ERROR_KEY)
        );
    }
}
