// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and mapping onto iced themes.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Every mode, in the order the settings screen lists them.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The iced theme to render with.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Translation key for the settings label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "settings-theme-light",
            ThemeMode::Dark => "settings-theme-dark",
            ThemeMode::System => "settings-theme-system",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the desktop, only check it does not panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
