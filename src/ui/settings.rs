// SPDX-License-Identifier: MPL-2.0
//! Settings screen: backend connection, language and theme.
//!
//! Language and theme apply as soon as they are picked. Backend fields are
//! edited as text and only validated and applied when the user saves.

use crate::app::config::{BackendConfig, MAX_REQUEST_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, text, text_input, Column, Container, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Editable copy of the persisted settings.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    base_url: String,
    token: String,
    timeout_input: String,
    theme_mode: ThemeMode,
}

impl State {
    /// Seeds the form from the loaded configuration.
    #[must_use]
    pub fn new(backend: &BackendConfig, theme_mode: ThemeMode) -> Self {
        Self {
            base_url: backend.base_url.clone(),
            token: backend.token().to_string(),
            timeout_input: backend.request_timeout().as_secs().to_string(),
            theme_mode,
        }
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validates the backend fields.
    ///
    /// Returns the i18n key describing the first invalid field on failure.
    pub fn backend_config(&self) -> Result<BackendConfig, &'static str> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err("settings-invalid-backend-url");
        }

        let timeout = self
            .timeout_input
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| (MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS).contains(secs))
            .ok_or("settings-invalid-timeout")?;

        let token = self.token.trim();
        Ok(BackendConfig {
            base_url: base_url.to_string(),
            token: (!token.is_empty()).then(|| token.to_string()),
            request_timeout_secs: Some(timeout),
        })
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    BaseUrlChanged(String),
    TokenChanged(String),
    TimeoutChanged(String),
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    Save,
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
    /// Validated backend settings to persist and apply.
    Save(BackendConfig),
    /// Saving was refused; carries the i18n key of the reason.
    Invalid(&'static str),
    Back,
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::BaseUrlChanged(value) => {
                self.base_url = value;
                Event::None
            }
            Message::TokenChanged(value) => {
                self.token = value;
                Event::None
            }
            Message::TimeoutChanged(value) => {
                // Digits only, so the field cannot hold garbage
                if value.chars().all(|c| c.is_ascii_digit()) {
                    self.timeout_input = value;
                }
                Event::None
            }
            Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
            Message::ThemeModeSelected(mode) => {
                self.theme_mode = mode;
                Event::ThemeModeChanged(mode)
            }
            Message::Save => match self.backend_config() {
                Ok(backend) => Event::Save(backend),
                Err(key) => Event::Invalid(key),
            },
            Message::Back => Event::Back,
        }
    }

    /// Render the settings screen.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let title = Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG);

        let backend_section = Column::new()
            .spacing(spacing::SM)
            .push(section_title(i18n.tr("settings-section-backend")))
            .push(field(
                i18n.tr("settings-backend-url-label"),
                text_input(&i18n.tr("settings-backend-url-placeholder"), &self.base_url)
                    .on_input(Message::BaseUrlChanged)
                    .padding(spacing::XS),
            ))
            .push(field(
                i18n.tr("settings-token-label"),
                text_input(&i18n.tr("settings-token-placeholder"), &self.token)
                    .on_input(Message::TokenChanged)
                    .secure(true)
                    .padding(spacing::XS),
            ))
            .push(field(
                i18n.tr_with_args(
                    "settings-timeout-label",
                    &[
                        ("min", MIN_REQUEST_TIMEOUT_SECS.to_string().as_str()),
                        ("max", MAX_REQUEST_TIMEOUT_SECS.to_string().as_str()),
                    ],
                ),
                text_input("30", &self.timeout_input)
                    .on_input(Message::TimeoutChanged)
                    .padding(spacing::XS),
            ));

        let language_row = i18n.available_locales.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, locale| {
                let name = i18n.tr(&format!("language-name-{locale}"));
                let label = if name.starts_with("MISSING:") {
                    locale.to_string()
                } else {
                    name
                };
                row.push(
                    button(Text::new(label))
                        .on_press(Message::LanguageSelected(locale.clone()))
                        .style(styles::button::toggle(i18n.current_locale() == locale)),
                )
            },
        );

        let theme_row = ThemeMode::ALL
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, &mode| {
                row.push(
                    button(Text::new(i18n.tr(mode.label_key())))
                        .on_press(Message::ThemeModeSelected(mode))
                        .style(styles::button::toggle(self.theme_mode == mode)),
                )
            });

        let appearance_section = Column::new()
            .spacing(spacing::SM)
            .push(section_title(i18n.tr("settings-section-appearance")))
            .push(field(i18n.tr("settings-language-label"), language_row))
            .push(field(i18n.tr("settings-theme-label"), theme_row));

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(
                button(Text::new(i18n.tr("settings-back")))
                    .on_press(Message::Back)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::secondary),
            )
            .push(
                button(Text::new(i18n.tr("settings-save")))
                    .on_press(Message::Save)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary),
            );

        let panel = Container::new(
            Column::new()
                .spacing(spacing::LG)
                .push(title)
                .push(backend_section)
                .push(appearance_section)
                .push(actions),
        )
        .width(Length::Fixed(sizing::SETTINGS_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel);

        scrollable(
            Container::new(panel)
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Center),
        )
        .into()
    }
}

fn section_title<'a>(label: String) -> Element<'a, Message> {
    text(label).size(typography::TITLE_SM).into()
}

fn field<'a>(label: String, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(input)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(&BackendConfig::default(), ThemeMode::System)
    }

    #[test]
    fn state_is_seeded_from_config() {
        let backend = BackendConfig {
            base_url: "https://stash.example.com".into(),
            token: Some("abc".into()),
            request_timeout_secs: Some(12),
        };
        let state = State::new(&backend, ThemeMode::Dark);
        assert_eq!(state.base_url(), "https://stash.example.com");
        assert_eq!(state.backend_config(), Ok(backend));
        assert_eq!(state.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn save_with_valid_fields_emits_backend_config() {
        let mut state = state();
        state.update(Message::BaseUrlChanged(" https://api.example.com ".into()));
        state.update(Message::TokenChanged("  ".into()));
        state.update(Message::TimeoutChanged("45".into()));

        match state.update(Message::Save) {
            Event::Save(backend) => {
                assert_eq!(backend.base_url, "https://api.example.com");
                assert!(backend.token.is_none());
                assert_eq!(backend.request_timeout_secs, Some(45));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn save_rejects_url_without_scheme() {
        let mut state = state();
        state.update(Message::BaseUrlChanged("example.com".into()));
        assert_eq!(
            state.update(Message::Save),
            Event::Invalid("settings-invalid-backend-url")
        );
    }

    #[test]
    fn save_rejects_out_of_range_timeout() {
        let mut state = state();
        state.update(Message::TimeoutChanged("0".into()));
        assert_eq!(state.update(Message::Save), Event::Invalid("settings-invalid-timeout"));

        state.update(Message::TimeoutChanged(String::new()));
        assert_eq!(state.update(Message::Save), Event::Invalid("settings-invalid-timeout"));
    }

    #[test]
    fn timeout_field_ignores_non_digits() {
        let mut state = state();
        state.update(Message::TimeoutChanged("12".into()));
        state.update(Message::TimeoutChanged("12a".into()));
        assert_eq!(state.timeout_input, "12");
    }

    #[test]
    fn theme_and_language_apply_immediately() {
        let mut state = state();
        assert_eq!(
            state.update(Message::ThemeModeSelected(ThemeMode::Light)),
            Event::ThemeModeChanged(ThemeMode::Light)
        );
        assert_eq!(state.theme_mode(), ThemeMode::Light);

        let fr: LanguageIdentifier = "fr".parse().unwrap();
        assert_eq!(
            state.update(Message::LanguageSelected(fr.clone())),
            Event::LanguageChanged(fr)
        );
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = state();
        let _element = state.view(ViewContext { i18n: &i18n });
    }
}
