// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (submit, save).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        // Busy submit button keeps the brand color, dimmed
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: 0.6,
                ..palette::PRIMARY_500
            })),
            text_color: Color { a: 0.8, ..WHITE },
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Secondary action (cancel, refresh) and unselected toggle state.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (bg_color, text_color) = if is_light {
        (palette::PRIMARY_100, palette::PRIMARY_600)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let background = match status {
        button::Status::Hovered => {
            if is_light {
                palette::GRAY_100
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            }
        }
        _ => bg_color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            text_color
        },
        border: Border {
            color: if status == button::Status::Hovered {
                palette::PRIMARY_500
            } else {
                Color::TRANSPARENT
            },
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Toggle style: brand colored when `selected`, secondary otherwise.
pub fn toggle(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            primary(theme, status)
        } else {
            secondary(theme, status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_primary_is_dimmed() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        match style.background {
            Some(Background::Color(bg)) => assert!(bg.a < 1.0),
            other => panic!("Expected background color, got {other:?}"),
        }
    }

    #[test]
    fn toggle_switches_between_primary_and_secondary() {
        let theme = Theme::Dark;
        let selected = toggle(true)(&theme, button::Status::Active);
        let unselected = toggle(false)(&theme, button::Status::Active);
        assert_ne!(selected.background, unselected.background);
    }
}
