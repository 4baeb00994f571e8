// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the settings form.
///
/// The color is derived from the active iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Floating card holding the add-content form.
pub fn popover(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Dimmed layer behind the popover.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Dashboard card for one stored item.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Pill around a tag name.
pub fn tag(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_100)),
        text_color: Some(palette::PRIMARY_600),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Top bar background.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a > 0.0 && color.a < 1.0),
            other => panic!("Expected background color, got {other:?}"),
        }
    }

    #[test]
    fn popover_has_border_and_shadow() {
        let style = popover(&Theme::Dark);
        assert!(style.border.width > 0.0);
        assert!(style.shadow.blur_radius > 0.0);
    }
}
