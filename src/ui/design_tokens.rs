// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for every widget in the application.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use brainstash::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (purple scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.89, 0.87, 0.99);
    pub const PRIMARY_400: Color = Color::from_rgb(0.55, 0.49, 0.95);
    pub const PRIMARY_500: Color = Color::from_rgb(0.45, 0.38, 0.91);
    pub const PRIMARY_600: Color = Color::from_rgb(0.36, 0.29, 0.82);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const POPOVER_WIDTH: f32 = 420.0;
    pub const SETTINGS_WIDTH: f32 = 480.0;

    /// Height of the multi-line body editor in the add-content form.
    pub const BODY_EDITOR_HEIGHT: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Large headings (pages, dialogs)
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Large title - Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - App name, popover heading
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Card titles, section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Tags, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_SM);
    assert!(sizing::POPOVER_WIDTH > sizing::TOAST_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
