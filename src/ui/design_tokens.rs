// SPDX-License-Identifier: MPL-2.0
//! Design tokens centralizing the visual constants used across the UI.
//!
//! Organized by concern: palette, opacity, spacing (8px grid), sizing,
//! typography, border, radius, and shadow. Keep ratios consistent when
//! modifying (e.g. `MD = XS * 2`).

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
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);

    /// Neutral toast card background (the `default` kind).
    pub const NEUTRAL_600: Color = Color::from_rgb(0.45, 0.45, 0.47);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const BACKDROP: f32 = 0.3;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Secondary toast text against the card background.
    pub const TEXT_SECONDARY: f32 = 0.68;
    pub const OPAQUE: f32 = 1.0;
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
    pub const ICON_MD: f32 = 24.0;

    // Toast card metrics
    pub const TOAST_WIDTH: f32 = 340.0;
    pub const TOAST_MIN_HEIGHT: f32 = 50.0;
    /// Hit area of the toast close affordance.
    pub const TOAST_CLOSE_BUTTON: f32 = 30.0;

    // Modal surfaces
    pub const SHEET_HEIGHT: f32 = 280.0;
    pub const CARD_WIDTH: f32 = 340.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - prominent labels, modal headers
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - most UI text, labels, toast titles
    pub const BODY: f32 = 14.0;

    /// Small body - toast subtitles, hints
    pub const BODY_SM: f32 = 13.0;

    /// Caption - counters, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Toast card corners.
    pub const TOAST: f32 = 16.0;
    /// Top corners of the bottom sheet.
    pub const SHEET: f32 = 20.0;
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

    /// Toast card elevation.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 5.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TEXT_SECONDARY > opacity::OVERLAY_MEDIUM);

    // Sizing validation
    assert!(sizing::TOAST_WIDTH > sizing::TOAST_CLOSE_BUTTON);
    assert!(sizing::TOAST_MIN_HEIGHT > sizing::TOAST_CLOSE_BUTTON);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn toast_radius_is_between_md_and_sheet() {
        assert!(radius::TOAST > radius::MD);
        assert!(radius::SHEET > radius::TOAST);
    }
}
