// SPDX-License-Identifier: MPL-2.0
//! Shared look of the album screens, the player chrome and the toasts.
//!
//! Screens pick colors, sizes and spacing from here instead of inlining
//! literals, so the dark player surface and the lists stay consistent.
//!
//! ```
//! use iced_reel::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let controls_bar = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! assert!(spacing::MD > spacing::XS);
//! # let _ = controls_bar;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Secondary text and disabled borders.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    /// Disabled button fill.
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Alpha levels for layers drawn over the video.
pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Controls bar and gesture badge backgrounds.
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

/// Spacing on a 4px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Width of the centered gesture feedback badge.
    pub const GESTURE_OVERLAY_WIDTH: f32 = 200.0;
    /// Height of the bottom controls bar.
    pub const CONTROLS_BAR_HEIGHT: f32 = 96.0;
    pub const LIST_ROW_HEIGHT: f32 = 48.0;
}

pub mod typography {
    /// Screen headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Gesture badge value.
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    /// Video counts and timestamps.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Toast accent stripe.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Resting buttons.
    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Hovered buttons and toasts.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_STRONG < opacity::OVERLAY_PRESSED);
    assert!(typography::CAPTION < typography::BODY);
};
