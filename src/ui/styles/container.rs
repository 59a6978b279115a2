// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Header bar surface of the library screens.
///
/// Derived from the active theme so it stays readable in light and dark mode.
pub fn header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Black letterbox behind the video frame.
pub fn video_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        ..Default::default()
    }
}

/// Placeholder shown when a list is empty or failed to load.
pub fn empty_state(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
