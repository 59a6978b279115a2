// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the player: gesture badge, controls bar and the
//! brightness dimming layer.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn container_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn container_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Generic style for overlay indicators like the gesture feedback badge.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Style for the controls bars drawn over the video.
#[must_use]
pub fn controls_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Black layer emulating a lower screen brightness.
///
/// `alpha` is clamped into `[0, 1]`; zero leaves the video untouched.
pub fn dim_layer(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    let alpha = alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim_layer_clamps_alpha() {
        let style = dim_layer(1.7)(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(BLACK)));

        let style = dim_layer(-0.2)(&Theme::Dark);
        assert_eq!(
            style.background,
            Some(Background::Color(Color { a: 0.0, ..BLACK }))
        );
    }
}
