// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the primary action of a screen.
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
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_700)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for buttons drawn over the video (transport, back, fullscreen).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for a row of the album or video lists.
pub fn list_row(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background;
    let background = match status {
        button::Status::Hovered => base.weak.color,
        button::Status::Pressed => base.strong.color,
        button::Status::Active | button::Status::Disabled => base.base.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: base.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
