// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored accent and a dismiss
//! button, stacked in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let accent_color = notification.severity().color();

        let glyph = Text::new(notification.severity().glyph())
            .size(typography::TITLE_MD)
            .color(accent_color);

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(Text::new("×").size(typography::BODY))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders all visible notifications in the bottom-right corner.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager.visible().map(Self::view).collect();

        if toasts.is_empty() {
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| iced::Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
