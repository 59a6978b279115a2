// SPDX-License-Identifier: MPL-2.0
//! Player screen: the video frame with the brightness dimming layer, the
//! gesture feedback badge and the transport controls.
//!
//! Pointer gestures on the surface are not captured by these widgets; the
//! application routes raw mouse events through [`pan::PanRecognizer`].

pub mod pan;

use crate::player::session;
use crate::player::time_format::format_progress;
use crate::player::transport;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, image, slider, text, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, ContentFit, Element, Length};

/// Timeline slider step in milliseconds.
const SLIDER_STEP_MS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Session(session::Message),
    Back,
}

/// Everything the player view reads.
pub struct ViewContext<'a> {
    pub session: &'a session::State,
    /// Last decoded frame, if any.
    pub frame: Option<&'a image::Handle>,
    /// Opacity of the brightness dimming layer.
    pub dim_alpha: f32,
    /// Decoder failure to show instead of the frame.
    pub error: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let features = ctx.session.features();

    let mut stack = Stack::new()
        .push(video_surface(&ctx))
        .push(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::dim_layer(ctx.dim_alpha)),
        );

    if let Some(label) = ctx.session.overlay_text() {
        stack = stack.push(gesture_badge(label));
    }

    if features.use_native_controls {
        stack = stack.push(native_controls(ctx.session));
    } else if ctx.session.controls_visible() {
        stack = stack.push(custom_controls(ctx.session));
    }

    stack.into()
}

fn video_surface<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match (ctx.error, ctx.frame) {
        (Some(error), _) => Text::new(format!("Cannot play this video: {error}"))
            .size(typography::BODY)
            .color(WHITE)
            .into(),
        (None, Some(handle)) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (None, None) => Text::new("Loading…")
            .size(typography::BODY)
            .color(WHITE)
            .into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::video_surface)
        .into()
}

fn gesture_badge<'a>(label: String) -> Element<'a, Message> {
    let badge = Container::new(Text::new(label).size(typography::TITLE_MD))
        .width(Length::Fixed(sizing::GESTURE_OVERLAY_WIDTH))
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .style(styles::overlay::indicator(radius::LG));

    Container::new(badge)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn overlay_button<'a>(label: impl Into<String>, message: Message) -> button::Button<'a, Message> {
    button(Text::new(label.into()).size(typography::BODY))
        .on_press(message)
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_STRONG,
        ))
}

fn transport_message(action: transport::Message) -> Message {
    Message::Session(session::Message::Transport(action))
}

/// Top bar (back, title, fullscreen) and bottom transport bar.
fn custom_controls(session: &session::State) -> Element<'_, Message> {
    let fullscreen_label = if session.is_fullscreen() {
        "Exit fullscreen"
    } else {
        "Fullscreen"
    };

    let top_bar = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(overlay_button("← Back", Message::Back))
            .push(
                Text::new(session.video().video_title.as_str())
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(overlay_button(
                fullscreen_label,
                Message::Session(session::Message::ToggleFullscreen),
            )),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(styles::overlay::controls_container);

    let bottom_bar = Container::new(transport_bar(session, true))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CONTROLS_BAR_HEIGHT))
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::controls_container);

    Column::new()
        .push(top_bar)
        .push(Space::new().height(Length::Fill))
        .push(bottom_bar)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Always-visible stock controls with default widget styling.
fn native_controls(session: &session::State) -> Element<'_, Message> {
    let bar = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(button(Text::new("Done")).on_press(Message::Back))
        .push(transport_bar(session, false));

    Column::new()
        .push(Space::new().height(Length::Fill))
        .push(Container::new(bar).width(Length::Fill).padding(spacing::XS))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Play/pause, skip buttons, timeline slider and time display.
#[allow(clippy::cast_precision_loss)]
fn transport_bar(session: &session::State, overlay_style: bool) -> Element<'_, Message> {
    let transport = session.transport();
    let playback = transport.playback();
    let play_label = if playback.is_playing() { "Pause" } else { "Play" };

    let step_secs = transport.seek_step().as_millis() / 1000;

    let make_button = |label: String, action: transport::Message| {
        if overlay_style {
            overlay_button(label, transport_message(action))
        } else {
            button(Text::new(label)).on_press(transport_message(action))
        }
    };

    let duration = playback.duration_ms() as f64;
    let position = (transport.display_position() as f64).min(duration);
    let timeline = slider(0.0..=duration, position, |value| {
        transport_message(transport::Message::SliderMoved(value))
    })
    .on_release(transport_message(transport::Message::SliderReleased))
    .step(SLIDER_STEP_MS)
    .width(Length::Fill);

    let time_display = text(format_progress(
        transport.display_position(),
        playback.duration_ms(),
    ))
    .size(typography::CAPTION);

    let volume_display =
        text(format!("Vol {}%", playback.volume().percent())).size(typography::CAPTION);

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(make_button(format!("−{step_secs}s"), transport::Message::SeekBackward))
        .push(make_button(play_label.to_string(), transport::Message::TogglePlayPause))
        .push(make_button(format!("+{step_secs}s"), transport::Message::SeekForward))
        .push(timeline)
        .push(time_display)
        .push(volume_display)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_wraps_session_transport() {
        assert_eq!(
            transport_message(transport::Message::TogglePlayPause),
            Message::Session(session::Message::Transport(
                transport::Message::TogglePlayPause
            ))
        );
    }
}
