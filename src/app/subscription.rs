// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard, mouse, window)
//! to the application based on the current screen.

use super::message::Pointer;
use super::{Message, Screen};
use crate::infrastructure::playback::{video_playback, DecoderOptions};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, window, Subscription};
use std::path::PathBuf;
use std::time::Duration;

/// Tick period for the controls timer and toast expiry.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Window events every screen needs.
fn window_message(event: &event::Event, window_id: window::Id) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => Some(Message::WindowResized {
            window: window_id,
            size: *size,
        }),
        _ => None,
    }
}

/// Creates the appropriate event subscription based on the current screen.
///
/// - Player: routes pointer events for gestures plus Escape and Space.
///   Presses already captured by a widget (a control button, the slider)
///   are not routed, so they never start a gesture.
/// - Library screens: window events only.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Player => event::listen_with(|event, status, window_id| {
            if let Some(message) = window_message(&event, window_id) {
                return Some(message);
            }

            match event {
                event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                    Some(Message::Pointer(Pointer::Moved(position)))
                }
                event::Event::Mouse(mouse::Event::CursorLeft) => {
                    Some(Message::Pointer(Pointer::Left))
                }
                event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                    Some(Message::Pointer(Pointer::Released))
                }
                event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                    match status {
                        event::Status::Ignored => Some(Message::Pointer(Pointer::Pressed)),
                        event::Status::Captured => None,
                    }
                }
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                    match (status, key) {
                        (event::Status::Ignored, Key::Named(Named::Escape)) => {
                            Some(Message::EscapePressed)
                        }
                        (event::Status::Ignored, Key::Named(Named::Space)) => {
                            Some(Message::SpacePressed)
                        }
                        _ => None,
                    }
                }
                _ => None,
            }
        }),
        Screen::Albums | Screen::AlbumVideos => {
            event::listen_with(|event, _status, window_id| window_message(&event, window_id))
        }
    }
}

/// Creates a periodic tick subscription for controls auto-hide and
/// notification auto-dismiss.
pub fn create_tick_subscription(
    controls_visible: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if controls_visible || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the decoder subscription for the open video, if any.
pub fn create_video_subscription(
    video: Option<(PathBuf, u64)>,
    options: DecoderOptions,
) -> Subscription<Message> {
    match video {
        Some((path, session_id)) => video_playback(path, session_id, options).map(Message::Playback),
        None => Subscription::none(),
    }
}
