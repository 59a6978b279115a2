// SPDX-License-Identifier: MPL-2.0
//! Player session: one open video with its gesture, transport, controls and
//! orientation state.
//!
//! The session is the single entry point the application shell talks to.
//! Every message carries the current instant (or receives it alongside) so
//! the controls timer never reads the wall clock itself.

use super::controls;
use super::gesture::{self, AxisSelection, DragSample, GestureOrigin, Viewport};
use super::orientation;
use super::overlay::{overlay_text, OverlayState, OverlayValues};
use super::transport;
use crate::application::port::DeviceGateway;
use crate::domain::device::{Brightness, Capability};
use crate::domain::error::DeviceError;
use crate::domain::library::VideoRef;
use crate::domain::ui::ControlsTimeout;
use crate::domain::video::{FullscreenUpdate, NaturalSize, PlaybackStatus, SeekStep, Volume};
use std::time::Instant;

/// Player variant flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerFeatures {
    /// Stock controls are shown and the custom controls overlay is not.
    pub use_native_controls: bool,
    pub enable_gesture_controls: bool,
    pub enable_overlay: bool,
}

impl Default for PlayerFeatures {
    fn default() -> Self {
        Self {
            use_native_controls: false,
            enable_gesture_controls: true,
            enable_overlay: true,
        }
    }
}

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionSettings {
    pub features: PlayerFeatures,
    pub axis_selection: AxisSelection,
    pub hide_delay: ControlsTimeout,
    pub seek_step: SeekStep,
    pub autoplay: bool,
    pub initial_volume: Volume,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The player screen became visible.
    Mounted,
    Status(PlaybackStatus),
    /// Playback stopped at the end of the video.
    Finished,
    ReadyForDisplay(NaturalSize),
    FullscreenUpdate(FullscreenUpdate),
    GestureBegan(Viewport),
    GestureMoved(DragSample),
    GestureEnded,
    /// A tap (press and release without a drag) on the video surface.
    SurfaceTapped,
    /// A press on one of the on-screen transport controls.
    Transport(transport::Message),
    ToggleFullscreen,
    Tick,
    /// The player screen is going away.
    Closed,
}

/// Effects the application shell must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Playback should end and navigation return to the previous screen.
    Back,
    /// Show a one-time alert that a capability was refused.
    PermissionDenied(Capability),
    FullscreenChanged(bool),
}

/// State of one open video.
#[derive(Debug, Clone)]
pub struct State {
    video: VideoRef,
    settings: SessionSettings,
    gesture: gesture::State,
    transport: transport::State,
    controls: controls::State,
    orientation: orientation::State,
    /// Last brightness read from or written to the device.
    brightness: Brightness,
    brightness_denied: bool,
}

impl State {
    #[must_use]
    pub fn new(video: VideoRef, settings: SessionSettings) -> Self {
        Self {
            video,
            gesture: gesture::State::new(settings.axis_selection),
            transport: transport::State::new(
                settings.seek_step,
                settings.autoplay,
                settings.initial_volume,
            ),
            controls: controls::State::new(settings.hide_delay),
            orientation: orientation::State::default(),
            brightness: Brightness::default(),
            brightness_denied: false,
            settings,
        }
    }

    #[must_use]
    pub fn video(&self) -> &VideoRef {
        &self.video
    }

    #[must_use]
    pub fn features(&self) -> PlayerFeatures {
        self.settings.features
    }

    #[must_use]
    pub fn transport(&self) -> &transport::State {
        &self.transport
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        !self.settings.features.use_native_controls && self.controls.is_visible()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.orientation.is_fullscreen()
    }

    #[must_use]
    pub fn natural_size(&self) -> Option<NaturalSize> {
        self.orientation.natural_size()
    }

    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    #[must_use]
    pub fn gesture_active(&self) -> bool {
        self.gesture.is_active()
    }

    /// Overlay derived from the gesture in progress.
    #[must_use]
    pub fn overlay(&self) -> OverlayState {
        OverlayState::from_gesture(&self.gesture, self.settings.features.enable_overlay)
    }

    #[must_use]
    pub fn overlay_text(&self) -> Option<String> {
        let playback = self.transport.playback();
        overlay_text(
            self.overlay(),
            &OverlayValues {
                brightness: self.brightness,
                volume: playback.volume(),
                seek_preview_ms: self.gesture.seek_preview(),
                duration_ms: playback.duration_ms(),
            },
        )
    }

    /// Handle a session message at instant `now`.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(
        &mut self,
        msg: Message,
        device: &mut dyn DeviceGateway,
        now: Instant,
    ) -> Effect {
        match msg {
            Message::Mounted => {
                tracing::info!(video = %self.video.video_title, "player opened");
                self.orientation
                    .handle(orientation::Message::Mounted, device);
                match device.brightness() {
                    Ok(level) => {
                        self.brightness = level;
                        Effect::None
                    }
                    Err(err) => self.brightness_failure(&err),
                }
            }
            Message::Status(status) => {
                self.transport
                    .handle(transport::Message::Status(status), device);
                Effect::None
            }
            Message::Finished => {
                self.transport.handle(transport::Message::Finished, device);
                Effect::None
            }
            Message::ReadyForDisplay(size) => {
                self.orientation
                    .handle(orientation::Message::ReadyForDisplay(size), device);
                Effect::None
            }
            Message::FullscreenUpdate(update) => {
                if self.settings.features.use_native_controls && update.code() > 2 {
                    tracing::debug!("native fullscreen dismissed, leaving player");
                    Effect::Back
                } else {
                    Effect::None
                }
            }
            Message::GestureBegan(viewport) => {
                if !self.settings.features.enable_gesture_controls {
                    return Effect::None;
                }
                let playback = self.transport.playback();
                let origin = GestureOrigin {
                    position_ms: playback.position_ms(),
                    duration_ms: playback.duration_ms(),
                    brightness: self.brightness,
                    volume: playback.volume(),
                };
                self.gesture
                    .handle(gesture::Message::Began { viewport, origin });
                Effect::None
            }
            Message::GestureMoved(sample) => {
                let effect = self.gesture.handle(gesture::Message::Moved(sample));
                self.apply_gesture(effect, device)
            }
            Message::GestureEnded => {
                let effect = self.gesture.handle(gesture::Message::Ended);
                self.apply_gesture(effect, device)
            }
            Message::SurfaceTapped => {
                if !self.settings.features.use_native_controls {
                    self.controls.handle(controls::Message::Toggle(now));
                }
                Effect::None
            }
            Message::Transport(action) => {
                self.controls.handle(controls::Message::Interaction(now));
                self.transport.handle(action, device);
                Effect::None
            }
            Message::ToggleFullscreen => {
                self.controls.handle(controls::Message::Interaction(now));
                match self
                    .orientation
                    .handle(orientation::Message::ToggleFullscreen, device)
                {
                    orientation::Effect::FullscreenChanged(fullscreen) => {
                        Effect::FullscreenChanged(fullscreen)
                    }
                    _ => Effect::None,
                }
            }
            Message::Tick => {
                if self.transport.is_scrubbing() {
                    // A held slider keeps the controls up until it is released.
                    self.controls.handle(controls::Message::Interaction(now));
                } else {
                    self.controls.handle(controls::Message::Tick(now));
                }
                Effect::None
            }
            Message::Closed => {
                tracing::info!(video = %self.video.video_title, "player closed");
                self.gesture.handle(gesture::Message::Cancelled);
                self.controls.handle(controls::Message::Teardown);
                self.orientation
                    .handle(orientation::Message::Teardown, device);
                Effect::None
            }
        }
    }

    fn apply_gesture(&mut self, effect: gesture::Effect, device: &mut dyn DeviceGateway) -> Effect {
        match effect {
            gesture::Effect::SetBrightness(level) => {
                self.brightness = level;
                match device.set_brightness(level) {
                    Ok(()) => Effect::None,
                    Err(err) => self.brightness_failure(&err),
                }
            }
            gesture::Effect::SetVolume(volume) => {
                self.transport
                    .handle(transport::Message::SetVolume(volume), device);
                Effect::None
            }
            gesture::Effect::CommitSeek(position_ms) => {
                self.transport
                    .handle(transport::Message::SeekTo(position_ms), device);
                Effect::None
            }
            gesture::Effect::PreviewSeek(_) | gesture::Effect::Finished | gesture::Effect::None => {
                Effect::None
            }
        }
    }

    /// Logs a brightness failure; a refused permission is surfaced once.
    fn brightness_failure(&mut self, err: &DeviceError) -> Effect {
        if self.brightness_denied {
            tracing::debug!("brightness still unavailable: {err}");
            return Effect::None;
        }
        tracing::warn!("brightness unavailable: {err}");
        if err.is_permission_denied() {
            self.brightness_denied = true;
            return Effect::PermissionDenied(Capability::Brightness);
        }
        Effect::None
    }
}
