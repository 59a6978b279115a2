// SPDX-License-Identifier: MPL-2.0
//! Transport controller: owns the playback state and issues playback
//! commands through the device gateway.
//!
//! Commands are optimistic: local state changes first, the gateway call is
//! best-effort and failures are only logged. The next status tick from the
//! backend is applied as-is, even if it predates a just-issued seek.

use super::report_failure;
use crate::application::port::DeviceGateway;
use crate::domain::video::{PlaybackState, PlaybackStatus, SeekStep, Volume};

/// Transport controller state.
#[derive(Debug, Clone, Default)]
pub struct State {
    playback: PlaybackState,
    seek_step: SeekStep,
    /// Slider position while the user is dragging it.
    slider_preview: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Periodic status from the backend.
    Status(PlaybackStatus),
    TogglePlayPause,
    SeekForward,
    SeekBackward,
    /// Seek to an absolute position in milliseconds.
    SeekTo(u64),
    /// Timeline slider dragged to a position (milliseconds).
    SliderMoved(f64),
    /// Timeline slider released: commit the previewed position.
    SliderReleased,
    SetVolume(Volume),
    /// The backend stopped at the end of the video.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    PlayingChanged(bool),
    /// A seek was issued to this (clamped) position.
    Seeked(u64),
    VolumeChanged(Volume),
}

impl State {
    #[must_use]
    pub fn new(seek_step: SeekStep, is_playing: bool, volume: Volume) -> Self {
        Self {
            playback: PlaybackState::new(is_playing, volume),
            seek_step,
            slider_preview: None,
        }
    }

    #[must_use]
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    #[must_use]
    pub fn seek_step(&self) -> SeekStep {
        self.seek_step
    }

    /// Position shown on the timeline: the slider preview while dragging,
    /// otherwise the playback position.
    #[must_use]
    pub fn display_position(&self) -> u64 {
        self.slider_preview
            .unwrap_or_else(|| self.playback.position_ms())
    }

    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.slider_preview.is_some()
    }

    /// Handle a transport message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, device: &mut dyn DeviceGateway) -> Effect {
        match msg {
            Message::Status(status) => {
                if let Some((position, duration)) = status.timeline() {
                    self.playback.apply_status(position, duration);
                }
                Effect::None
            }
            Message::TogglePlayPause => {
                let playing = !self.playback.is_playing();
                if playing && self.playback.is_at_end() {
                    self.seek(0, device);
                }
                self.playback.set_playing(playing);
                let result = if playing { device.play() } else { device.pause() };
                report_failure(if playing { "play" } else { "pause" }, result);
                Effect::PlayingChanged(playing)
            }
            Message::SeekForward => {
                let target = self
                    .playback
                    .position_ms()
                    .saturating_add(self.seek_step.as_millis());
                self.seek(target, device)
            }
            Message::SeekBackward => {
                let target = self
                    .playback
                    .position_ms()
                    .saturating_sub(self.seek_step.as_millis());
                self.seek(target, device)
            }
            Message::SeekTo(position_ms) => self.seek(position_ms, device),
            Message::SliderMoved(position_ms) => {
                self.slider_preview = Some(self.playback.clamp_position(position_ms));
                Effect::None
            }
            Message::SliderReleased => match self.slider_preview.take() {
                Some(position_ms) => self.seek(position_ms, device),
                None => Effect::None,
            },
            Message::SetVolume(volume) => {
                self.playback.set_volume(volume);
                report_failure("set volume", device.set_volume(volume));
                Effect::VolumeChanged(volume)
            }
            Message::Finished => {
                let duration = self.playback.duration_ms();
                self.playback.set_position(duration);
                if self.playback.is_playing() {
                    self.playback.set_playing(false);
                    Effect::PlayingChanged(false)
                } else {
                    Effect::None
                }
            }
        }
    }

    fn seek(&mut self, position_ms: u64, device: &mut dyn DeviceGateway) -> Effect {
        let target = self.playback.set_position(position_ms);
        report_failure("seek", device.seek_to(target));
        Effect::Seeked(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DeviceError;
    use crate::test_utils::{DeviceCall, RecordingDevice};

    fn loaded(position_ms: u64, duration_ms: u64, device: &mut RecordingDevice) -> State {
        let mut state = State::new(SeekStep::default(), true, Volume::default());
        state.handle(
            Message::Status(PlaybackStatus::loaded(position_ms, duration_ms)),
            device,
        );
        state
    }

    #[test]
    fn unloaded_status_is_ignored() {
        let mut device = RecordingDevice::default();
        let mut state = loaded(5_000, 60_000, &mut device);

        state.handle(Message::Status(PlaybackStatus::default()), &mut device);
        let partial = PlaybackStatus {
            is_loaded: true,
            position_ms: Some(9_000),
            duration_ms: None,
        };
        state.handle(Message::Status(partial), &mut device);

        assert_eq!(state.playback().position_ms(), 5_000);
        assert_eq!(state.playback().duration_ms(), 60_000);
    }

    #[test]
    fn toggle_flips_immediately_and_issues_command() {
        let mut device = RecordingDevice::default();
        let mut state = loaded(0, 60_000, &mut device);

        assert_eq!(
            state.handle(Message::TogglePlayPause, &mut device),
            Effect::PlayingChanged(false)
        );
        assert_eq!(
            state.handle(Message::TogglePlayPause, &mut device),
            Effect::PlayingChanged(true)
        );
        assert_eq!(device.calls, vec![DeviceCall::Pause, DeviceCall::Play]);
    }

    #[test]
    fn toggle_failure_is_not_rolled_back() {
        let mut device = RecordingDevice::default();
        let mut state = loaded(0, 60_000, &mut device);
        device.fail_playback = Some(DeviceError::NotReady);

        state.handle(Message::TogglePlayPause, &mut device);
        assert!(!state.playback().is_playing());
    }

    #[test]
    fn seek_buttons_step_and_clamp() {
        let mut device = RecordingDevice::default();
        let mut state = loaded(55_000, 60_000, &mut device);

        assert_eq!(
            state.handle(Message::SeekForward, &mut device),
            Effect::Seeked(60_000)
        );
        assert_eq!(
            state.handle(Message::SeekBackward, &mut device),
            Effect::Seeked(50_000)
        );

        let mut state = loaded(4_000, 60_000, &mut device);
        assert_eq!(
            state.handle(Message::SeekBackward, &mut device),
            Effect::Seeked(0)
        );
        assert_eq!(device.seeks(), vec![60_000, 50_000, 0]);
    }

    #[test]
    fn seek_to_updates_position_optimistically() {
        let mut device = RecordingDevice::default();
        let mut state = loaded(0, 120_000, &mut device);

        state.handle(Message::SeekTo(300_000), &mut device);
        assert_eq!(state.playback().position_ms(), 120_000);
        assert_eq!(device.seeks(), vec![120_000]);
    }

    #[test]
    fn slider_previews_then_commits_on_release() {
        let mut device = RecordingDevice::default();
        let mut state = loaded(1_000, 60_000, &mut device);

        state.handle(Message::SliderMoved(30_000.0), &mut device);
        state.handle(Message::SliderMoved(42_000.0), &mut device);
        assert!(state.is_scrubbing());
        assert_eq!(state.display_position(), 42_000);
        assert!(device.seeks().is_empty());

        assert_eq!(
            state.handle(Message::SliderReleased, &mut device),
            Effect::Seeked(42_000)
        );
        assert!(!state.is_scrubbing());
        assert_eq!(device.seeks(), vec![42_000]);
        assert_eq!(state.handle(Message::SliderReleased, &mut device), Effect::None);
    }

    #[test]
    fn finished_playback_stops_and_replays_from_start() {
        let mut device = RecordingDevice::default();
        let mut state = loaded(58_000, 60_000, &mut device);

        assert_eq!(
            state.handle(Message::Finished, &mut device),
            Effect::PlayingChanged(false)
        );
        assert!(!state.playback().is_playing());
        assert_eq!(state.playback().position_ms(), 60_000);
        assert!(device.calls.is_empty());

        assert_eq!(
            state.handle(Message::TogglePlayPause, &mut device),
            Effect::PlayingChanged(true)
        );
        assert_eq!(device.calls, vec![DeviceCall::SeekTo(0), DeviceCall::Play]);
    }

    #[test]
    fn set_volume_is_issued_live() {
        let mut device = RecordingDevice::default();
        let mut state = loaded(0, 60_000, &mut device);

        state.handle(Message::SetVolume(Volume::new(0.25)), &mut device);
        assert_eq!(state.playback().volume(), Volume::new(0.25));
        assert_eq!(
            device.calls,
            vec![DeviceCall::SetVolume(Volume::new(0.25))]
        );
    }
}
