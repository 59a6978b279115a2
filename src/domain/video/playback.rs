// SPDX-License-Identifier: MPL-2.0
//! Playback state and the events a playback backend reports.

use super::newtypes::Volume;

/// Snapshot of one playback session.
///
/// `position_ms` never exceeds `duration_ms`; `duration_ms` stays 0 until
/// the backend reports a loaded status.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    position_ms: u64,
    duration_ms: u64,
    is_playing: bool,
    volume: Volume,
}

impl PlaybackState {
    #[must_use]
    pub fn new(is_playing: bool, volume: Volume) -> Self {
        Self {
            position_ms: 0,
            duration_ms: 0,
            is_playing,
            volume,
        }
    }

    #[must_use]
    pub fn position_ms(&self) -> u64 {
        self.position_ms
    }

    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Returns true once a duration has been reported.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.duration_ms > 0
    }

    /// Returns true when a loaded video sits at its last position.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.is_loaded() && self.position_ms >= self.duration_ms
    }

    /// Clamps an arbitrary position (possibly negative or past the end)
    /// into `[0, duration]`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamp_position(&self, position_ms: f64) -> u64 {
        if position_ms.is_nan() || position_ms <= 0.0 {
            return 0;
        }
        (position_ms.round() as u64).min(self.duration_ms)
    }

    /// Sets the position, clamped into `[0, duration]`. Returns the stored value.
    pub fn set_position(&mut self, position_ms: u64) -> u64 {
        self.position_ms = position_ms.min(self.duration_ms);
        self.position_ms
    }

    /// Applies a loaded status tick.
    pub fn apply_status(&mut self, position_ms: u64, duration_ms: u64) {
        self.duration_ms = duration_ms;
        self.position_ms = position_ms.min(duration_ms);
    }

    pub fn set_playing(&mut self, is_playing: bool) {
        self.is_playing = is_playing;
    }

    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
    }
}

/// Periodic status reported by the playback backend.
///
/// Only a status that is loaded and carries both position and duration is
/// meaningful; anything else is ignored by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackStatus {
    pub is_loaded: bool,
    pub position_ms: Option<u64>,
    pub duration_ms: Option<u64>,
}

impl PlaybackStatus {
    #[must_use]
    pub fn loaded(position_ms: u64, duration_ms: u64) -> Self {
        Self {
            is_loaded: true,
            position_ms: Some(position_ms),
            duration_ms: Some(duration_ms),
        }
    }

    /// Returns `(position, duration)` when the status is usable.
    #[must_use]
    pub fn timeline(&self) -> Option<(u64, u64)> {
        if !self.is_loaded {
            return None;
        }
        Some((self.position_ms?, self.duration_ms?))
    }
}

/// Intrinsic pixel dimensions of the decoded media.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalSize {
    pub width: u32,
    pub height: u32,
}

impl NaturalSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Strictly wider than tall. Square media counts as portrait.
    #[must_use]
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

/// Fullscreen presentation events emitted by a native player surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenUpdate {
    WillPresent,
    DidPresent,
    WillDismiss,
    DidDismiss,
}

impl FullscreenUpdate {
    /// Numeric code of the event, in presentation order starting at 0.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::WillPresent => 0,
            Self::DidPresent => 1,
            Self::WillDismiss => 2,
            Self::DidDismiss => 3,
        }
    }
}
