// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, where 1.0 = 100%).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f32 = 1.0;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// This newtype enforces validity at the type level, making it impossible
/// to create an invalid volume value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// `NaN` collapses to the minimum.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the volume as a whole percentage (0–100).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }

    /// Returns true if volume is effectively muted (below audible threshold).
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 < 0.001
    }

    /// Returns true if this is the minimum volume.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= volume_bounds::MIN
    }

    /// Returns true if this is the maximum volume.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= volume_bounds::MAX
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// SeekStep
// =============================================================================

/// Seek step bounds in milliseconds.
pub mod seek_step_bounds {
    /// Minimum seek step (1 second).
    pub const MIN_MS: u64 = 1_000;
    /// Maximum seek step (60 seconds).
    pub const MAX_MS: u64 = 60_000;
    /// Default seek step (10 seconds).
    pub const DEFAULT_MS: u64 = 10_000;
}

/// Distance covered by the forward/backward seek buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekStep(u64);

impl SeekStep {
    /// Creates a new seek step, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(seek_step_bounds::MIN_MS, seek_step_bounds::MAX_MS))
    }

    /// Returns the step in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SeekStep {
    fn default() -> Self {
        Self(seek_step_bounds::DEFAULT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn volume_clamps_to_unit_range() {
        assert_abs_diff_eq!(Volume::new(1.7).value(), 1.0);
        assert_abs_diff_eq!(Volume::new(-0.3).value(), 0.0);
        assert_abs_diff_eq!(Volume::new(0.42).value(), 0.42);
    }

    #[test]
    fn volume_nan_is_treated_as_silence() {
        let volume = Volume::new(f32::NAN);
        assert!(volume.is_min());
        assert!(volume.is_muted());
    }

    #[test]
    fn volume_default_is_full() {
        assert!(Volume::default().is_max());
        assert_eq!(Volume::default().percent(), 100);
    }

    #[test]
    fn volume_percent_rounds() {
        assert_eq!(Volume::new(0.506).percent(), 51);
        assert_eq!(Volume::new(0.0).percent(), 0);
    }

    #[test]
    fn seek_step_clamps_to_bounds() {
        assert_eq!(SeekStep::new(10).as_millis(), seek_step_bounds::MIN_MS);
        assert_eq!(SeekStep::new(600_000).as_millis(), seek_step_bounds::MAX_MS);
        assert_eq!(SeekStep::new(5_000).as_millis(), 5_000);
    }

    #[test]
    fn seek_step_default_is_ten_seconds() {
        assert_eq!(SeekStep::default().as_duration(), Duration::from_secs(10));
    }
}
