// SPDX-License-Identifier: MPL-2.0
//! Device capability types: display brightness and orientation locks.

use std::fmt;

// =============================================================================
// Brightness
// =============================================================================

/// Brightness bounds (0.0 = darkest, 1.0 = brightest).
pub mod brightness_bounds {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 1.0;
    /// Assumed level before the device has been queried.
    pub const DEFAULT: f32 = 0.5;
}

/// Display brightness, guaranteed to be within valid range (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brightness(f32);

impl Brightness {
    /// Creates a new brightness level, clamping to valid range.
    ///
    /// `NaN` collapses to the minimum.
    #[must_use]
    pub fn new(level: f32) -> Self {
        if level.is_nan() {
            return Self(brightness_bounds::MIN);
        }
        Self(level.clamp(brightness_bounds::MIN, brightness_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the level as a whole percentage (0–100).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(brightness_bounds::DEFAULT)
    }
}

// =============================================================================
// Orientation
// =============================================================================

/// Screen orientation lock requested from the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrientationLock {
    Portrait,
    Landscape,
    /// Release any lock and let the platform decide.
    #[default]
    Default,
}

impl fmt::Display for OrientationLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}

/// A device capability that can be refused by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Brightness,
    Orientation,
    Playback,
    MediaLibrary,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Brightness => "brightness",
            Self::Orientation => "orientation",
            Self::Playback => "playback",
            Self::MediaLibrary => "media library",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn brightness_clamps_to_unit_range() {
        assert_abs_diff_eq!(Brightness::new(2.0).value(), 1.0);
        assert_abs_diff_eq!(Brightness::new(-1.0).value(), 0.0);
        assert_abs_diff_eq!(Brightness::new(f32::NAN).value(), 0.0);
    }

    #[test]
    fn brightness_percent() {
        assert_eq!(Brightness::new(0.25).percent(), 25);
        assert_eq!(Brightness::default().percent(), 50);
    }

    #[test]
    fn orientation_lock_displays_lowercase() {
        assert_eq!(OrientationLock::Landscape.to_string(), "landscape");
        assert_eq!(OrientationLock::default(), OrientationLock::Default);
    }
}
