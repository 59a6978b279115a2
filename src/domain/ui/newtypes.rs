// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Controls Bounds
// =============================================================================

/// Auto-hide delay bounds for the player controls, in milliseconds.
pub mod controls_bounds {
    /// Minimum hide delay.
    pub const MIN_MS: u64 = 500;
    /// Maximum hide delay.
    pub const MAX_MS: u64 = 30_000;
    /// Default hide delay.
    pub const DEFAULT_MS: u64 = 3_000;
}

// =============================================================================
// ControlsTimeout
// =============================================================================

/// Delay after which visible player controls hide themselves.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.5–30 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsTimeout(u64);

impl ControlsTimeout {
    /// Creates a new timeout, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(controls_bounds::MIN_MS, controls_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ControlsTimeout {
    fn default() -> Self {
        Self(controls_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// DragThreshold
// =============================================================================

/// Pointer travel bounds (in logical pixels) before a press becomes a drag.
pub mod drag_bounds {
    pub const MIN_PX: f32 = 1.0;
    pub const MAX_PX: f32 = 64.0;
    pub const DEFAULT_PX: f32 = 10.0;
}

/// Distance a pressed pointer must travel before the press counts as a drag
/// instead of a tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragThreshold(f32);

impl DragThreshold {
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.clamp(drag_bounds::MIN_PX, drag_bounds::MAX_PX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for DragThreshold {
    fn default() -> Self {
        Self(drag_bounds::DEFAULT_PX)
    }
}
