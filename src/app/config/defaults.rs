// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Player**: Feature flags and initial playback settings
//! - **Gestures**: Drag recognition
//! - **Controls**: Auto-hide delay and seek step
//! - **Library**: Album paging

// ==========================================================================
// Player Defaults
// ==========================================================================

/// Custom gesture-driven controls are used unless native controls are requested.
pub const DEFAULT_USE_NATIVE_CONTROLS: bool = false;

pub const DEFAULT_ENABLE_GESTURE_CONTROLS: bool = true;

pub const DEFAULT_ENABLE_OVERLAY: bool = true;

/// Start playing as soon as the player opens.
pub const DEFAULT_AUTOPLAY: bool = true;

pub const DEFAULT_LOOP_PLAYBACK: bool = true;

/// Initial playback volume (0.0–1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Pointer travel (logical pixels) that turns a press into a drag.
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 10.0;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Delay before visible controls hide themselves (milliseconds).
pub const DEFAULT_CONTROLS_HIDE_DELAY_MS: u64 = 3_000;

pub const MIN_CONTROLS_HIDE_DELAY_MS: u64 = 500;

pub const MAX_CONTROLS_HIDE_DELAY_MS: u64 = 30_000;

/// Distance covered by the seek buttons (milliseconds).
pub const DEFAULT_SEEK_STEP_MS: u64 = 10_000;

pub const MIN_SEEK_STEP_MS: u64 = 1_000;

pub const MAX_SEEK_STEP_MS: u64 = 60_000;

// ==========================================================================
// Library Defaults
// ==========================================================================

/// Assets requested per page when loading an album.
pub const DEFAULT_PAGE_SIZE: usize = 100;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::newtypes::{controls_bounds, drag_bounds};
    use crate::domain::video::newtypes::{seek_step_bounds, volume_bounds};
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn controls_defaults_match_domain_bounds() {
        assert_eq!(DEFAULT_CONTROLS_HIDE_DELAY_MS, controls_bounds::DEFAULT_MS);
        assert_eq!(MIN_CONTROLS_HIDE_DELAY_MS, controls_bounds::MIN_MS);
        assert_eq!(MAX_CONTROLS_HIDE_DELAY_MS, controls_bounds::MAX_MS);
    }

    #[test]
    fn seek_step_defaults_match_domain_bounds() {
        assert_eq!(DEFAULT_SEEK_STEP_MS, seek_step_bounds::DEFAULT_MS);
        assert_eq!(MIN_SEEK_STEP_MS, seek_step_bounds::MIN_MS);
        assert_eq!(MAX_SEEK_STEP_MS, seek_step_bounds::MAX_MS);
    }

    #[test]
    fn volume_and_drag_defaults_match_domain() {
        assert_abs_diff_eq!(DEFAULT_VOLUME, volume_bounds::DEFAULT);
        assert_abs_diff_eq!(DEFAULT_DRAG_THRESHOLD_PX, drag_bounds::DEFAULT_PX);
    }

    #[test]
    fn page_size_is_positive() {
        assert!(DEFAULT_PAGE_SIZE > 0);
    }
}
