// SPDX-License-Identifier: MPL-2.0
//! Feedback overlay shown while a drag gesture is in progress.
//!
//! The overlay is derived from the gesture interpreter on every render and
//! is never stored: idle gestures produce the hidden overlay.

use super::gesture::{self, Axis};
use super::time_format::format_progress;
use crate::domain::device::Brightness;
use crate::domain::video::Volume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayKind {
    #[default]
    None,
    Brightness,
    Volume,
    Seek,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    pub visible: bool,
    pub kind: OverlayKind,
}

impl OverlayState {
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Derives the overlay from the gesture in progress.
    ///
    /// Shows exactly one kind while an axis is active, nothing otherwise.
    #[must_use]
    pub fn from_gesture(gesture: &gesture::State, enabled: bool) -> Self {
        if !enabled {
            return Self::hidden();
        }
        let kind = match gesture.axis() {
            Some(Axis::Seek) => OverlayKind::Seek,
            Some(Axis::Brightness) => OverlayKind::Brightness,
            Some(Axis::Volume) => OverlayKind::Volume,
            Some(Axis::Undetermined) | None => return Self::hidden(),
        };
        Self {
            visible: true,
            kind,
        }
    }
}

/// Values the overlay text is rendered from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayValues {
    pub brightness: Brightness,
    pub volume: Volume,
    pub seek_preview_ms: Option<u64>,
    pub duration_ms: u64,
}

/// Text for an overlay, or `None` when nothing is shown.
#[must_use]
pub fn overlay_text(state: OverlayState, values: &OverlayValues) -> Option<String> {
    if !state.visible {
        return None;
    }
    match state.kind {
        OverlayKind::Brightness => Some(format!("Brightness: {}%", values.brightness.percent())),
        OverlayKind::Volume => Some(format!("Volume: {}%", values.volume.percent())),
        OverlayKind::Seek => values
            .seek_preview_ms
            .map(|position| format_progress(position, values.duration_ms)),
        OverlayKind::None => None,
    }
}
