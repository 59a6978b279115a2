// SPDX-License-Identifier: MPL-2.0
//! Orientation reactor.
//!
//! Locks portrait when the player opens, switches once to the orientation
//! matching the decoded media, follows the fullscreen toggle, and releases
//! the lock when the player closes. Failed lock requests are logged and
//! never retried.

use super::report_failure;
use crate::application::port::DeviceGateway;
use crate::domain::device::OrientationLock;
use crate::domain::video::NaturalSize;

/// Orientation reactor state for one loaded video.
#[derive(Debug, Clone, Default)]
pub struct State {
    natural_size: Option<NaturalSize>,
    is_fullscreen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The player screen was shown.
    Mounted,
    /// The backend rendered its first frame.
    ReadyForDisplay(NaturalSize),
    ToggleFullscreen,
    /// The player screen is going away.
    Teardown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The device accepted this lock.
    Locked(OrientationLock),
    FullscreenChanged(bool),
}

impl State {
    #[must_use]
    pub fn natural_size(&self) -> Option<NaturalSize> {
        self.natural_size
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Returns true once the media orientation is known and wider than tall.
    #[must_use]
    pub fn is_landscape(&self) -> bool {
        self.natural_size.is_some_and(|size| size.is_landscape())
    }

    /// Handle an orientation message, issuing lock requests on `device`.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, device: &mut dyn DeviceGateway) -> Effect {
        match msg {
            Message::Mounted => lock(device, OrientationLock::Portrait),
            Message::ReadyForDisplay(size) => {
                if self.natural_size.is_some() {
                    return Effect::None;
                }
                self.natural_size = Some(size);
                let target = if size.is_landscape() {
                    OrientationLock::Landscape
                } else {
                    OrientationLock::Portrait
                };
                tracing::debug!(
                    width = size.width,
                    height = size.height,
                    "media ready, locking {target}"
                );
                lock(device, target)
            }
            Message::ToggleFullscreen => {
                let entering = !self.is_fullscreen;
                let target = if entering {
                    OrientationLock::Landscape
                } else {
                    OrientationLock::Portrait
                };
                if report_failure("fullscreen orientation lock", device.lock_orientation(target))
                {
                    self.is_fullscreen = entering;
                    Effect::FullscreenChanged(entering)
                } else {
                    Effect::None
                }
            }
            Message::Teardown => lock(device, OrientationLock::Default),
        }
    }
}

fn lock(device: &mut dyn DeviceGateway, target: OrientationLock) -> Effect {
    if report_failure("orientation lock", device.lock_orientation(target)) {
        Effect::Locked(target)
    } else {
        Effect::None
    }
}
