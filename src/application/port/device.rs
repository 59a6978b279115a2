// SPDX-License-Identifier: MPL-2.0
//! Device capability port definition.
//!
//! This module defines the [`DeviceGateway`] trait through which the player
//! core reaches display brightness, orientation locking and the playback
//! backend.
//!
//! # Design Notes
//!
//! - Calls are fire-and-forget: the core never waits for the backend to
//!   confirm a command, the next status tick reports the outcome
//! - Methods are not `async` - backends queue work and return immediately
//! - `lock_orientation` must be idempotent
//! - Status ticks and ready-for-display events flow back as messages, not
//!   through this trait

use crate::domain::device::{Brightness, OrientationLock};
use crate::domain::error::DeviceError;
use crate::domain::video::Volume;

// =============================================================================
// DeviceGateway Trait
// =============================================================================

/// Port for device capabilities used by the player screen.
///
/// # Example
///
/// ```ignore
/// use iced_reel::application::port::DeviceGateway;
/// use iced_reel::domain::device::OrientationLock;
///
/// fn enter_player(device: &mut dyn DeviceGateway) {
///     if let Err(e) = device.lock_orientation(OrientationLock::Portrait) {
///         tracing::warn!("orientation lock failed: {e}");
///     }
/// }
/// ```
pub trait DeviceGateway {
    /// Reads the current display brightness.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::PermissionDenied`] if the platform refuses access.
    fn brightness(&mut self) -> Result<Brightness, DeviceError>;

    /// Sets the display brightness.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the platform rejects the change.
    fn set_brightness(&mut self, level: Brightness) -> Result<(), DeviceError>;

    /// Locks the screen orientation. Locking the current lock again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the platform cannot lock orientation.
    fn lock_orientation(&mut self, lock: OrientationLock) -> Result<(), DeviceError>;

    /// Resumes playback.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotReady`] when no media is loaded yet.
    fn play(&mut self) -> Result<(), DeviceError>;

    /// Pauses playback.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotReady`] when no media is loaded yet.
    fn pause(&mut self) -> Result<(), DeviceError>;

    /// Seeks to an absolute position in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotReady`] when no media is loaded yet.
    fn seek_to(&mut self, position_ms: u64) -> Result<(), DeviceError>;

    /// Sets the playback volume.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotReady`] when no media is loaded yet.
    fn set_volume(&mut self, volume: Volume) -> Result<(), DeviceError>;
}
