// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! Errors reported across the device and media-library ports. They carry
//! plain data only so they can be cloned into UI messages.

use crate::domain::device::Capability;
use thiserror::Error;

/// Failure of a device capability call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// The platform refused access to the capability.
    #[error("permission denied for {0}")]
    PermissionDenied(Capability),

    /// The playback backend has not started yet.
    #[error("playback backend is not ready")]
    NotReady,

    #[error("unsupported on this platform: {0}")]
    Unsupported(String),

    #[error("device backend failure: {0}")]
    Backend(String),
}

impl DeviceError {
    /// Returns true if the failure is a refused permission.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}

/// Failure while enumerating albums or assets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("permission to read the media library was denied")]
    PermissionDenied,

    #[error("album not found: {0}")]
    AlbumNotFound(String),

    #[error("media library I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(err.to_string()),
        }
    }
}
