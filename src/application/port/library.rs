// SPDX-License-Identifier: MPL-2.0
//! Media library port definition.
//!
//! [`MediaLibrary`] enumerates albums and pages through the assets they
//! contain. The filesystem adapter lives in
//! [`crate::infrastructure::fs_library`].

use crate::domain::error::LibraryError;
use crate::domain::library::{Album, AssetPage, AssetQuery};

/// Port for enumerating device-local media.
///
/// Implementations must be `Send + Sync` so queries can run inside
/// `Task::perform` futures.
pub trait MediaLibrary: Send + Sync {
    /// Lists every album, including those without videos.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::PermissionDenied`] if access is refused.
    fn albums(&self) -> Result<Vec<Album>, LibraryError>;

    /// Returns one page of assets matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::AlbumNotFound`] for an unknown album id.
    fn assets(&self, query: &AssetQuery) -> Result<AssetPage, LibraryError>;
}
