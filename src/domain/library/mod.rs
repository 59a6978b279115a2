// SPDX-License-Identifier: MPL-2.0
//! Media library types: albums, video assets and paged queries.

use std::fmt;

/// Opaque album identifier assigned by the media library.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumId(String);

impl AlbumId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
}

/// An album paired with the number of videos it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAlbum {
    pub album: Album,
    pub video_count: usize,
}

/// A single video known to the media library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAsset {
    pub id: String,
    /// Location the playback backend can open.
    pub uri: String,
    pub filename: String,
}

impl VideoAsset {
    /// Builds the navigation payload handed to the player screen.
    #[must_use]
    pub fn to_video_ref(&self) -> VideoRef {
        VideoRef {
            video_id: self.id.clone(),
            video_url: self.uri.clone(),
            video_title: self.filename.clone(),
        }
    }
}

/// Continuation token returned by a paged asset query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Query for one page of video assets inside an album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetQuery {
    pub album: AlbumId,
    /// Maximum number of assets in the page.
    pub first: usize,
    /// Resume after this cursor; `None` starts from the beginning.
    pub after: Option<Cursor>,
}

impl AssetQuery {
    #[must_use]
    pub fn videos(album: AlbumId, first: usize) -> Self {
        Self {
            album,
            first,
            after: None,
        }
    }

    #[must_use]
    pub fn after(mut self, cursor: Option<Cursor>) -> Self {
        self.after = cursor;
        self
    }
}

/// One page of assets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetPage {
    pub assets: Vec<VideoAsset>,
    pub end_cursor: Option<Cursor>,
    pub has_next_page: bool,
    /// Total number of matching assets in the album, across all pages.
    pub total_count: usize,
}

/// Navigation payload identifying the video to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef {
    pub video_id: String,
    pub video_url: String,
    pub video_title: String,
}
