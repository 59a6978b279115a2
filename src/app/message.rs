// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::error::LibraryError;
use crate::domain::library::{AlbumId, VideoAlbum, VideoAsset};
use crate::infrastructure::playback::PlaybackMessage;
use crate::ui::notifications;
use crate::ui::{album_videos, albums, player};
use iced::{window, Point, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Raw pointer events routed to the player surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    Moved(Point),
    Pressed,
    Released,
    /// The cursor left the window.
    Left,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Albums(albums::Message),
    AlbumVideos(album_videos::Message),
    Player(player::Message),
    Playback(PlaybackMessage),
    Notification(notifications::NotificationMessage),
    AlbumsLoaded(Result<Vec<VideoAlbum>, LibraryError>),
    AlbumVideosLoaded {
        album: AlbumId,
        result: Result<Vec<VideoAsset>, LibraryError>,
    },
    /// Result from the import file dialog.
    ImportDialogResult(Option<PathBuf>),
    Pointer(Pointer),
    /// Window opened or resized.
    WindowResized {
        window: window::Id,
        size: Size,
    },
    EscapePressed,
    SpacePressed,
    Tick(Instant), // Periodic tick for controls auto-hide and toasts
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional video path to open in the player on startup.
    pub file_path: Option<String>,
}
