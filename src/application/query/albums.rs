// SPDX-License-Identifier: MPL-2.0
//! Album queries over a [`MediaLibrary`].
//!
//! The album list shows only albums holding at least one video, and the
//! album screen loads every video of an album by walking the pages until
//! the library reports there is nothing left.

use crate::application::port::MediaLibrary;
use crate::domain::error::LibraryError;
use crate::domain::library::{Album, AssetQuery, VideoAlbum, VideoAsset};

/// Lists albums that contain at least one video, with their video count.
///
/// Album order follows the library.
///
/// # Errors
///
/// Propagates the first [`LibraryError`] raised by the library.
pub fn load_video_albums(library: &dyn MediaLibrary) -> Result<Vec<VideoAlbum>, LibraryError> {
    let albums = library.albums()?;
    let mut with_videos = Vec::with_capacity(albums.len());

    for album in albums {
        let first_page = library.assets(&AssetQuery::videos(album.id.clone(), 1))?;
        if first_page.total_count > 0 {
            with_videos.push(VideoAlbum {
                album,
                video_count: first_page.total_count,
            });
        }
    }

    tracing::debug!(count = with_videos.len(), "listed video albums");
    Ok(with_videos)
}

/// Loads every video of `album`, `page_size` assets at a time.
///
/// A zero `page_size` is treated as 1 so the walk always progresses. Paging
/// also stops if a page claims more data but returns no cursor.
///
/// # Errors
///
/// Propagates the first [`LibraryError`] raised by the library.
pub fn load_album_videos(
    library: &dyn MediaLibrary,
    album: &Album,
    page_size: usize,
) -> Result<Vec<VideoAsset>, LibraryError> {
    let first = page_size.max(1);
    let mut videos = Vec::new();
    let mut after = None;

    loop {
        let query = AssetQuery::videos(album.id.clone(), first).after(after.take());
        let page = library.assets(&query)?;
        videos.extend(page.assets);

        if !page.has_next_page {
            break;
        }
        match page.end_cursor {
            Some(cursor) => after = Some(cursor),
            None => {
                tracing::warn!(album = %album.id, "library reported more pages without a cursor");
                break;
            }
        }
    }

    tracing::debug!(album = %album.id, count = videos.len(), "loaded album videos");
    Ok(videos)
}
