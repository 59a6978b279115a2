// SPDX-License-Identifier: MPL-2.0
//! Filesystem implementation of the [`MediaLibrary`] port.
//!
//! The library root maps to albums as follows: the root itself is the
//! "All videos" album (its own files plus those of its direct
//! sub-directories), and each direct sub-directory is an album named after
//! the directory. Assets are sorted by file name, case-insensitively.
//! Cursors are the offset of the next asset, encoded as a string.

use crate::application::port::MediaLibrary;
use crate::domain::error::LibraryError;
use crate::domain::library::{Album, AlbumId, AssetPage, AssetQuery, Cursor, VideoAsset};
use std::path::{Path, PathBuf};

/// Album id of the root album.
pub const ALL_VIDEOS_ID: &str = "all";
/// Title of the root album.
pub const ALL_VIDEOS_TITLE: &str = "All videos";

/// Video file extensions
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];

/// Media library reading a directory tree.
#[derive(Debug, Clone)]
pub struct FsMediaLibrary {
    root: PathBuf,
}

impl FsMediaLibrary {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn album_dirs(&self) -> Result<Vec<PathBuf>, LibraryError> {
        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            let hidden = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with('.'));
            if path.is_dir() && !hidden {
                dirs.push(path);
            }
        }
        dirs.sort_by_key(|path| sort_key(path));
        Ok(dirs)
    }

    fn album_files(&self, album: &AlbumId) -> Result<Vec<PathBuf>, LibraryError> {
        let mut files = if album.as_str() == ALL_VIDEOS_ID {
            let mut files = files_in(&self.root)?;
            for dir in self.album_dirs()? {
                files.extend(files_in(&dir)?);
            }
            files
        } else {
            let dir = self.root.join(album.as_str());
            let inside_root = Path::new(album.as_str()).components().count() == 1;
            if !inside_root || !dir.is_dir() {
                return Err(LibraryError::AlbumNotFound(album.to_string()));
            }
            files_in(&dir)?
        };
        files.sort_by_key(|path| sort_key(path));
        Ok(files)
    }

    fn asset(&self, path: &Path) -> VideoAsset {
        let id = path
            .strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        VideoAsset {
            id,
            uri: path.to_string_lossy().into_owned(),
            filename: file_name(path),
        }
    }
}

impl MediaLibrary for FsMediaLibrary {
    fn albums(&self) -> Result<Vec<Album>, LibraryError> {
        let mut albums = vec![Album {
            id: AlbumId::new(ALL_VIDEOS_ID),
            title: ALL_VIDEOS_TITLE.to_string(),
        }];
        albums.extend(self.album_dirs()?.iter().map(|dir| {
            let name = file_name(dir);
            Album {
                id: AlbumId::new(name.clone()),
                title: name,
            }
        }));
        Ok(albums)
    }

    fn assets(&self, query: &AssetQuery) -> Result<AssetPage, LibraryError> {
        let files = self.album_files(&query.album)?;
        let offset = match &query.after {
            Some(cursor) => cursor
                .as_str()
                .parse::<usize>()
                .map_err(|_| LibraryError::Io(format!("invalid cursor: {}", cursor.as_str())))?,
            None => 0,
        };

        let start = offset.min(files.len());
        let end = start.saturating_add(query.first).min(files.len());
        let assets: Vec<VideoAsset> = files[start..end].iter().map(|path| self.asset(path)).collect();

        Ok(AssetPage {
            end_cursor: (!assets.is_empty()).then(|| Cursor::new(end.to_string())),
            has_next_page: end < files.len(),
            total_count: files.len(),
            assets,
        })
    }
}

/// Builds an asset for a single picked file, outside any album.
#[must_use]
pub fn asset_for_path(path: &Path) -> Option<VideoAsset> {
    has_extension(path, VIDEO_EXTENSIONS).then(|| VideoAsset {
        id: path.to_string_lossy().into_owned(),
        uri: path.to_string_lossy().into_owned(),
        filename: file_name(path),
    })
}

fn files_in(dir: &Path) -> Result<Vec<PathBuf>, LibraryError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, VIDEO_EXTENSIONS) {
            files.push(path);
        }
    }
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn sort_key(path: &Path) -> String {
    file_name(path).to_lowercase()
}
