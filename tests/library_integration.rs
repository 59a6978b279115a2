// SPDX-License-Identifier: MPL-2.0
//! Album listing and paging over a real directory tree.

use iced_reel::application::port::MediaLibrary;
use iced_reel::application::query::{load_album_videos, load_video_albums};
use iced_reel::domain::error::LibraryError;
use iced_reel::domain::library::{Album, AlbumId, AssetQuery};
use iced_reel::infrastructure::fs_library::{asset_for_path, ALL_VIDEOS_ID, ALL_VIDEOS_TITLE};
use iced_reel::infrastructure::FsMediaLibrary;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn touch(path: &Path) {
    fs::write(path, b"").expect("Failed to create file");
}

/// Root with two loose clips, a "Trips" album of 5 clips, a photo-only
/// album and an empty one.
fn populated_library() -> (TempDir, FsMediaLibrary) {
    let dir = tempdir().expect("Failed to create temporary directory");
    let root = dir.path();

    touch(&root.join("intro.mp4"));
    touch(&root.join("Outro.webm"));
    touch(&root.join("readme.txt"));

    fs::create_dir(root.join("Trips")).expect("Failed to create album");
    for i in 1..=5 {
        touch(&root.join(format!("Trips/day{i}.mov")));
    }

    fs::create_dir(root.join("Photos")).expect("Failed to create album");
    touch(&root.join("Photos/cat.jpg"));

    fs::create_dir(root.join("Empty")).expect("Failed to create album");

    let library = FsMediaLibrary::new(root);
    (dir, library)
}

#[test]
fn video_albums_skip_albums_without_videos() {
    let (_dir, library) = populated_library();

    let albums = load_video_albums(&library).expect("Failed to list albums");
    let summary: Vec<(&str, usize)> = albums
        .iter()
        .map(|entry| (entry.album.title.as_str(), entry.video_count))
        .collect();

    assert_eq!(summary, vec![(ALL_VIDEOS_TITLE, 7), ("Trips", 5)]);
}

#[test]
fn album_videos_are_collected_across_pages() {
    let (_dir, library) = populated_library();
    let trips = Album {
        id: AlbumId::new("Trips"),
        title: "Trips".into(),
    };

    let videos = load_album_videos(&library, &trips, 2).expect("Failed to load album");
    let names: Vec<&str> = videos.iter().map(|video| video.filename.as_str()).collect();

    assert_eq!(
        names,
        vec!["day1.mov", "day2.mov", "day3.mov", "day4.mov", "day5.mov"]
    );
}

#[test]
fn paging_reports_cursor_and_remaining_pages() {
    let (_dir, library) = populated_library();

    let first = library
        .assets(&AssetQuery::videos(AlbumId::new("Trips"), 3))
        .expect("Failed to query first page");
    assert_eq!(first.assets.len(), 3);
    assert!(first.has_next_page);
    assert_eq!(first.total_count, 5);

    let second = library
        .assets(&AssetQuery::videos(AlbumId::new("Trips"), 3).after(first.end_cursor))
        .expect("Failed to query second page");
    assert_eq!(second.assets.len(), 2);
    assert!(!second.has_next_page);
}

#[test]
fn root_album_includes_loose_and_nested_videos() {
    let (_dir, library) = populated_library();
    let all = Album {
        id: AlbumId::new(ALL_VIDEOS_ID),
        title: ALL_VIDEOS_TITLE.into(),
    };

    let videos = load_album_videos(&library, &all, 100).expect("Failed to load album");

    assert_eq!(videos.len(), 7);
    assert_eq!(videos[0].filename, "day1.mov");
    assert!(videos.iter().any(|video| video.filename == "Outro.webm"));
}

#[test]
fn unknown_album_is_reported() {
    let (_dir, library) = populated_library();
    let missing = Album {
        id: AlbumId::new("Nowhere"),
        title: "Nowhere".into(),
    };

    let result = load_album_videos(&library, &missing, 10);
    assert!(matches!(result, Err(LibraryError::AlbumNotFound(_))));
}

#[test]
fn picked_file_becomes_a_playable_asset() {
    let (dir, _library) = populated_library();

    let clip = dir.path().join("intro.mp4");
    let asset = asset_for_path(&clip).expect("mp4 should be accepted");
    assert_eq!(asset.filename, "intro.mp4");
    assert_eq!(asset.to_video_ref().video_title, "intro.mp4");

    assert!(asset_for_path(&dir.path().join("readme.txt")).is_none());
}
