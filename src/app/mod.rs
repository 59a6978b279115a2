// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the library screens and
//! the player.
//!
//! The `App` struct wires together the media library, the player session and
//! the desktop device, and translates messages into side effects like window
//! reshapes, decoder commands or library queries.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Pointer};
pub use screen::Screen;

use crate::domain::library::{Album, VideoAlbum, VideoAsset};
use crate::infrastructure::fs_library::asset_for_path;
use crate::infrastructure::playback::DecoderOptions;
use crate::infrastructure::{DesktopDevice, FsMediaLibrary};
use crate::player::{session, SessionSettings};
use crate::ui::listing::Listing;
use crate::ui::notifications;
use crate::ui::player::pan::PanRecognizer;
use iced::widget::image;
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    /// Screen to return to when the player closes.
    return_screen: Screen,
    settings: SessionSettings,
    decoder_options: DecoderOptions,
    page_size: usize,
    library: Option<Arc<FsMediaLibrary>>,
    albums: Listing<VideoAlbum>,
    current_album: Option<Album>,
    album_videos: Listing<VideoAsset>,
    /// Videos picked through the file dialog during this run.
    imported: Vec<VideoAsset>,
    session: Option<session::State>,
    /// File and subscription id of the open video.
    playing: Option<(PathBuf, u64)>,
    next_session_id: u64,
    device: DesktopDevice,
    pan: PanRecognizer,
    frame: Option<image::Handle>,
    playback_error: Option<String>,
    cursor_position: Option<Point>,
    window_id: Option<window::Id>,
    window_size: Size,
    fullscreen: bool,
    library_denied_alerted: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("playing", &self.playing)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 405;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings. Portrait by default, like a phone held upright.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

#[allow(clippy::cast_precision_loss)]
impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Albums,
            return_screen: Screen::Albums,
            settings: SessionSettings::default(),
            decoder_options: DecoderOptions::default(),
            page_size: config::DEFAULT_PAGE_SIZE,
            library: None,
            albums: Listing::default(),
            current_album: None,
            album_videos: Listing::default(),
            imported: Vec::new(),
            session: None,
            playing: None,
            next_session_id: 0,
            device: DesktopDevice::new(),
            pan: PanRecognizer::default(),
            frame: None,
            playback_error: None,
            cursor_position: None,
            window_id: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            fullscreen: false,
            library_denied_alerted: false,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from the configuration and starts
    /// loading the album list, or opens the player for a file argument.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let mut app = App {
            settings: config.session_settings(),
            decoder_options: DecoderOptions {
                loop_playback: config.loop_playback(),
            },
            page_size: config.page_size(),
            pan: PanRecognizer::new(config.drag_threshold()),
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        app.library = paths::get_library_dir(config.library.root.clone()).map(|root| {
            tracing::info!(root = %root.display(), "media library");
            Arc::new(FsMediaLibrary::new(root))
        });

        let mut tasks = vec![app.load_albums()];

        if let Some(path) = flags.file_path.map(PathBuf::from) {
            match asset_for_path(&path) {
                Some(asset) => tasks.push(app.open_player(asset, Screen::Albums)),
                None => app.notifications.push(notifications::Notification::warning(format!(
                    "{} is not a supported video",
                    path.display()
                ))),
            }
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        const APP_NAME: &str = "IcedReel";
        match (&self.screen, &self.session, &self.current_album) {
            (Screen::Player, Some(session), _) => {
                format!("{} - {APP_NAME}", session.video().video_title)
            }
            (Screen::AlbumVideos, _, Some(album)) => format!("{} - {APP_NAME}", album.title),
            _ => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(
            self.session
                .as_ref()
                .is_some_and(session::State::controls_visible),
            self.notifications.has_notifications(),
        );
        let video_sub =
            subscription::create_video_subscription(self.playing.clone(), self.decoder_options);

        Subscription::batch([event_sub, tick_sub, video_sub])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            albums: &self.albums,
            current_album: self.current_album.as_ref(),
            album_videos: &self.album_videos,
            imported: &self.imported,
            session: self.session.as_ref(),
            frame: self.frame.as_ref(),
            dim_alpha: self.device.dim_alpha(),
            playback_error: self.playback_error.as_deref(),
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::LibraryError;
    use crate::domain::library::AlbumId;
    use crate::domain::video::Volume;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::{album_videos, albums, player};

    fn app_playing_clip() -> App {
        let mut app = App::default();
        let _ = app.update(Message::ImportDialogResult(Some(PathBuf::from(
            "/videos/clip.mp4",
        ))));
        app
    }

    #[test]
    fn title_shows_app_name_on_album_list() {
        assert_eq!(App::default().title(), "IcedReel");
    }

    #[test]
    fn importing_a_video_opens_the_player() {
        let app = app_playing_clip();

        assert_eq!(app.screen, Screen::Player);
        assert_eq!(app.imported.len(), 1);
        assert_eq!(app.title(), "clip.mp4 - IcedReel");
        assert_eq!(
            app.playing,
            Some((PathBuf::from("/videos/clip.mp4"), 1))
        );
    }

    #[test]
    fn importing_the_same_video_twice_lists_it_once() {
        let mut app = app_playing_clip();
        let _ = app.update(Message::Player(player::Message::Back));
        let _ = app.update(Message::ImportDialogResult(Some(PathBuf::from(
            "/videos/clip.mp4",
        ))));

        assert_eq!(app.imported.len(), 1);
        assert_eq!(app.playing.as_ref().map(|(_, id)| *id), Some(2));
    }

    #[test]
    fn unsupported_import_shows_warning() {
        let mut app = App::default();
        let _ = app.update(Message::ImportDialogResult(Some(PathBuf::from(
            "/photos/cat.jpg",
        ))));

        assert_eq!(app.screen, Screen::Albums);
        assert!(app.imported.is_empty());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn back_closes_session_and_returns() {
        let mut app = app_playing_clip();
        let _ = app.update(Message::Player(player::Message::Back));

        assert_eq!(app.screen, Screen::Albums);
        assert!(app.session.is_none());
        assert!(app.playing.is_none());
        assert!(!app.device.is_attached());
    }

    #[test]
    fn escape_leaves_player() {
        let mut app = app_playing_clip();
        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.screen, Screen::Albums);
    }

    #[test]
    fn escape_with_stock_controls_goes_back_through_fullscreen_dismiss() {
        let mut app = App::default();
        app.settings.features.use_native_controls = true;
        let _ = app.update(Message::ImportDialogResult(Some(PathBuf::from(
            "/videos/clip.mp4",
        ))));
        assert_eq!(app.screen, Screen::Player);

        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.screen, Screen::Albums);
        assert!(app.session.is_none());
    }

    #[test]
    fn tap_on_surface_shows_controls() {
        let mut app = app_playing_clip();
        let _ = app.update(Message::Pointer(Pointer::Moved(Point::new(200.0, 300.0))));
        let _ = app.update(Message::Pointer(Pointer::Pressed));
        let _ = app.update(Message::Pointer(Pointer::Released));

        assert!(app
            .session
            .as_ref()
            .is_some_and(session::State::controls_visible));
    }

    #[test]
    fn vertical_drag_on_right_half_sets_volume() {
        let mut app = app_playing_clip();
        let _ = app.update(Message::Pointer(Pointer::Moved(Point::new(300.0, 400.0))));
        let _ = app.update(Message::Pointer(Pointer::Pressed));
        let _ = app.update(Message::Pointer(Pointer::Moved(Point::new(300.0, 760.0))));

        assert_abs_diff_eq!(app.device.volume().value(), 0.5, epsilon = 1e-6);
        assert!(app
            .session
            .as_ref()
            .is_some_and(session::State::gesture_active));

        let _ = app.update(Message::Pointer(Pointer::Released));
        assert!(!app
            .session
            .as_ref()
            .is_some_and(session::State::gesture_active));
    }

    #[test]
    fn opening_player_applies_configured_volume() {
        let mut app = App::default();
        app.settings.initial_volume = Volume::new(0.3);
        let _ = app.update(Message::ImportDialogResult(Some(PathBuf::from(
            "/videos/clip.mp4",
        ))));

        assert_eq!(app.device.volume(), Volume::new(0.3));
    }

    #[test]
    fn library_denial_alerts_once() {
        let mut app = App::default();
        let _ = app.update(Message::AlbumsLoaded(Err(LibraryError::PermissionDenied)));
        let _ = app.update(Message::AlbumsLoaded(Err(LibraryError::PermissionDenied)));

        assert_eq!(app.notifications.visible_count(), 1);
        assert!(app.albums.items().is_empty());
    }

    #[test]
    fn videos_of_a_closed_album_are_dropped() {
        let mut app = App::default();
        let _ = app.update(Message::AlbumVideos(album_videos::Message::Back));
        let _ = app.update(Message::AlbumVideosLoaded {
            album: AlbumId::new("holidays"),
            result: Ok(Vec::new()),
        });
        assert!(app.album_videos.is_loading());
    }

    #[test]
    fn opening_album_without_library_is_ignored() {
        let mut app = App::default();
        let album = Album {
            id: AlbumId::new("all"),
            title: "All videos".into(),
        };
        let _ = app.update(Message::Albums(albums::Message::OpenAlbum(album)));
        assert_eq!(app.screen, Screen::Albums);
    }

    #[test]
    fn window_resize_is_recorded() {
        let mut app = App::default();
        let id = window::Id::unique();
        let _ = app.update(Message::WindowResized {
            window: id,
            size: Size::new(800.0, 450.0),
        });
        assert_eq!(app.window_id, Some(id));
        assert_eq!(app.window_size, Size::new(800.0, 450.0));
    }
}
