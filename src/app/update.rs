// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Player messages are forwarded to the session together with the desktop
//! device; the resulting effects and any window reshape queued by an
//! orientation lock are turned into window tasks here.

use super::message::Pointer;
use super::{App, Message, Screen};
use crate::application::port::DeviceGateway;
use crate::application::query::{load_album_videos, load_video_albums};
use crate::domain::error::LibraryError;
use crate::domain::library::VideoAsset;
use crate::domain::video::FullscreenUpdate;
use crate::infrastructure::desktop::oriented_size;
use crate::infrastructure::fs_library::{asset_for_path, VIDEO_EXTENSIONS};
use crate::infrastructure::playback::PlaybackMessage;
use crate::player::{session, transport};
use crate::ui::listing::Listing;
use crate::ui::notifications::Notification;
use crate::ui::player::pan;
use crate::ui::{album_videos, albums, player};
use iced::widget::image;
use iced::{window, Task};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Albums(msg) => self.handle_albums(msg),
            Message::AlbumVideos(msg) => self.handle_album_videos(msg),
            Message::Player(player::Message::Back) => self.close_player(),
            Message::Player(player::Message::Session(msg)) => {
                self.dispatch_session(msg, Instant::now())
            }
            Message::Playback(msg) => self.handle_playback(msg),
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::AlbumsLoaded(result) => {
                if matches!(result, Err(LibraryError::PermissionDenied)) {
                    self.alert_library_denied();
                }
                self.albums = result.into();
                Task::none()
            }
            Message::AlbumVideosLoaded { album, result } => {
                let is_current = self
                    .current_album
                    .as_ref()
                    .is_some_and(|current| current.id == album);
                if !is_current {
                    tracing::debug!(album = %album, "dropping videos of a closed album");
                    return Task::none();
                }
                if matches!(result, Err(LibraryError::PermissionDenied)) {
                    self.alert_library_denied();
                }
                self.album_videos = result.into();
                Task::none()
            }
            Message::ImportDialogResult(path) => self.handle_import_result(path),
            Message::Pointer(pointer) => self.handle_pointer(pointer),
            Message::WindowResized { window, size } => {
                self.window_id = Some(window);
                self.window_size = size;
                Task::none()
            }
            Message::EscapePressed => self.handle_escape(),
            Message::SpacePressed => self.dispatch_session(
                session::Message::Transport(transport::Message::TogglePlayPause),
                Instant::now(),
            ),
            Message::Tick(now) => {
                self.notifications.tick(now);
                self.dispatch_session(session::Message::Tick, now)
            }
            Message::WindowCloseRequested(id) => {
                let cleanup = self.close_player();
                Task::batch([cleanup, window::close(id)])
            }
        }
    }

    fn handle_albums(&mut self, message: albums::Message) -> Task<Message> {
        match message {
            albums::Message::OpenAlbum(album) => {
                let Some(library) = self.library.clone() else {
                    return Task::none();
                };
                self.current_album = Some(album.clone());
                self.album_videos = Listing::Loading;
                self.screen = Screen::AlbumVideos;

                let page_size = self.page_size;
                let album_id = album.id.clone();
                Task::perform(
                    async move {
                        tokio::task::spawn_blocking(move || {
                            load_album_videos(library.as_ref(), &album, page_size)
                        })
                        .await
                        .map_err(|e| LibraryError::Io(e.to_string()))?
                    },
                    move |result| Message::AlbumVideosLoaded {
                        album: album_id,
                        result,
                    },
                )
            }
            albums::Message::ImportVideo => open_import_dialog(),
            albums::Message::PlayImported(asset) => self.open_player(asset, Screen::Albums),
            albums::Message::Refresh => {
                self.albums = Listing::Loading;
                self.load_albums()
            }
        }
    }

    fn handle_album_videos(&mut self, message: album_videos::Message) -> Task<Message> {
        match message {
            album_videos::Message::Play(asset) => self.open_player(asset, Screen::AlbumVideos),
            album_videos::Message::Back => {
                self.screen = Screen::Albums;
                self.current_album = None;
                self.album_videos = Listing::Loading;
                Task::none()
            }
        }
    }

    /// Starts loading the album list in a blocking task.
    pub(super) fn load_albums(&mut self) -> Task<Message> {
        let Some(library) = self.library.clone() else {
            self.albums = Listing::Failed("no media library directory is available".into());
            return Task::none();
        };

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || load_video_albums(library.as_ref()))
                    .await
                    .map_err(|e| LibraryError::Io(e.to_string()))?
            },
            Message::AlbumsLoaded,
        )
    }

    fn alert_library_denied(&mut self) {
        if !self.library_denied_alerted {
            self.library_denied_alerted = true;
            self.notifications.push(Notification::error(
                "Access to the video library was denied.",
            ));
        }
    }

    fn handle_import_result(&mut self, path: Option<PathBuf>) -> Task<Message> {
        let Some(path) = path else {
            return Task::none();
        };

        match asset_for_path(&path) {
            Some(asset) => {
                if !self.imported.contains(&asset) {
                    self.imported.push(asset.clone());
                }
                self.open_player(asset, Screen::Albums)
            }
            None => {
                self.notifications.push(Notification::warning(format!(
                    "{} is not a supported video",
                    path.display()
                )));
                Task::none()
            }
        }
    }

    /// Opens `asset` in a new player session; closing it returns to `from`.
    pub(super) fn open_player(&mut self, asset: VideoAsset, from: Screen) -> Task<Message> {
        let cleanup = if self.session.is_some() {
            self.close_player()
        } else {
            Task::none()
        };

        // Held by the device until the new decoder attaches.
        if let Err(err) = self.device.set_volume(self.settings.initial_volume) {
            tracing::debug!("initial volume not applied: {err}");
        }
        self.next_session_id += 1;
        self.playing = Some((PathBuf::from(&asset.uri), self.next_session_id));
        self.session = Some(session::State::new(asset.to_video_ref(), self.settings));
        self.frame = None;
        self.playback_error = None;
        self.return_screen = from;
        self.screen = Screen::Player;

        let mounted = self.dispatch_session(session::Message::Mounted, Instant::now());
        Task::batch([cleanup, mounted])
    }

    /// Tears the session down and returns to the previous screen.
    fn close_player(&mut self) -> Task<Message> {
        let Some(mut session) = self.session.take() else {
            return Task::none();
        };

        session.handle(session::Message::Closed, &mut self.device, Instant::now());
        self.device.detach();
        self.playing = None;
        self.frame = None;
        self.playback_error = None;
        let _ = self.pan.cancel();
        self.screen = self.return_screen;

        let leave_fullscreen = update_fullscreen_mode(&mut self.fullscreen, self.window_id, false);
        // Releasing the lock never reshapes; drop it so the next session starts clean.
        let _ = self.device.take_reshape();
        leave_fullscreen
    }

    /// Forwards `message` to the open session and applies its effect.
    fn dispatch_session(&mut self, message: session::Message, now: Instant) -> Task<Message> {
        let Some(session) = self.session.as_mut() else {
            return Task::none();
        };

        let effect = session.handle(message, &mut self.device, now);
        let effect_task = match effect {
            session::Effect::None => Task::none(),
            session::Effect::Back => return self.close_player(),
            session::Effect::PermissionDenied(capability) => {
                self.notifications.push(Notification::error(format!(
                    "Permission to adjust the {capability} was denied."
                )));
                Task::none()
            }
            session::Effect::FullscreenChanged(fullscreen) => {
                update_fullscreen_mode(&mut self.fullscreen, self.window_id, fullscreen)
            }
        };

        Task::batch([effect_task, self.apply_reshape()])
    }

    /// Turns an orientation lock queued by the device into a window resize.
    fn apply_reshape(&mut self) -> Task<Message> {
        let Some(lock) = self.device.take_reshape() else {
            return Task::none();
        };
        if self.fullscreen {
            return Task::none();
        }
        match (self.window_id, oriented_size(lock, self.window_size)) {
            (Some(id), Some(size)) => {
                tracing::debug!(%lock, width = size.width, height = size.height, "reshaping window");
                self.window_size = size;
                window::resize(id, size)
            }
            _ => Task::none(),
        }
    }

    fn handle_playback(&mut self, message: PlaybackMessage) -> Task<Message> {
        let now = Instant::now();
        match message {
            PlaybackMessage::Started(sender) => {
                self.device.attach(sender, self.settings.autoplay);
                Task::none()
            }
            PlaybackMessage::FrameReady {
                rgba_data,
                width,
                height,
            } => {
                let pixels = Arc::unwrap_or_clone(rgba_data);
                self.frame = Some(image::Handle::from_rgba(width, height, pixels));
                Task::none()
            }
            PlaybackMessage::Status(status) => {
                self.dispatch_session(session::Message::Status(status), now)
            }
            PlaybackMessage::ReadyForDisplay(size) => {
                self.dispatch_session(session::Message::ReadyForDisplay(size), now)
            }
            PlaybackMessage::EndOfStream => {
                tracing::debug!("end of stream");
                self.dispatch_session(session::Message::Finished, now)
            }
            PlaybackMessage::Error(message) => {
                if self.session.is_some() {
                    self.notifications.push(Notification::error(format!(
                        "Playback failed: {message}"
                    )));
                    self.playback_error = Some(message);
                }
                Task::none()
            }
        }
    }

    fn handle_pointer(&mut self, pointer: Pointer) -> Task<Message> {
        let output = match pointer {
            Pointer::Moved(position) => {
                self.cursor_position = Some(position);
                self.pan.moved(position)
            }
            Pointer::Pressed => {
                if let Some(position) = self.cursor_position {
                    self.pan.pressed(position, self.window_size);
                }
                pan::Output::None
            }
            Pointer::Released => self.pan.released(),
            Pointer::Left => self.pan.cancel(),
        };

        let now = Instant::now();
        let tasks: Vec<_> = output
            .messages()
            .into_iter()
            .map(|message| self.dispatch_session(message, now))
            .collect();
        Task::batch(tasks)
    }

    /// Escape leaves fullscreen first, then the player.
    ///
    /// With stock controls the dismissal is reported as fullscreen updates,
    /// which end the session once the dismissal completes.
    fn handle_escape(&mut self) -> Task<Message> {
        let Some(session) = self.session.as_ref() else {
            return Task::none();
        };
        let now = Instant::now();

        if session.features().use_native_controls {
            let will = self.dispatch_session(
                session::Message::FullscreenUpdate(FullscreenUpdate::WillDismiss),
                now,
            );
            let did = self.dispatch_session(
                session::Message::FullscreenUpdate(FullscreenUpdate::DidDismiss),
                now,
            );
            Task::batch([will, did])
        } else if session.is_fullscreen() {
            self.dispatch_session(session::Message::ToggleFullscreen, now)
        } else {
            self.close_player()
        }
    }
}

fn update_fullscreen_mode(
    fullscreen: &mut bool,
    window_id: Option<window::Id>,
    desired: bool,
) -> Task<Message> {
    if *fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        return Task::none();
    };

    *fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(window_id, mode)
}

/// Opens the native file dialog filtered to video files.
fn open_import_dialog() -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter("Videos", VIDEO_EXTENSIONS);

            if let Some(dir) = dirs::video_dir() {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::ImportDialogResult,
    )
}
