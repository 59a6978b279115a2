// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with toasts stacked on top.

use super::{Message, Screen};
use crate::domain::library::{Album, VideoAlbum, VideoAsset};
use crate::player::session;
use crate::ui::listing::Listing;
use crate::ui::notifications::{self, Toast};
use crate::ui::{album_videos, albums, player};
use iced::widget::{image, Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub albums: &'a Listing<VideoAlbum>,
    pub current_album: Option<&'a Album>,
    pub album_videos: &'a Listing<VideoAsset>,
    pub imported: &'a [VideoAsset],
    pub session: Option<&'a session::State>,
    pub frame: Option<&'a image::Handle>,
    pub dim_alpha: f32,
    pub playback_error: Option<&'a str>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Albums => albums::view(albums::ViewContext {
            albums: ctx.albums,
            imported: ctx.imported,
        })
        .map(Message::Albums),
        Screen::AlbumVideos => match ctx.current_album {
            Some(album) => album_videos::view(album_videos::ViewContext {
                album,
                videos: ctx.album_videos,
            })
            .map(Message::AlbumVideos),
            None => fallback("No album selected"),
        },
        Screen::Player => match ctx.session {
            Some(session) => player::view(player::ViewContext {
                session,
                frame: ctx.frame,
                dim_alpha: ctx.dim_alpha,
                error: ctx.playback_error,
            })
            .map(Message::Player),
            None => fallback("No video open"),
        },
    };

    let content = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.has_notifications() {
        Stack::new()
            .push(content)
            .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
            .into()
    } else {
        content.into()
    }
}

fn fallback<'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(Text::new(label))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
