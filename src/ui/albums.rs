// SPDX-License-Identifier: MPL-2.0
//! Album list screen.
//!
//! Lists the albums holding at least one video with their video count,
//! followed by the videos imported through the file picker.

use crate::domain::library::{Album, VideoAlbum, VideoAsset};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::listing::Listing;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    OpenAlbum(Album),
    /// Open the native file picker.
    ImportVideo,
    PlayImported(VideoAsset),
    Refresh,
}

pub struct ViewContext<'a> {
    pub albums: &'a Listing<VideoAlbum>,
    pub imported: &'a [VideoAsset],
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new("Videos")
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("Refresh"))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::Refresh),
        )
        .push(
            button(Text::new("Import video…"))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::ImportVideo),
        );

    let mut content = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(Container::new(header).padding([spacing::XS, 0.0]));

    content = match ctx.albums {
        Listing::Loading => content.push(caption("Loading albums…")),
        Listing::Failed(reason) => content.push(empty_state(format!(
            "The video library could not be read: {reason}"
        ))),
        Listing::Loaded(albums) if albums.is_empty() && ctx.imported.is_empty() => {
            content.push(empty_state("No videos found. Import one to get started.".into()))
        }
        Listing::Loaded(albums) => albums
            .iter()
            .fold(content, |column, entry| column.push(album_row(entry))),
    };

    if !ctx.imported.is_empty() {
        content = content.push(
            Container::new(Text::new("Imported").size(typography::TITLE_MD))
                .padding([spacing::SM, 0.0]),
        );
        content = ctx.imported.iter().fold(content, |column, asset| {
            column.push(video_row(asset, Message::PlayImported(asset.clone())))
        });
    }

    Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn album_row(entry: &VideoAlbum) -> Element<'_, Message> {
    let count = if entry.video_count == 1 {
        "1 video".to_string()
    } else {
        format!("{} videos", entry.video_count)
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(entry.album.title.as_str())
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            Text::new(count)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    list_button(row.into(), Message::OpenAlbum(entry.album.clone()))
}

/// One video of a list; shared with the album screen.
pub(crate) fn video_row<'a, M: Clone + 'a>(asset: &'a VideoAsset, on_press: M) -> Element<'a, M> {
    let label = Text::new(asset.filename.as_str()).size(typography::BODY);
    list_button(label.into(), on_press)
}

fn list_button<'a, M: Clone + 'a>(content: Element<'a, M>, on_press: M) -> Element<'a, M> {
    button(
        Container::new(content)
            .height(Length::Fixed(sizing::LIST_ROW_HEIGHT))
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding([0.0, spacing::MD])
    .style(styles::button::list_row)
    .on_press(on_press)
    .into()
}

pub(crate) fn caption<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    Text::new(label)
        .size(typography::CAPTION)
        .color(palette::GRAY_400)
        .into()
}

pub(crate) fn empty_state<'a, M: 'a>(message: String) -> Element<'a, M> {
    Container::new(
        Text::new(message)
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(alignment::Horizontal::Center)
    .style(styles::container::empty_state)
    .into()
}
