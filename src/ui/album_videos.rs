// SPDX-License-Identifier: MPL-2.0
//! Videos of one album.

use crate::domain::library::{Album, VideoAsset};
use crate::ui::albums::{caption, empty_state, video_row};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::listing::Listing;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Play(VideoAsset),
    Back,
}

pub struct ViewContext<'a> {
    pub album: &'a Album,
    pub videos: &'a Listing<VideoAsset>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                button(Text::new("← Albums"))
                    .padding([spacing::XS, spacing::MD])
                    .on_press(Message::Back),
            )
            .push(Text::new(ctx.album.title.as_str()).size(typography::TITLE_LG)),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::header);

    let list = match ctx.videos {
        Listing::Loading => Column::new().push(caption("Loading videos…")),
        Listing::Failed(reason) => Column::new().push(empty_state(format!(
            "This album could not be read: {reason}"
        ))),
        Listing::Loaded(videos) if videos.is_empty() => {
            Column::new().push(empty_state("This album has no videos.".into()))
        }
        Listing::Loaded(videos) => videos.iter().fold(Column::new(), |column, asset| {
            column.push(video_row(asset, Message::Play(asset.clone())))
        }),
    };

    Column::new()
        .push(header)
        .push(
            Scrollable::new(list.spacing(spacing::XS).padding(spacing::MD))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}
