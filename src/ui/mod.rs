// SPDX-License-Identifier: MPL-2.0
//! User interface: library screens, the player screen and shared styling.

pub mod album_videos;
pub mod albums;
pub mod design_tokens;
pub mod listing;
pub mod notifications;
pub mod player;
pub mod styles;
