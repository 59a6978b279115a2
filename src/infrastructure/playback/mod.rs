// SPDX-License-Identifier: MPL-2.0
//! FFmpeg playback backend.

pub mod audio;
pub mod decoder;
pub mod subscription;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent, DecoderOptions};
pub use subscription::{video_playback, DecoderCommandSender, PlaybackMessage};
