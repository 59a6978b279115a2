// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for video playback events.
//!
//! Connects the async decoder to the UI event loop: the UI first receives a
//! [`DecoderCommandSender`], then frames, status ticks and the
//! ready-for-display notification as [`PlaybackMessage`]s.

use super::decoder::{AsyncDecoder, DecoderCommand, DecoderEvent, DecoderOptions};
use crate::domain::error::DeviceError;
use crate::domain::video::{NaturalSize, PlaybackStatus};
use iced::futures::SinkExt;
use iced::stream;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Subscription ID for video playback.
/// Each playback session gets a unique ID so the subscription is recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoPlaybackId(u64);

/// Cloneable handle for sending commands to the decoder.
#[derive(Clone)]
pub struct DecoderCommandSender {
    tx: mpsc::UnboundedSender<DecoderCommand>,
}

impl DecoderCommandSender {
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<DecoderCommand>) -> Self {
        Self { tx }
    }

    /// Sends a command to the decoder.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::Backend`] once the decoder has stopped.
    pub fn send(&self, command: DecoderCommand) -> Result<(), DeviceError> {
        self.tx
            .send(command)
            .map_err(|_| DeviceError::Backend("video decoder not running".into()))
    }
}

impl std::fmt::Debug for DecoderCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderCommandSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// Messages emitted by the video playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Decoder started; commands can be sent from now on.
    Started(DecoderCommandSender),
    FrameReady {
        rgba_data: Arc<Vec<u8>>,
        width: u32,
        height: u32,
    },
    Status(PlaybackStatus),
    ReadyForDisplay(NaturalSize),
    EndOfStream,
    Error(String),
}

impl From<DecoderEvent> for PlaybackMessage {
    fn from(event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::FrameReady(frame) => PlaybackMessage::FrameReady {
                rgba_data: frame.rgba_data,
                width: frame.width,
                height: frame.height,
            },
            DecoderEvent::Status(status) => PlaybackMessage::Status(status),
            DecoderEvent::ReadyForDisplay(size) => PlaybackMessage::ReadyForDisplay(size),
            DecoderEvent::EndOfStream => PlaybackMessage::EndOfStream,
            DecoderEvent::Error(msg) => PlaybackMessage::Error(msg),
        }
    }
}

/// Creates a video playback subscription for `video_path`.
///
/// `session_id` makes each playback session a distinct subscription, so
/// opening the same file twice restarts decoding.
pub fn video_playback(
    video_path: PathBuf,
    session_id: u64,
    options: DecoderOptions,
) -> iced::Subscription<PlaybackMessage> {
    iced::Subscription::run_with_id(
        VideoPlaybackId(session_id),
        stream::channel(100, move |mut output| async move {
            match AsyncDecoder::new(&video_path, options) {
                Ok(mut decoder) => {
                    let sender = DecoderCommandSender::new(decoder.command_sender());
                    let _ = output.send(PlaybackMessage::Started(sender)).await;

                    while let Some(event) = decoder.recv_event().await {
                        if output.send(event.into()).await.is_err() {
                            break;
                        }
                    }
                    tracing::debug!(session_id, "playback subscription finished");
                }
                Err(err) => {
                    tracing::warn!(path = %video_path.display(), "cannot start playback: {err}");
                    let _ = output.send(PlaybackMessage::Error(err.to_string())).await;
                }
            }

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::playback::decoder::DecodedFrame;

    #[test]
    fn subscription_id_is_consistent() {
        assert_eq!(VideoPlaybackId(42), VideoPlaybackId(42));
        assert_ne!(VideoPlaybackId(42), VideoPlaybackId(43));
    }

    #[test]
    fn decoder_events_map_to_messages() {
        let frame = DecodedFrame {
            rgba_data: Arc::new(vec![0; 16]),
            width: 2,
            height: 2,
            pts_ms: 40,
        };
        assert!(matches!(
            PlaybackMessage::from(DecoderEvent::FrameReady(frame)),
            PlaybackMessage::FrameReady { width: 2, height: 2, .. }
        ));
        assert!(matches!(
            PlaybackMessage::from(DecoderEvent::ReadyForDisplay(NaturalSize::new(4, 3))),
            PlaybackMessage::ReadyForDisplay(size) if size.is_landscape()
        ));
    }

    #[test]
    fn closed_sender_reports_backend_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        let sender = DecoderCommandSender::new(tx);
        assert!(sender.send(DecoderCommand::Play).is_ok());
        drop(rx);
        assert!(matches!(
            sender.send(DecoderCommand::Pause),
            Err(DeviceError::Backend(_))
        ));
    }
}
