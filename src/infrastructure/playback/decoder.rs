// SPDX-License-Identifier: MPL-2.0
//! Async video frame decoder using FFmpeg.
//!
//! Decoding runs on a blocking Tokio task. The UI talks to it through an
//! unbounded command channel and receives frames, status ticks and the
//! ready-for-display notification through a small bounded event channel.
//! The audio track, when the file has one and a sound device is available,
//! is decoded in the same loop and played through [`AudioOutput`].

use super::audio::{AudioOutput, AudioTrack};
use crate::domain::video::{NaturalSize, PlaybackStatus, Volume};
use crate::error::{Error, Result, VideoError};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Minimum spacing between two status events while playing.
pub const STATUS_INTERVAL: Duration = Duration::from_millis(250);

/// A decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
    /// Presentation timestamp in milliseconds.
    pub pts_ms: u64,
}

impl DecodedFrame {
    /// Returns the total size in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.rgba_data.len()
    }
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoderCommand {
    /// Start or resume playback from the current position.
    Play,
    Pause,
    /// Seek to a position. While paused, one frame is decoded to show it.
    Seek { target_ms: u64 },
    /// Output volume of the audio track.
    SetVolume(Volume),
    /// Stop decoding and release the file.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    FrameReady(DecodedFrame),
    /// Periodic position report.
    Status(PlaybackStatus),
    /// The first frame of this file was decoded.
    ReadyForDisplay(NaturalSize),
    /// Playback reached the end and looping is off.
    EndOfStream,
    Error(String),
}

/// Options fixed when the decoder is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Restart from the beginning at end of stream.
    pub loop_playback: bool,
}

/// Async video decoder that runs in a Tokio blocking task.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    /// Bounded to prevent memory accumulation during rapid seeks.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Creates a decoder for `video_path` and spawns its decoding task.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file does not exist. Failures to open or
    /// decode the file are reported later as [`DecoderEvent::Error`].
    pub fn new<P: AsRef<Path>>(video_path: P, options: DecoderOptions) -> Result<Self> {
        let path = video_path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Io(format!("Video file not found: {}", path.display())));
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        // FFmpeg contexts are not Send, so the whole loop lives on one thread.
        tokio::task::spawn_blocking(move || {
            if let Err(err) = decoder_loop_blocking(&path, command_rx, &event_tx, options) {
                tracing::error!(path = %path.display(), "decoder stopped: {err}");
                let _ = event_tx.blocking_send(DecoderEvent::Error(err.to_string()));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command to the decoder task.
    ///
    /// # Errors
    ///
    /// Fails once the decoder task has exited.
    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Io("Decoder task is not running".into()))
    }

    /// Returns a handle the UI can keep to send commands.
    #[must_use]
    pub fn command_sender(&self) -> mpsc::UnboundedSender<DecoderCommand> {
        self.command_tx.clone()
    }

    /// Receives the next event, or `None` once the decoder task has ended.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }
}

/// Initializes FFmpeg once, with its log level lowered to errors.
pub fn init_ffmpeg() -> Result<()> {
    static FFMPEG_INIT: std::sync::OnceLock<std::result::Result<(), String>> =
        std::sync::OnceLock::new();

    FFMPEG_INIT
        .get_or_init(|| {
            ffmpeg_next::init().map_err(|e| format!("FFmpeg initialization failed: {e}"))?;
            // SAFETY: av_log_set_level only updates a global log threshold.
            unsafe {
                ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
            }
            Ok(())
        })
        .clone()
        .map_err(Error::Io)
}

/// Converts a container duration (`AV_TIME_BASE` microseconds) to milliseconds.
#[must_use]
pub fn container_duration_ms(duration_us: i64) -> u64 {
    u64::try_from(duration_us).map_or(0, |us| us / 1_000)
}

/// Seek timestamp in `AV_TIME_BASE` units for a position in milliseconds.
#[must_use]
pub fn seek_timestamp(position_ms: u64) -> i64 {
    i64::try_from(position_ms.saturating_mul(1_000)).unwrap_or(i64::MAX)
}

/// Presentation timestamp of a frame in milliseconds.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn pts_to_ms(pts: i64, time_base: f64) -> u64 {
    let ms = pts as f64 * time_base * 1_000.0;
    if ms.is_finite() && ms > 0.0 {
        ms.round() as u64
    } else {
        0
    }
}

/// Audio track paired with the device playing it.
struct Sound {
    output: AudioOutput,
    track: AudioTrack,
}

impl Sound {
    /// Opens the audio of `input`. Files without audio, or hosts without a
    /// sound device, play silently.
    fn open(input: &ffmpeg_next::format::context::Input) -> Option<Self> {
        input.streams().best(ffmpeg_next::media::Type::Audio)?;
        let output = match AudioOutput::new(Volume::default()) {
            Ok(output) => output,
            Err(err) => {
                tracing::warn!("playing without sound: {err}");
                return None;
            }
        };
        match AudioTrack::open(input, output.format()) {
            Ok(Some(track)) => Some(Self { output, track }),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!("playing without sound: {err}");
                None
            }
        }
    }

    /// Drops decoded and queued audio after the read position moved.
    fn restart(&mut self) {
        self.track.flush();
        self.output.clear();
    }
}

struct Pacing {
    started_at: Instant,
    first_pts_ms: Option<u64>,
}

impl Pacing {
    fn start() -> Self {
        Self {
            started_at: Instant::now(),
            first_pts_ms: None,
        }
    }

    /// Sleeps until the frame with `pts_ms` is due.
    fn wait_for(&mut self, pts_ms: u64) {
        let first = *self.first_pts_ms.get_or_insert(pts_ms);
        let due = self.started_at + Duration::from_millis(pts_ms.saturating_sub(first));
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
    }
}

#[allow(clippy::too_many_lines)]
fn decoder_loop_blocking(
    video_path: &Path,
    mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
    event_tx: &mpsc::Sender<DecoderEvent>,
    options: DecoderOptions,
) -> Result<()> {
    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(video_path)
        .map_err(|e| VideoError::Open(e.to_string()))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(VideoError::NoVideoStream)?;
    let video_stream_index = input.index();
    let time_base = input.time_base();
    let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| VideoError::UnsupportedCodec(e.to_string()))?;
    let mut decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| VideoError::UnsupportedCodec(e.to_string()))?;

    let width = decoder.width();
    let height = decoder.height();
    let duration_ms = container_duration_ms(ictx.duration());

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| VideoError::UnsupportedCodec(e.to_string()))?;

    let mut sound = Sound::open(&ictx);

    tracing::debug!(
        path = %video_path.display(),
        width,
        height,
        duration_ms,
        has_sound = sound.is_some(),
        "decoder opened"
    );

    let mut is_playing = false;
    let mut pacing: Option<Pacing> = None;
    let mut position_ms: u64 = 0;
    let mut decode_single_frame = false;
    let mut announced_ready = false;
    let mut last_status: Option<Instant> = None;

    let send_status = |position_ms: u64| {
        let _ = event_tx.blocking_send(DecoderEvent::Status(PlaybackStatus::loaded(
            position_ms,
            duration_ms,
        )));
    };

    loop {
        match command_rx.try_recv() {
            Ok(DecoderCommand::Play) => {
                if !is_playing && position_ms > 0 {
                    let timestamp = seek_timestamp(position_ms);
                    match ictx.seek(timestamp, ..timestamp) {
                        Ok(()) => {
                            decoder.flush();
                            if let Some(sound) = sound.as_mut() {
                                sound.restart();
                            }
                        }
                        Err(e) => {
                            let _ = event_tx
                                .blocking_send(DecoderEvent::Error(format!("Resume seek failed: {e}")));
                        }
                    }
                }
                is_playing = true;
                pacing = Some(Pacing::start());
                if let Some(sound) = sound.as_ref() {
                    sound.output.resume();
                }
            }
            Ok(DecoderCommand::Pause) => {
                is_playing = false;
                pacing = None;
                if let Some(sound) = sound.as_ref() {
                    sound.output.pause();
                }
            }
            Ok(DecoderCommand::SetVolume(volume)) => {
                if let Some(sound) = sound.as_ref() {
                    sound.output.set_volume(volume);
                }
            }
            Ok(DecoderCommand::Seek { target_ms }) => {
                let target_ms = if duration_ms > 0 {
                    target_ms.min(duration_ms)
                } else {
                    target_ms
                };
                let timestamp = seek_timestamp(target_ms);
                match ictx.seek(timestamp, ..timestamp) {
                    Ok(()) => {
                        decoder.flush();
                        if let Some(sound) = sound.as_mut() {
                            sound.restart();
                        }
                        position_ms = target_ms;
                        if is_playing {
                            pacing = Some(Pacing::start());
                        } else {
                            decode_single_frame = true;
                        }
                        send_status(position_ms);
                    }
                    Err(e) => {
                        let _ = event_tx.blocking_send(DecoderEvent::Error(format!("Seek failed: {e}")));
                    }
                }
            }
            Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => break,
            Err(mpsc::error::TryRecvError::Empty) => {}
        }

        if !is_playing && !decode_single_frame {
            std::thread::sleep(Duration::from_millis(10));
            continue;
        }

        let mut frame_decoded = false;
        for (stream, packet) in ictx.packets() {
            if let Some(sound) = sound.as_mut() {
                if stream.index() == sound.track.stream_index() {
                    if is_playing {
                        let samples = sound.track.decode(&packet);
                        sound.output.queue(&samples);
                    }
                    continue;
                }
            }
            if stream.index() != video_stream_index {
                continue;
            }
            if let Err(e) = decoder.send_packet(&packet) {
                tracing::debug!("packet rejected: {e}");
                continue;
            }

            let mut decoded_frame = ffmpeg_next::frame::Video::empty();
            if decoder.receive_frame(&mut decoded_frame).is_err() {
                continue;
            }

            let mut rgba_frame = ffmpeg_next::frame::Video::empty();
            if let Err(e) = scaler.run(&decoded_frame, &mut rgba_frame) {
                let _ = event_tx.blocking_send(DecoderEvent::Error(
                    VideoError::DecodingFailed(e.to_string()).to_string(),
                ));
                continue;
            }

            let pts_ms = decoded_frame
                .timestamp()
                .map_or(0, |pts| pts_to_ms(pts, time_base_f64));
            if let Some(pacing) = pacing.as_mut() {
                pacing.wait_for(pts_ms);
            }
            position_ms = pts_ms;

            let frame = DecodedFrame {
                rgba_data: Arc::new(extract_rgba_data(&rgba_frame)),
                width,
                height,
                pts_ms,
            };
            if event_tx.blocking_send(DecoderEvent::FrameReady(frame)).is_err() {
                return Ok(());
            }

            if !announced_ready {
                announced_ready = true;
                let _ = event_tx
                    .blocking_send(DecoderEvent::ReadyForDisplay(NaturalSize::new(width, height)));
            }
            if last_status.is_none_or(|at| at.elapsed() >= STATUS_INTERVAL) {
                last_status = Some(Instant::now());
                send_status(position_ms);
            }

            frame_decoded = true;
            decode_single_frame = false;
            break;
        }

        if !frame_decoded {
            decode_single_frame = false;
            if options.loop_playback && is_playing {
                match ictx.seek(0, ..0_i64) {
                    Ok(()) => {
                        decoder.flush();
                        if let Some(sound) = sound.as_mut() {
                            sound.restart();
                        }
                        position_ms = 0;
                        pacing = Some(Pacing::start());
                        send_status(0);
                        continue;
                    }
                    Err(e) => tracing::warn!("loop restart failed: {e}"),
                }
            }
            is_playing = false;
            pacing = None;
            if let Some(sound) = sound.as_ref() {
                sound.output.pause();
            }
            send_status(duration_ms);
            let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
        }
    }

    tracing::debug!(path = %video_path.display(), "decoder closed");
    Ok(())
}

/// Extracts RGBA data from a decoded frame, handling stride correctly.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let row_start = y * stride;
        let row_end = row_start + width * 4;
        rgba_bytes.extend_from_slice(&data[row_start..row_end]);
    }
    rgba_bytes
}
