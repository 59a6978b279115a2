// SPDX-License-Identifier: MPL-2.0
//! Audio track of the open video.
//!
//! [`AudioTrack`] decodes the file's best audio stream with FFmpeg and
//! resamples it to the output device format. [`AudioOutput`] plays the
//! samples through the default cpal device with live volume and pause.
//!
//! Both live on the decoder thread: samples are queued as the demuxer
//! reaches them, so they stay paced by the video frames around them.

use crate::domain::video::Volume;
use crate::error::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Seconds of audio the output buffer holds before new samples are dropped.
const BUFFER_SECONDS: usize = 2;

/// Sample layout expected by the output device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

impl OutputFormat {
    /// Interleaved samples the output buffer may hold.
    #[must_use]
    pub fn buffer_capacity(self) -> usize {
        self.sample_rate as usize * usize::from(self.channels) * BUFFER_SECONDS
    }
}

/// Gain applied to a sample for a volume level.
///
/// The curve is quadratic so that the volume gesture feels linear: half
/// volume plays at a quarter of the amplitude.
#[must_use]
pub fn perceptual_gain(volume: Volume) -> f32 {
    volume.value() * volume.value()
}

/// Appends as many of `samples` as fit under `capacity`. Returns the count kept.
pub fn push_bounded(buffer: &mut VecDeque<f32>, samples: &[f32], capacity: usize) -> usize {
    let room = capacity.saturating_sub(buffer.len());
    let kept = samples.len().min(room);
    buffer.extend(&samples[..kept]);
    kept
}

/// Fills a device buffer from the queue, or with silence when `gain` is `None`.
pub fn render<T: cpal::SizedSample + cpal::FromSample<f32>>(
    out: &mut [T],
    queue: &mut VecDeque<f32>,
    gain: Option<f32>,
) {
    let Some(gain) = gain else {
        out.fill(T::from_sample(0.0f32));
        return;
    };
    for slot in out.iter_mut() {
        // Just under 1.0: i16 conversion overflows at exactly 1.0.
        let value = queue
            .pop_front()
            .map_or(0.0, |sample| (sample * gain).clamp(-1.0, 0.999_999_9));
        *slot = T::from_sample(value);
    }
}

/// State shared with the device callback.
#[derive(Debug)]
struct SharedState {
    volume_bits: AtomicU32,
    paused: AtomicBool,
    queue: Mutex<VecDeque<f32>>,
}

impl SharedState {
    fn new(volume: Volume) -> Self {
        Self {
            volume_bits: AtomicU32::new(volume.value().to_bits()),
            paused: AtomicBool::new(true),
            queue: Mutex::new(VecDeque::new()),
        }
    }

    fn volume(&self) -> Volume {
        Volume::new(f32::from_bits(self.volume_bits.load(Ordering::Relaxed)))
    }

    fn set_volume(&self, volume: Volume) {
        self.volume_bits.store(volume.value().to_bits(), Ordering::Relaxed);
    }

    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    /// Gain for the next callback, `None` while paused.
    fn gain(&self) -> Option<f32> {
        (!self.is_paused()).then(|| perceptual_gain(self.volume()))
    }
}

/// Playback through the system's default output device.
///
/// Starts paused; [`AudioOutput::resume`] follows the decoder's play state.
pub struct AudioOutput {
    shared: Arc<SharedState>,
    format: OutputFormat,
    _stream: cpal::Stream,
}

impl AudioOutput {
    /// Opens the default output device at `volume`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no output device or its stream cannot
    /// be built or started.
    pub fn new(volume: Volume) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Io("No audio output device found".to_string()))?;
        let supported = device
            .default_output_config()
            .map_err(|e| Error::Io(format!("Failed to get audio config: {e}")))?;

        let format = OutputFormat {
            sample_rate: supported.sample_rate(),
            channels: supported.channels(),
        };
        let shared = Arc::new(SharedState::new(volume));

        let stream = match supported.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &supported.into(), Arc::clone(&shared))?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &supported.into(), Arc::clone(&shared))?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &supported.into(), Arc::clone(&shared))?
            }
            other => return Err(Error::Io(format!("Unsupported audio sample format: {other:?}"))),
        };
        stream
            .play()
            .map_err(|e| Error::Io(format!("Failed to start audio stream: {e}")))?;

        tracing::debug!(
            sample_rate = format.sample_rate,
            channels = format.channels,
            "audio output opened"
        );
        Ok(Self {
            shared,
            format,
            _stream: stream,
        })
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        shared: Arc<SharedState>,
    ) -> Result<cpal::Stream> {
        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let gain = shared.gain();
                    match shared.queue.lock() {
                        Ok(mut queue) => render(data, &mut queue, gain),
                        Err(_) => render(data, &mut VecDeque::new(), None),
                    }
                },
                |err| tracing::warn!("audio output error: {err}"),
                None,
            )
            .map_err(|e| Error::Io(format!("Failed to build audio stream: {e}")))
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Queues interleaved samples in the output format.
    pub fn queue(&self, samples: &[f32]) {
        if let Ok(mut queue) = self.shared.queue.lock() {
            let kept = push_bounded(&mut queue, samples, self.format.buffer_capacity());
            if kept < samples.len() {
                tracing::trace!(dropped = samples.len() - kept, "audio buffer full");
            }
        }
    }

    /// Drops everything queued, e.g. after a seek.
    pub fn clear(&self) {
        if let Ok(mut queue) = self.shared.queue.lock() {
            queue.clear();
        }
    }

    pub fn pause(&self) {
        self.shared.set_paused(true);
    }

    pub fn resume(&self) {
        self.shared.set_paused(false);
    }

    pub fn set_volume(&self, volume: Volume) {
        self.shared.set_volume(volume);
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.shared.volume()
    }
}

/// Decoder and resampler for the best audio stream of an open file.
pub struct AudioTrack {
    stream_index: usize,
    decoder: ffmpeg_next::decoder::Audio,
    resampler: ffmpeg_next::software::resampling::Context,
    channels: u16,
}

impl AudioTrack {
    /// Opens the best audio stream of `input`, resampling to `format`.
    ///
    /// Returns `Ok(None)` when the file has no audio.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream's codec or resampler cannot be set up.
    pub fn open(
        input: &ffmpeg_next::format::context::Input,
        format: OutputFormat,
    ) -> Result<Option<Self>> {
        let Some(stream) = input.streams().best(ffmpeg_next::media::Type::Audio) else {
            return Ok(None);
        };
        let stream_index = stream.index();

        let decoder = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
            .and_then(|context| context.decoder().audio())
            .map_err(|e| Error::Io(format!("Failed to create audio decoder: {e}")))?;

        // The device only plays its own layout; anything else is mixed down.
        let layout = match format.channels {
            1 => ffmpeg_next::ChannelLayout::MONO,
            _ => ffmpeg_next::ChannelLayout::STEREO,
        };
        let channels = if format.channels == 1 { 1 } else { 2 };
        let resampler = ffmpeg_next::software::resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
            layout,
            format.sample_rate,
        )
        .map_err(|e| Error::Io(format!("Failed to create resampler: {e}")))?;

        tracing::debug!(
            stream_index,
            source_rate = decoder.rate(),
            target_rate = format.sample_rate,
            "audio track opened"
        );
        Ok(Some(Self {
            stream_index,
            decoder,
            resampler,
            channels,
        }))
    }

    #[must_use]
    pub fn stream_index(&self) -> usize {
        self.stream_index
    }

    /// Interleaved channel count of the decoded samples.
    #[must_use]
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Decodes one packet into interleaved samples.
    ///
    /// Packets the codec rejects yield no samples.
    pub fn decode(&mut self, packet: &ffmpeg_next::Packet) -> Vec<f32> {
        if let Err(e) = self.decoder.send_packet(packet) {
            tracing::debug!("audio packet rejected: {e}");
            return Vec::new();
        }

        let mut samples = Vec::new();
        let mut decoded = ffmpeg_next::frame::Audio::empty();
        while self.decoder.receive_frame(&mut decoded).is_ok() {
            let mut resampled = ffmpeg_next::frame::Audio::empty();
            match self.resampler.run(&decoded, &mut resampled) {
                Ok(_) => {
                    let count = resampled.samples() * usize::from(self.channels);
                    samples.extend(f32_samples(resampled.data(0), count));
                }
                Err(e) => tracing::debug!("audio resampling failed: {e}"),
            }
        }
        samples
    }

    /// Discards decoder state after a seek.
    pub fn flush(&mut self) {
        self.decoder.flush();
    }
}

/// Reads up to `count` little-endian `f32` samples from packed bytes.
#[must_use]
pub fn f32_samples(bytes: &[u8], count: usize) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .take(count)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
