// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for drag gesture interpretation.
//!
//! Measures the performance of:
//! - Axis classification and target mapping for a single sample
//! - A full drag lifecycle through the gesture interpreter
//! - A full drag lifecycle through the player session

use criterion::{criterion_group, criterion_main, Criterion};
use iced_reel::application::port::DeviceGateway;
use iced_reel::domain::device::{Brightness, OrientationLock};
use iced_reel::domain::error::DeviceError;
use iced_reel::domain::library::VideoRef;
use iced_reel::domain::video::{PlaybackStatus, Volume};
use iced_reel::player::gesture::{
    self, classify, level_target, seek_target, AxisSelection, DragSample, GestureOrigin, Viewport,
};
use iced_reel::player::session::{self, SessionSettings};
use std::hint::black_box;
use std::time::Instant;

const VIEWPORT: Viewport = Viewport {
    width: 400.0,
    height: 800.0,
};

/// Device that accepts every command and does nothing.
struct NullDevice;

impl DeviceGateway for NullDevice {
    fn brightness(&mut self) -> Result<Brightness, DeviceError> {
        Ok(Brightness::default())
    }

    fn set_brightness(&mut self, _level: Brightness) -> Result<(), DeviceError> {
        Ok(())
    }

    fn lock_orientation(&mut self, _lock: OrientationLock) -> Result<(), DeviceError> {
        Ok(())
    }

    fn play(&mut self) -> Result<(), DeviceError> {
        Ok(())
    }

    fn pause(&mut self) -> Result<(), DeviceError> {
        Ok(())
    }

    fn seek_to(&mut self, _position_ms: u64) -> Result<(), DeviceError> {
        Ok(())
    }

    fn set_volume(&mut self, _volume: Volume) -> Result<(), DeviceError> {
        Ok(())
    }
}

/// A 60-sample drag sweeping right and slightly down.
#[allow(clippy::cast_precision_loss)]
fn drag_path() -> Vec<DragSample> {
    (1..=60)
        .map(|i| DragSample {
            translation_x: i as f32 * 3.0,
            translation_y: i as f32 * 0.5,
            absolute_x: 100.0 + i as f32 * 3.0,
        })
        .collect()
}

/// Benchmark the pure mapping functions on a single sample.
fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_mapping");

    let sample = DragSample {
        translation_x: 12.0,
        translation_y: -80.0,
        absolute_x: 300.0,
    };

    group.bench_function("classify", |b| {
        b.iter(|| classify(black_box(&sample), black_box(VIEWPORT)));
    });

    group.bench_function("seek_target", |b| {
        b.iter(|| seek_target(black_box(30_000), black_box(120_000), black_box(150.0), 400.0));
    });

    group.bench_function("level_target", |b| {
        b.iter(|| level_target(black_box(0.5), black_box(-80.0), 800.0));
    });

    group.finish();
}

/// Benchmark a full drag through the gesture interpreter.
fn bench_interpreter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_mapping");
    let path = drag_path();
    let origin = GestureOrigin {
        position_ms: 30_000,
        duration_ms: 120_000,
        brightness: Brightness::new(0.5),
        volume: Volume::new(0.8),
    };

    for selection in [AxisSelection::Frozen, AxisSelection::Continuous] {
        group.bench_function(format!("interpreter_{selection:?}"), |b| {
            b.iter(|| {
                let mut state = gesture::State::new(selection);
                state.handle(gesture::Message::Began {
                    viewport: VIEWPORT,
                    origin,
                });
                for sample in &path {
                    black_box(state.handle(gesture::Message::Moved(*sample)));
                }
                black_box(state.handle(gesture::Message::Ended))
            });
        });
    }

    group.finish();
}

/// Benchmark a full drag routed through the player session.
fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_mapping");
    let path = drag_path();
    let now = Instant::now();
    let video = VideoRef {
        video_id: "bench".into(),
        video_url: "/videos/bench.mp4".into(),
        video_title: "bench.mp4".into(),
    };

    group.bench_function("session_drag", |b| {
        b.iter(|| {
            let mut device = NullDevice;
            let mut state = session::State::new(video.clone(), SessionSettings::default());
            state.handle(
                session::Message::Status(PlaybackStatus::loaded(30_000, 120_000)),
                &mut device,
                now,
            );
            state.handle(session::Message::GestureBegan(VIEWPORT), &mut device, now);
            for sample in &path {
                state.handle(session::Message::GestureMoved(*sample), &mut device, now);
                black_box(state.overlay_text());
            }
            black_box(state.handle(session::Message::GestureEnded, &mut device, now))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_mapping, bench_interpreter, bench_session);
criterion_main!(benches);
