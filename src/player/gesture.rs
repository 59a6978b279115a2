// SPDX-License-Identifier: MPL-2.0
//! Drag gesture interpreter.
//!
//! A drag lifecycle (begin, samples, end) adjusts exactly one of three
//! quantities: a horizontal drag seeks, a vertical drag on the left half
//! sets brightness, a vertical drag on the right half sets volume.
//!
//! Targets are always computed from the values captured when the gesture
//! began, so repeated samples never compound. Brightness and volume are
//! emitted on every sample; a seek is only previewed until the gesture ends.

use crate::domain::device::Brightness;
use crate::domain::video::Volume;
use serde::{Deserialize, Serialize};

/// How the adjusted quantity is chosen during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisSelection {
    /// Decide on the first sample and keep that axis until the gesture ends.
    #[default]
    Frozen,
    /// Re-evaluate the axis on every sample.
    Continuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Undetermined,
    Seek,
    Brightness,
    Volume,
}

/// Size of the gesture surface, captured when the drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One pointer sample, relative to where the drag started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub translation_x: f32,
    pub translation_y: f32,
    /// Pointer x inside the viewport.
    pub absolute_x: f32,
}

/// Values the gesture adjusts, as they were when the drag started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureOrigin {
    pub position_ms: u64,
    pub duration_ms: u64,
    pub brightness: Brightness,
    pub volume: Volume,
}

/// The axis being adjusted and how far the pointer moved along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub axis: Axis,
    /// Value of the adjusted quantity at gesture start (milliseconds for
    /// seeks, level for brightness and volume).
    pub start_value: f64,
    /// Translation along the axis, in logical pixels.
    pub current_delta: f32,
}

/// Picks the axis for a sample.
#[must_use]
pub fn classify(sample: &DragSample, viewport: Viewport) -> Axis {
    if sample.translation_x.abs() > sample.translation_y.abs() {
        Axis::Seek
    } else if sample.absolute_x < viewport.width / 2.0 {
        Axis::Brightness
    } else {
        Axis::Volume
    }
}

/// Seek target for a horizontal drag, clamped into `[0, duration]`.
///
/// Dragging across the full viewport width spans the whole duration.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn seek_target(start_ms: u64, duration_ms: u64, translation_x: f32, width: f32) -> u64 {
    if width <= 0.0 || !translation_x.is_finite() {
        return start_ms.min(duration_ms);
    }
    let fraction = f64::from(translation_x) / f64::from(width);
    let target = start_ms as f64 + fraction * duration_ms as f64;
    target.clamp(0.0, duration_ms as f64).round() as u64
}

/// Level target for a vertical drag, clamped into `[0, 1]`.
///
/// Dragging up (negative translation) raises the level; the full viewport
/// height spans the whole range.
#[must_use]
pub fn level_target(start: f32, translation_y: f32, height: f32) -> f32 {
    if height <= 0.0 || !translation_y.is_finite() {
        return start.clamp(0.0, 1.0);
    }
    (start - translation_y / height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy)]
struct Lifecycle {
    viewport: Viewport,
    origin: GestureOrigin,
    sample: GestureSample,
    /// Last previewed seek target, committed when the gesture ends.
    pending_seek: Option<u64>,
}

/// Gesture interpreter state.
#[derive(Debug, Clone, Default)]
pub struct State {
    selection: AxisSelection,
    active: Option<Lifecycle>,
}

/// Messages for the gesture interpreter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// A drag started on a surface of the given size.
    Began {
        viewport: Viewport,
        origin: GestureOrigin,
    },
    /// The pointer moved during the drag.
    Moved(DragSample),
    /// The drag finished normally.
    Ended,
    /// The drag was interrupted. Handled exactly like [`Message::Ended`].
    Cancelled,
}

/// Effects produced by the gesture interpreter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Apply this brightness now.
    SetBrightness(Brightness),
    /// Apply this volume now.
    SetVolume(Volume),
    /// Show this seek position; nothing is sent to the backend yet.
    PreviewSeek(u64),
    /// The gesture ended on a seek: seek to this position once.
    CommitSeek(u64),
    /// The gesture ended without a seek.
    Finished,
}

impl State {
    #[must_use]
    pub fn new(selection: AxisSelection) -> Self {
        Self {
            selection,
            active: None,
        }
    }

    #[must_use]
    pub fn selection(&self) -> AxisSelection {
        self.selection
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Current sample, if a drag is in progress.
    #[must_use]
    pub fn sample(&self) -> Option<GestureSample> {
        self.active.map(|lifecycle| lifecycle.sample)
    }

    /// Axis of the drag in progress, or `None` when idle.
    #[must_use]
    pub fn axis(&self) -> Option<Axis> {
        self.sample().map(|sample| sample.axis)
    }

    /// Seek position shown while a seek drag is in progress.
    #[must_use]
    pub fn seek_preview(&self) -> Option<u64> {
        self.active.and_then(|lifecycle| lifecycle.pending_seek)
    }

    /// Handle a gesture message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Began { viewport, origin } => {
                if self.active.is_some() {
                    tracing::debug!("gesture restarted before the previous one ended");
                }
                self.active = Some(Lifecycle {
                    viewport,
                    origin,
                    sample: GestureSample {
                        axis: Axis::Undetermined,
                        start_value: 0.0,
                        current_delta: 0.0,
                    },
                    pending_seek: None,
                });
                Effect::None
            }
            Message::Moved(sample) => self.handle_sample(&sample),
            Message::Ended | Message::Cancelled => match self.active.take() {
                Some(Lifecycle {
                    pending_seek: Some(target),
                    ..
                }) => Effect::CommitSeek(target),
                Some(_) => Effect::Finished,
                None => Effect::None,
            },
        }
    }

    fn handle_sample(&mut self, sample: &DragSample) -> Effect {
        let selection = self.selection;
        let Some(lifecycle) = self.active.as_mut() else {
            return Effect::None;
        };

        let axis = match (selection, lifecycle.sample.axis) {
            (AxisSelection::Frozen, axis) if axis != Axis::Undetermined => axis,
            _ => classify(sample, lifecycle.viewport),
        };
        let origin = lifecycle.origin;

        let (start_value, current_delta, effect) = match axis {
            Axis::Seek => {
                let target = seek_target(
                    origin.position_ms,
                    origin.duration_ms,
                    sample.translation_x,
                    lifecycle.viewport.width,
                );
                lifecycle.pending_seek = Some(target);
                #[allow(clippy::cast_precision_loss)]
                let start = origin.position_ms as f64;
                (start, sample.translation_x, Effect::PreviewSeek(target))
            }
            Axis::Brightness => {
                let start = origin.brightness.value();
                let level = level_target(start, sample.translation_y, lifecycle.viewport.height);
                (
                    f64::from(start),
                    sample.translation_y,
                    Effect::SetBrightness(Brightness::new(level)),
                )
            }
            Axis::Volume => {
                let start = origin.volume.value();
                let level = level_target(start, sample.translation_y, lifecycle.viewport.height);
                (
                    f64::from(start),
                    sample.translation_y,
                    Effect::SetVolume(Volume::new(level)),
                )
            }
            Axis::Undetermined => (0.0, 0.0, Effect::None),
        };

        lifecycle.sample = GestureSample {
            axis,
            start_value,
            current_delta,
        };
        effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn origin(position_ms: u64, duration_ms: u64, brightness: f32, volume: f32) -> GestureOrigin {
        GestureOrigin {
            position_ms,
            duration_ms,
            brightness: Brightness::new(brightness),
            volume: Volume::new(volume),
        }
    }

    fn drag(tx: f32, ty: f32, x: f32) -> Message {
        Message::Moved(DragSample {
            translation_x: tx,
            translation_y: ty,
            absolute_x: x,
        })
    }

    fn began(state: &mut State, width: f32, height: f32, origin: GestureOrigin) {
        let effect = state.handle(Message::Began {
            viewport: Viewport::new(width, height),
            origin,
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn classify_prefers_horizontal_for_seek() {
        let viewport = Viewport::new(360.0, 800.0);
        let sample = DragSample {
            translation_x: 30.0,
            translation_y: -10.0,
            absolute_x: 100.0,
        };
        assert_eq!(classify(&sample, viewport), Axis::Seek);
    }

    #[test]
    fn classify_splits_vertical_by_half() {
        let viewport = Viewport::new(360.0, 800.0);
        let left = DragSample {
            translation_x: 0.0,
            translation_y: -40.0,
            absolute_x: 179.0,
        };
        let right = DragSample {
            absolute_x: 180.0,
            ..left
        };
        assert_eq!(classify(&left, viewport), Axis::Brightness);
        assert_eq!(classify(&right, viewport), Axis::Volume);
    }

    #[test]
    fn equal_translation_is_vertical() {
        let viewport = Viewport::new(360.0, 800.0);
        let sample = DragSample {
            translation_x: 20.0,
            translation_y: 20.0,
            absolute_x: 300.0,
        };
        assert_eq!(classify(&sample, viewport), Axis::Volume);
    }

    #[test]
    fn seek_to_end_of_video() {
        // duration 120 s, position 60 s, width 360, drag right by 180 px
        assert_eq!(seek_target(60_000, 120_000, 180.0, 360.0), 120_000);
    }

    #[test]
    fn seek_target_clamps_below_zero() {
        assert_eq!(seek_target(10_000, 120_000, -360.0, 360.0), 0);
    }

    #[test]
    fn seek_target_with_unknown_duration_stays_at_zero() {
        assert_eq!(seek_target(0, 0, 200.0, 360.0), 0);
    }

    #[test]
    fn seek_target_ignores_degenerate_viewport() {
        assert_eq!(seek_target(5_000, 10_000, 50.0, 0.0), 5_000);
    }

    #[test]
    fn level_target_rises_when_dragging_up() {
        assert_abs_diff_eq!(level_target(0.5, -400.0, 800.0), 1.0);
        assert_abs_diff_eq!(level_target(0.5, 200.0, 800.0), 0.25);
        assert_abs_diff_eq!(level_target(0.1, 800.0, 800.0), 0.0);
    }

    #[test]
    fn volume_drag_commits_on_every_sample() {
        let mut state = State::default();
        began(&mut state, 360.0, 800.0, origin(0, 120_000, 0.5, 0.5));

        assert_eq!(
            state.handle(drag(0.0, -200.0, 300.0)),
            Effect::SetVolume(Volume::new(0.75))
        );
        assert_eq!(
            state.handle(drag(0.0, -400.0, 300.0)),
            Effect::SetVolume(Volume::new(1.0))
        );
        assert_eq!(state.axis(), Some(Axis::Volume));
        assert_eq!(state.handle(Message::Ended), Effect::Finished);
        assert!(!state.is_active());
    }

    #[test]
    fn targets_do_not_compound_across_samples() {
        let mut state = State::default();
        began(&mut state, 360.0, 800.0, origin(0, 0, 0.5, 0.5));

        state.handle(drag(0.0, -80.0, 10.0));
        let effect = state.handle(drag(0.0, -80.0, 10.0));
        match effect {
            Effect::SetBrightness(level) => assert_abs_diff_eq!(level.value(), 0.6, epsilon = 1e-6),
            other => panic!("expected brightness effect, got {other:?}"),
        }
    }

    #[test]
    fn seek_drag_previews_then_commits_once() {
        let mut state = State::default();
        began(&mut state, 360.0, 800.0, origin(60_000, 120_000, 0.5, 1.0));

        assert_eq!(
            state.handle(drag(90.0, 5.0, 200.0)),
            Effect::PreviewSeek(90_000)
        );
        assert_eq!(
            state.handle(drag(180.0, 5.0, 200.0)),
            Effect::PreviewSeek(120_000)
        );
        assert_eq!(state.seek_preview(), Some(120_000));

        assert_eq!(state.handle(Message::Ended), Effect::CommitSeek(120_000));
        assert_eq!(state.handle(Message::Ended), Effect::None);
    }

    #[test]
    fn cancel_behaves_like_end() {
        let mut state = State::default();
        began(&mut state, 360.0, 800.0, origin(0, 10_000, 0.5, 1.0));
        state.handle(drag(36.0, 0.0, 100.0));

        assert_eq!(state.handle(Message::Cancelled), Effect::CommitSeek(1_000));
        assert_eq!(state.axis(), None);
    }

    #[test]
    fn frozen_selection_keeps_first_axis() {
        let mut state = State::new(AxisSelection::Frozen);
        began(&mut state, 360.0, 800.0, origin(0, 120_000, 0.5, 0.5));

        state.handle(drag(0.0, -40.0, 300.0));
        let effect = state.handle(drag(200.0, -40.0, 300.0));

        assert_eq!(state.axis(), Some(Axis::Volume));
        assert!(matches!(effect, Effect::SetVolume(_)));
        assert_eq!(state.handle(Message::Ended), Effect::Finished);
    }

    #[test]
    fn continuous_selection_follows_dominant_direction() {
        let mut state = State::new(AxisSelection::Continuous);
        began(&mut state, 360.0, 800.0, origin(0, 120_000, 0.5, 0.5));

        state.handle(drag(0.0, -40.0, 300.0));
        let effect = state.handle(drag(180.0, -40.0, 300.0));

        assert_eq!(state.axis(), Some(Axis::Seek));
        assert_eq!(effect, Effect::PreviewSeek(60_000));
        assert_eq!(state.handle(Message::Ended), Effect::CommitSeek(60_000));
    }

    #[test]
    fn samples_without_begin_are_ignored() {
        let mut state = State::default();
        assert_eq!(state.handle(drag(10.0, 0.0, 0.0)), Effect::None);
        assert_eq!(state.handle(Message::Ended), Effect::None);
    }

    #[test]
    fn sample_records_start_value_and_delta() {
        let mut state = State::default();
        began(&mut state, 360.0, 800.0, origin(0, 0, 0.3, 1.0));
        state.handle(drag(2.0, -50.0, 20.0));

        let sample = state.sample().expect("gesture is active");
        assert_eq!(sample.axis, Axis::Brightness);
        assert_abs_diff_eq!(sample.start_value, 0.3, epsilon = 1e-6);
        assert_abs_diff_eq!(sample.current_delta, -50.0);
    }

    #[test]
    fn axis_selection_deserializes_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: AxisSelection,
        }
        let parsed: Wrapper = toml::from_str("mode = \"continuous\"").expect("valid toml");
        assert_eq!(parsed.mode, AxisSelection::Continuous);
    }
}
