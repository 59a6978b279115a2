// SPDX-License-Identifier: MPL-2.0
//! Pan recognizer for the video surface.
//!
//! Turns raw mouse press, move and release events into session gesture
//! messages. A press that moves less than the drag threshold before it is
//! released counts as a tap; once the pointer travels past the threshold
//! the press becomes a drag and every further move yields a sample.

use crate::domain::ui::DragThreshold;
use crate::player::gesture::{DragSample, Viewport};
use crate::player::session;
use iced::{Point, Size};

/// What a pointer event turned into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Output {
    None,
    /// The press crossed the drag threshold: a gesture begins with its
    /// first sample.
    Started(Viewport, DragSample),
    Moved(DragSample),
    Ended,
    Tapped,
}

impl Output {
    /// Session messages to dispatch for this output, in order.
    #[must_use]
    pub fn messages(self) -> Vec<session::Message> {
        match self {
            Output::None => Vec::new(),
            Output::Started(viewport, sample) => vec![
                session::Message::GestureBegan(viewport),
                session::Message::GestureMoved(sample),
            ],
            Output::Moved(sample) => vec![session::Message::GestureMoved(sample)],
            Output::Ended => vec![session::Message::GestureEnded],
            Output::Tapped => vec![session::Message::SurfaceTapped],
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Point,
    viewport: Viewport,
    dragging: bool,
}

/// Tracks one press on the video surface.
#[derive(Debug, Clone, Default)]
pub struct PanRecognizer {
    threshold: DragThreshold,
    press: Option<Press>,
}

impl PanRecognizer {
    #[must_use]
    pub fn new(threshold: DragThreshold) -> Self {
        Self {
            threshold,
            press: None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|press| press.dragging)
    }

    /// Left button pressed at `position` on a surface of size `surface`.
    pub fn pressed(&mut self, position: Point, surface: Size) {
        self.press = Some(Press {
            origin: position,
            viewport: Viewport::new(surface.width, surface.height),
            dragging: false,
        });
    }

    pub fn moved(&mut self, position: Point) -> Output {
        let threshold = self.threshold.value();
        let Some(press) = self.press.as_mut() else {
            return Output::None;
        };

        let sample = DragSample {
            translation_x: position.x - press.origin.x,
            translation_y: position.y - press.origin.y,
            absolute_x: position.x,
        };

        if press.dragging {
            return Output::Moved(sample);
        }
        if position.distance(press.origin) < threshold {
            return Output::None;
        }
        press.dragging = true;
        Output::Started(press.viewport, sample)
    }

    pub fn released(&mut self) -> Output {
        match self.press.take() {
            Some(press) if press.dragging => Output::Ended,
            Some(_) => Output::Tapped,
            None => Output::None,
        }
    }

    /// Drops the current press, ending a drag in progress.
    pub fn cancel(&mut self) -> Output {
        match self.press.take() {
            Some(press) if press.dragging => Output::Ended,
            _ => Output::None,
        }
    }
}
