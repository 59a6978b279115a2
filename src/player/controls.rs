// SPDX-License-Identifier: MPL-2.0
//! Visibility of the on-screen transport controls.
//!
//! Controls hide themselves a fixed delay after becoming visible. The
//! deadline is owned here and advanced by clock ticks carrying the current
//! instant, so tests drive time explicitly.

use crate::domain::ui::ControlsTimeout;
use std::time::Instant;

/// Controls visibility state.
#[derive(Debug, Clone, Default)]
pub struct State {
    visible: bool,
    hide_deadline: Option<Instant>,
    delay: ControlsTimeout,
}

/// Messages for the controls visibility timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Tap on the video surface: flip visibility.
    Toggle(Instant),
    /// The user pressed one of the controls; restart the delay if visible.
    Interaction(Instant),
    /// Clock tick.
    Tick(Instant),
    /// The player is going away: drop any pending deadline.
    Teardown,
}

/// Effects produced by visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    VisibilityChanged(bool),
}

impl State {
    #[must_use]
    pub fn new(delay: ControlsTimeout) -> Self {
        Self {
            visible: false,
            hide_deadline: None,
            delay,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_deadline
    }

    /// Handle a controls message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle(now) => self.set_visible(!self.visible, now),
            Message::Interaction(now) => {
                if self.visible {
                    self.hide_deadline = Some(now + self.delay.as_duration());
                }
                Effect::None
            }
            Message::Tick(now) => match self.hide_deadline {
                Some(deadline) if self.visible && now >= deadline => {
                    self.hide_deadline = None;
                    self.visible = false;
                    Effect::VisibilityChanged(false)
                }
                _ => Effect::None,
            },
            Message::Teardown => {
                self.hide_deadline = None;
                Effect::None
            }
        }
    }

    fn set_visible(&mut self, visible: bool, now: Instant) -> Effect {
        let changed = self.visible != visible;
        self.visible = visible;
        // Any visibility request replaces the pending deadline.
        self.hide_deadline = visible.then(|| now + self.delay.as_duration());

        if changed {
            Effect::VisibilityChanged(visible)
        } else {
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(base: Instant, millis: u64) -> Instant {
        base + Duration::from_millis(millis)
    }

    #[test]
    fn controls_hide_after_default_delay() {
        let t0 = Instant::now();
        let mut state = State::default();

        assert_eq!(
            state.handle(Message::Toggle(t0)),
            Effect::VisibilityChanged(true)
        );
        assert_eq!(state.handle(Message::Tick(ms(t0, 2_999))), Effect::None);
        assert!(state.is_visible());
        assert_eq!(
            state.handle(Message::Tick(ms(t0, 3_000))),
            Effect::VisibilityChanged(false)
        );
        assert!(!state.is_visible());
        assert_eq!(state.hide_deadline(), None);
    }

    #[test]
    fn interaction_reschedules_hide() {
        let t0 = Instant::now();
        let mut state = State::default();

        state.handle(Message::Toggle(t0));
        assert_eq!(state.handle(Message::Interaction(ms(t0, 1_000))), Effect::None);

        assert_eq!(state.handle(Message::Tick(ms(t0, 3_500))), Effect::None);
        assert!(state.is_visible());
        assert_eq!(
            state.handle(Message::Tick(ms(t0, 4_000))),
            Effect::VisibilityChanged(false)
        );
    }

    #[test]
    fn toggling_off_cancels_deadline() {
        let t0 = Instant::now();
        let mut state = State::default();

        state.handle(Message::Toggle(t0));
        assert_eq!(
            state.handle(Message::Toggle(ms(t0, 500))),
            Effect::VisibilityChanged(false)
        );
        assert_eq!(state.hide_deadline(), None);
        assert_eq!(state.handle(Message::Tick(ms(t0, 5_000))), Effect::None);
    }

    #[test]
    fn interaction_extends_visible_controls_only() {
        let t0 = Instant::now();
        let mut state = State::default();

        state.handle(Message::Interaction(t0));
        assert!(!state.is_visible());
        assert_eq!(state.hide_deadline(), None);

        state.handle(Message::Toggle(t0));
        state.handle(Message::Interaction(ms(t0, 2_000)));
        assert_eq!(state.hide_deadline(), Some(ms(t0, 5_000)));
    }

    #[test]
    fn teardown_cancels_pending_hide() {
        let t0 = Instant::now();
        let mut state = State::new(ControlsTimeout::new(1_000));

        state.handle(Message::Toggle(t0));
        state.handle(Message::Teardown);
        assert_eq!(state.hide_deadline(), None);
        assert_eq!(state.handle(Message::Tick(ms(t0, 10_000))), Effect::None);
    }

    #[test]
    fn custom_delay_is_used() {
        let t0 = Instant::now();
        let mut state = State::new(ControlsTimeout::new(1_500));
        state.handle(Message::Toggle(t0));
        assert_eq!(state.hide_deadline(), Some(ms(t0, 1_500)));
    }
}
