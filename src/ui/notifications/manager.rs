// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Waiting for a visible slot.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// Shown immediately while fewer than `MAX_VISIBLE` are visible,
    /// queued otherwise. Warnings and errors are also logged.
    ///
    /// A notification repeating one that is already visible replaces it in
    /// place, restarting its dismiss timer; one repeating a queued
    /// notification is dropped.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!("{}", notification.message()),
            Severity::Error => tracing::error!("{}", notification.message()),
            Severity::Success | Severity::Info => {}
        }

        if let Some(shown) = self.visible.iter_mut().find(|n| n.repeats(&notification)) {
            *shown = notification;
            return;
        }
        if self.queue.iter().any(|n| n.repeats(&notification)) {
            return;
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification that expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(now))
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            if let Some(notification) = self.queue.pop_front() {
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")));
        }
        manager.push(Notification::success("queued"));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::success("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        manager.push(Notification::success("queued"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();
        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::warning("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn repeated_notification_refreshes_instead_of_stacking() {
        let mut manager = Manager::new();
        let first = Notification::error("Playback failed: no video stream");
        let first_id = first.id();
        manager.push(first);
        manager.push(Notification::warning("Playback failed: no video stream"));
        manager.push(Notification::error("Playback failed: no video stream"));

        assert_eq!(manager.visible_count(), 2);
        assert!(!manager.visible().any(|n| n.id() == first_id));
    }

    #[test]
    fn repeat_of_queued_notification_is_dropped() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::info(format!("visible-{i}")));
        }
        manager.push(Notification::info("queued"));
        manager.push(Notification::info("queued"));

        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn tick_expires_timed_notifications_only() {
        let mut manager = Manager::new();
        manager.push(Notification::success("saved"));
        manager.push(Notification::error("permission denied"));

        manager.tick(Instant::now() + Duration::from_secs(10));
        let remaining: Vec<_> = manager.visible().map(Notification::message).collect();
        assert_eq!(remaining, vec!["permission denied"]);
    }
}
