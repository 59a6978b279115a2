// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration, or `None` for errors.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }

    /// Glyph shown in front of the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
    /// Overrides the severity default.
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
            custom_dismiss_duration: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Same severity and text.
    #[must_use]
    pub fn repeats(&self, other: &Notification) -> bool {
        self.severity == other.severity && self.message == other.message
    }

    /// Returns whether this notification has outlived its display time at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration())
            .is_some_and(|duration| now.saturating_duration_since(self.created_at) >= duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        let error = Notification::error("boom");
        assert!(!error.is_expired(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        assert!(Severity::Warning.auto_dismiss_duration() > Severity::Success.auto_dismiss_duration());
    }

    #[test]
    fn expiry_follows_custom_duration() {
        let notification = Notification::error("stays").auto_dismiss(Duration::from_secs(1));
        let created = notification.created_at;
        assert!(!notification.is_expired(created));
        assert!(notification.is_expired(created + Duration::from_secs(1)));
    }
}
