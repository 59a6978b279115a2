// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report refused permissions and load
//! failures without blocking interaction.
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! Toast duration: 3s for success/info, 5s for warnings, manual dismiss for
//! errors. At most 3 toasts are visible; the rest are queued.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
