// SPDX-License-Identifier: MPL-2.0
//! Player core: gesture-driven transport control for one open video.
//!
//! Each sub-component follows the same shape: a `State`, a `Message` enum
//! and an `Effect` returned from `handle()`. Components that touch the
//! device receive a [`DeviceGateway`](crate::application::port::DeviceGateway)
//! per call instead of owning one.

pub mod controls;
pub mod gesture;
pub mod orientation;
pub mod overlay;
pub mod session;
pub mod time_format;
pub mod transport;

pub use session::{PlayerFeatures, SessionSettings};

use crate::domain::error::DeviceError;

/// Logs a failed device call. Returns `true` when the call succeeded.
pub(crate) fn report_failure(action: &str, result: Result<(), DeviceError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!("{action} failed: {err}");
            false
        }
    }
}
