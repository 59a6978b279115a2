// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module contains query services for reading domain data through the
//! ports. These services do not modify state; they provide read-only access.
//!
//! # Available Services
//!
//! - [`albums`]: Video album listing and exhaustive album paging

pub mod albums;

// Re-export main types
pub use albums::{load_album_videos, load_video_albums};
