// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (CQRS read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use iced_reel::application::port::MediaLibrary;
//! use iced_reel::application::query::albums::load_video_albums;
//!
//! fn list(library: &dyn MediaLibrary) {
//!     for entry in load_video_albums(library).unwrap_or_default() {
//!         println!("{} ({})", entry.album.title, entry.video_count);
//!     }
//! }
//! ```

pub mod port;
pub mod query;
