// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`device`]: Brightness, orientation and playback commands
//! - [`library`]: Album and asset enumeration
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Methods return `Result` with domain error types
//! - No `async fn` - use Iced's `Task` return type pattern in callers

pub mod device;
pub mod library;

// Re-export main types for convenience
pub use device::DeviceGateway;
pub use library::MediaLibrary;
