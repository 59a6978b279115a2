// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core types with no GUI or backend dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `thiserror` for error derivation it depends only on `std`.
//!
//! # Modules
//!
//! - [`device`]: Device capability types ([`Brightness`](device::Brightness),
//!   [`OrientationLock`](device::OrientationLock))
//! - [`error`]: Domain error types ([`DeviceError`](error::DeviceError),
//!   [`LibraryError`](error::LibraryError))
//! - [`library`]: Albums, assets and paged queries
//! - [`ui`]: UI value objects ([`ControlsTimeout`](ui::newtypes::ControlsTimeout))
//! - [`video`]: Video playback types ([`PlaybackState`](video::PlaybackState),
//!   [`Volume`](video::Volume), [`SeekStep`](video::SeekStep))

pub mod device;
pub mod error;
pub mod library;
pub mod ui;
pub mod video;
