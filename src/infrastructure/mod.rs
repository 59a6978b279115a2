// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping FFmpeg, the window and the filesystem.
//!
//! - [`playback`]: FFmpeg decoder task and its Iced subscription
//! - [`desktop`]: [`DeviceGateway`] for a desktop window
//! - [`fs_library`]: [`MediaLibrary`] over a directory tree
//!
//! [`DeviceGateway`]: crate::application::port::DeviceGateway
//! [`MediaLibrary`]: crate::application::port::MediaLibrary

pub mod desktop;
pub mod fs_library;
pub mod playback;

pub use desktop::DesktopDevice;
pub use fs_library::FsMediaLibrary;
