// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a gesture-driven video player built with the Iced GUI framework.
//!
//! It browses local video albums and plays videos with drag gestures for
//! seeking, brightness and volume, on top of an FFmpeg decoder.
//!
//! # Layers
//!
//! - [`domain`] - Plain value types (volume, brightness, playback state, albums)
//! - [`application`] - Ports ([`application::port::DeviceGateway`],
//!   [`application::port::MediaLibrary`]) and album queries
//! - [`player`] - Gesture interpreter, transport, controls timer, overlay,
//!   orientation reactor and the session tying them together
//! - [`infrastructure`] - FFmpeg decoder, desktop device, filesystem library
//! - [`ui`] and [`app`] - Iced screens and the application shell

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod player;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
