// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Domain errors ([`DeviceError`], [`LibraryError`]) convert into [`Error`]
//! so that adapters and the application shell can use `?` across layers.

use crate::domain::error::{DeviceError, LibraryError};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("video error: {0}")]
    Video(#[from] VideoError),

    #[error("media library error: {0}")]
    Library(#[from] LibraryError),

    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Failures raised by the decode backend while opening or playing a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VideoError {
    /// File exists but contains no video stream.
    #[error("no video stream found")]
    NoVideoStream,

    /// Codec context or scaler could not be created.
    #[error("unsupported codec: {0}")]
    UnsupportedCodec(String),

    /// Decoding failed during playback.
    #[error("decoding failed: {0}")]
    DecodingFailed(String),

    /// The file could not be opened.
    #[error("could not open video: {0}")]
    Open(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
