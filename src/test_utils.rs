// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a recording device fake.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::application::port::DeviceGateway;
use crate::domain::device::{Brightness, OrientationLock};
use crate::domain::error::DeviceError;
use crate::domain::video::Volume;

/// A call received by [`RecordingDevice`].
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    ReadBrightness,
    SetBrightness(Brightness),
    LockOrientation(OrientationLock),
    Play,
    Pause,
    SeekTo(u64),
    SetVolume(Volume),
}

/// Device gateway that records every call and can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    pub calls: Vec<DeviceCall>,
    pub brightness: Brightness,
    pub fail_brightness: Option<DeviceError>,
    pub fail_orientation: Option<DeviceError>,
    pub fail_playback: Option<DeviceError>,
}

impl RecordingDevice {
    pub fn orientation_locks(&self) -> Vec<OrientationLock> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DeviceCall::LockOrientation(lock) => Some(*lock),
                _ => None,
            })
            .collect()
    }

    pub fn seeks(&self) -> Vec<u64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DeviceCall::SeekTo(position) => Some(*position),
                _ => None,
            })
            .collect()
    }

    fn playback(&mut self, call: DeviceCall) -> Result<(), DeviceError> {
        self.calls.push(call);
        self.fail_playback.clone().map_or(Ok(()), Err)
    }
}

impl DeviceGateway for RecordingDevice {
    fn brightness(&mut self) -> Result<Brightness, DeviceError> {
        self.calls.push(DeviceCall::ReadBrightness);
        match &self.fail_brightness {
            Some(err) => Err(err.clone()),
            None => Ok(self.brightness),
        }
    }

    fn set_brightness(&mut self, level: Brightness) -> Result<(), DeviceError> {
        self.calls.push(DeviceCall::SetBrightness(level));
        match &self.fail_brightness {
            Some(err) => Err(err.clone()),
            None => {
                self.brightness = level;
                Ok(())
            }
        }
    }

    fn lock_orientation(&mut self, lock: OrientationLock) -> Result<(), DeviceError> {
        self.calls.push(DeviceCall::LockOrientation(lock));
        self.fail_orientation.clone().map_or(Ok(()), Err)
    }

    fn play(&mut self) -> Result<(), DeviceError> {
        self.playback(DeviceCall::Play)
    }

    fn pause(&mut self) -> Result<(), DeviceError> {
        self.playback(DeviceCall::Pause)
    }

    fn seek_to(&mut self, position_ms: u64) -> Result<(), DeviceError> {
        self.playback(DeviceCall::SeekTo(position_ms))
    }

    fn set_volume(&mut self, volume: Volume) -> Result<(), DeviceError> {
        self.playback(DeviceCall::SetVolume(volume))
    }
}
