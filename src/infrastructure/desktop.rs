// SPDX-License-Identifier: MPL-2.0
//! Desktop implementation of the [`DeviceGateway`] port.
//!
//! A desktop window has no backlight or rotation lock, so both are emulated:
//! brightness is kept here and rendered as a dimming layer over the video,
//! and orientation locks become window reshape requests that the
//! application drains after each update. Playback and volume commands go to
//! the FFmpeg decoder once its subscription has started; a volume set before
//! that is applied when the decoder attaches.

use crate::application::port::DeviceGateway;
use crate::domain::device::{brightness_bounds, Brightness, OrientationLock};
use crate::domain::error::DeviceError;
use crate::domain::video::Volume;
use crate::infrastructure::playback::{DecoderCommand, DecoderCommandSender};
use iced::Size;

/// Device gateway backed by the application window and the decoder.
#[derive(Debug)]
pub struct DesktopDevice {
    brightness: Brightness,
    volume: Volume,
    orientation: OrientationLock,
    pending_reshape: Option<OrientationLock>,
    decoder: Option<DecoderCommandSender>,
}

impl DesktopDevice {
    /// Creates a detached device at full brightness.
    #[must_use]
    pub fn new() -> Self {
        Self {
            brightness: Brightness::new(brightness_bounds::MAX),
            volume: Volume::default(),
            orientation: OrientationLock::Default,
            pending_reshape: None,
            decoder: None,
        }
    }

    /// Connects a freshly started decoder, applies the current volume and
    /// shows the first frame.
    pub fn attach(&mut self, sender: DecoderCommandSender, autoplay: bool) {
        let result = sender
            .send(DecoderCommand::SetVolume(self.volume))
            .and_then(|()| sender.send(DecoderCommand::Seek { target_ms: 0 }))
            .and_then(|()| {
                if autoplay {
                    sender.send(DecoderCommand::Play)
                } else {
                    Ok(())
                }
            });
        if let Err(err) = result {
            tracing::warn!("decoder bootstrap failed: {err}");
        }
        self.decoder = Some(sender);
    }

    /// Stops and forgets the current decoder.
    pub fn detach(&mut self) {
        if let Some(sender) = self.decoder.take() {
            let _ = sender.send(DecoderCommand::Stop);
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.decoder.is_some()
    }

    /// Current emulated brightness level.
    #[must_use]
    pub fn brightness_level(&self) -> Brightness {
        self.brightness
    }

    /// Opacity of the dimming layer for the current brightness.
    #[must_use]
    pub fn dim_alpha(&self) -> f32 {
        1.0 - self.brightness.value()
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn orientation(&self) -> OrientationLock {
        self.orientation
    }

    /// Takes the orientation change the window still has to apply.
    pub fn take_reshape(&mut self) -> Option<OrientationLock> {
        self.pending_reshape.take()
    }

    fn send(&self, command: DecoderCommand) -> Result<(), DeviceError> {
        self.decoder
            .as_ref()
            .ok_or(DeviceError::NotReady)?
            .send(command)
    }
}

impl Default for DesktopDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// Window size matching `lock`, derived from the current size.
///
/// Returns `None` when the window already has the requested shape or the
/// lock is released.
#[must_use]
pub fn oriented_size(lock: OrientationLock, current: Size) -> Option<Size> {
    let long = current.width.max(current.height);
    let short = current.width.min(current.height);
    let target = match lock {
        OrientationLock::Landscape => Size::new(long, short),
        OrientationLock::Portrait => Size::new(short, long),
        OrientationLock::Default => return None,
    };
    (target != current).then_some(target)
}

impl DeviceGateway for DesktopDevice {
    fn brightness(&mut self) -> Result<Brightness, DeviceError> {
        Ok(self.brightness)
    }

    fn set_brightness(&mut self, level: Brightness) -> Result<(), DeviceError> {
        self.brightness = level;
        Ok(())
    }

    fn lock_orientation(&mut self, lock: OrientationLock) -> Result<(), DeviceError> {
        if self.orientation != lock {
            tracing::debug!("orientation lock {} -> {lock}", self.orientation);
            self.orientation = lock;
            self.pending_reshape = Some(lock);
        }
        Ok(())
    }

    fn play(&mut self) -> Result<(), DeviceError> {
        self.send(DecoderCommand::Play)
    }

    fn pause(&mut self) -> Result<(), DeviceError> {
        self.send(DecoderCommand::Pause)
    }

    fn seek_to(&mut self, position_ms: u64) -> Result<(), DeviceError> {
        self.send(DecoderCommand::Seek {
            target_ms: position_ms,
        })
    }

    fn set_volume(&mut self, volume: Volume) -> Result<(), DeviceError> {
        self.volume = volume;
        match self.decoder.as_ref() {
            Some(sender) => sender.send(DecoderCommand::SetVolume(volume)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tokio::sync::mpsc;

    fn attached(autoplay: bool) -> (DesktopDevice, mpsc::UnboundedReceiver<DecoderCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut device = DesktopDevice::new();
        device.attach(DecoderCommandSender::new(tx), autoplay);
        (device, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<DecoderCommand>) -> Vec<DecoderCommand> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[test]
    fn playback_before_attach_is_not_ready() {
        let mut device = DesktopDevice::new();
        assert_eq!(device.play(), Err(DeviceError::NotReady));
        assert_eq!(device.seek_to(1_000), Err(DeviceError::NotReady));
    }

    #[test]
    fn attach_shows_first_frame_and_honours_autoplay() {
        let (_, mut rx) = attached(true);
        assert_eq!(
            drain(&mut rx),
            vec![
                DecoderCommand::SetVolume(Volume::default()),
                DecoderCommand::Seek { target_ms: 0 },
                DecoderCommand::Play,
            ]
        );

        let (_, mut rx) = attached(false);
        assert_eq!(
            drain(&mut rx),
            vec![
                DecoderCommand::SetVolume(Volume::default()),
                DecoderCommand::Seek { target_ms: 0 },
            ]
        );
    }

    #[test]
    fn transport_calls_reach_decoder() {
        let (mut device, mut rx) = attached(false);
        drain(&mut rx);

        device.play().expect("play");
        device.seek_to(42_000).expect("seek");
        device.pause().expect("pause");
        assert_eq!(
            drain(&mut rx),
            vec![
                DecoderCommand::Play,
                DecoderCommand::Seek { target_ms: 42_000 },
                DecoderCommand::Pause,
            ]
        );
    }

    #[test]
    fn volume_reaches_decoder() {
        let (mut device, mut rx) = attached(false);
        drain(&mut rx);

        device.set_volume(Volume::new(0.2)).expect("volume");
        assert_eq!(device.volume(), Volume::new(0.2));
        assert_eq!(drain(&mut rx), vec![DecoderCommand::SetVolume(Volume::new(0.2))]);
    }

    #[test]
    fn volume_set_before_attach_is_applied_on_attach() {
        let mut device = DesktopDevice::new();
        device.set_volume(Volume::new(0.4)).expect("volume");

        let (tx, mut rx) = mpsc::unbounded_channel();
        device.attach(DecoderCommandSender::new(tx), false);
        assert_eq!(
            drain(&mut rx).first(),
            Some(&DecoderCommand::SetVolume(Volume::new(0.4)))
        );
    }

    #[test]
    fn detach_stops_decoder() {
        let (mut device, mut rx) = attached(false);
        drain(&mut rx);
        device.detach();
        assert!(!device.is_attached());
        assert_eq!(drain(&mut rx), vec![DecoderCommand::Stop]);
    }

    #[test]
    fn new_device_starts_undimmed() {
        let device = DesktopDevice::new();
        assert_abs_diff_eq!(device.dim_alpha(), 0.0);
    }

    #[test]
    fn repeated_lock_requests_reshape_once() {
        let mut device = DesktopDevice::new();
        device.lock_orientation(OrientationLock::Landscape).expect("lock");
        device.lock_orientation(OrientationLock::Landscape).expect("lock");
        assert_eq!(device.take_reshape(), Some(OrientationLock::Landscape));
        assert_eq!(device.take_reshape(), None);
    }

    #[test]
    fn brightness_drives_dim_layer() {
        let mut device = DesktopDevice::new();
        device.set_brightness(Brightness::new(0.25)).expect("set");
        assert_eq!(device.brightness(), Ok(Brightness::new(0.25)));
        assert_abs_diff_eq!(device.dim_alpha(), 0.75);
    }

    #[test]
    fn oriented_size_swaps_axes() {
        let portrait = Size::new(450.0, 800.0);
        assert_eq!(
            oriented_size(OrientationLock::Landscape, portrait),
            Some(Size::new(800.0, 450.0))
        );
        assert_eq!(oriented_size(OrientationLock::Portrait, portrait), None);
        assert_eq!(oriented_size(OrientationLock::Default, portrait), None);
    }
}
