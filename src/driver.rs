//! Generic controller driver: one profile, one transport, one orientation.
//!
//! All operations are blocking and assume the caller serializes access to
//! the bus. An interleaved command/data pair from another user of the same
//! SPI bus corrupts the controller's addressing state.

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::command::{CASET, COLMOD, MADCTL, RAMWR, RASET};
use crate::config::DriverConfig;
use crate::error::Error;
use crate::interface::Transport;
use crate::orientation::{OrientationState, Rotation};
use crate::profile::ControllerProfile;
use crate::sequence::{self, run_sequence};
use crate::window::WriteWindow;

pub struct Driver<T> {
    transport: T,
    profile: ControllerProfile,
    config: DriverConfig,
    orientation: OrientationState,
    initialized: bool,
}

impl<T: Transport> Driver<T> {
    /// Attach a transport. No I/O happens until [`Driver::initialize`].
    pub fn new(transport: T, profile: ControllerProfile, config: DriverConfig) -> Self {
        Self {
            transport,
            profile,
            orientation: OrientationState::new(
                config.initial_rotation,
                config.color_order,
                config.resolution,
            ),
            config,
            initialized: false,
        }
    }

    pub fn profile(&self) -> &ControllerProfile {
        &self.profile
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn orientation(&self) -> OrientationState {
        self.orientation
    }

    /// Logical width under the current rotation.
    #[inline]
    pub fn width(&self) -> u16 {
        self.orientation.width
    }

    /// Logical height under the current rotation.
    #[inline]
    pub fn height(&self) -> u16 {
        self.orientation.height
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Bring the controller from reset to a known pixel format and orientation.
    ///
    /// Configuration is validated before the first byte goes out. On
    /// [`Error::InitializationFailed`] the controller state is undefined;
    /// calling `initialize` again replays the whole sequence.
    ///
    /// The rotation applied at the end is the configured initial one, so a
    /// re-initialization discards whatever [`Driver::apply_rotation`] set.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<T::Error>> {
        self.initialized = false;

        if !self.profile.supports_resolution(self.config.resolution) {
            return Err(Error::UnsupportedResolution(self.config.resolution));
        }
        if !self.profile.supports_pixel_format(self.config.pixel_format) {
            return Err(Error::UnsupportedPixelFormat(self.config.pixel_format));
        }

        debug!(
            "{}: init {}x{} ({} steps)",
            self.profile.name,
            self.config.resolution.width,
            self.config.resolution.height,
            self.profile.init_sequence.len()
        );

        run_sequence(&mut self.transport, delay, self.profile.init_sequence)?;
        let mut step = self.profile.init_sequence.len();

        // Table selects the profile's default format; override if configured otherwise.
        if self.config.pixel_format != self.profile.pixel_format {
            let colmod = [self.config.pixel_format.colmod()];
            sequence::write_register(&mut self.transport, COLMOD, &colmod).map_err(|source| {
                Error::InitializationFailed {
                    step,
                    command: COLMOD,
                    source,
                }
            })?;
            step += 1;
        }

        let state = self.orientation_for(self.config.initial_rotation);
        sequence::write_register(&mut self.transport, MADCTL, &[state.madctl])
            .map_err(|source| Error::InitializationFailed {
                step,
                command: MADCTL,
                source,
            })?;
        self.orientation = state;
        self.initialized = true;

        debug!(
            "{}: ready, {}x{} madctl {:#04x}",
            self.profile.name, state.width, state.height, state.madctl
        );
        Ok(())
    }

    /// Switch orientation. `index` is taken modulo 4.
    ///
    /// Writes MADCTL once and updates the logical size. Calling it again with
    /// the same index repeats the same write.
    pub fn apply_rotation(&mut self, index: u8) -> Result<OrientationState, Error<T::Error>> {
        let state = self.orientation_for(Rotation::from_index(index));
        sequence::write_register(&mut self.transport, MADCTL, &[state.madctl])
            .map_err(|source| Error::Transport {
                command: MADCTL,
                source,
            })?;
        self.orientation = state;

        debug!(
            "rotation {:?}: {}x{} madctl {:#04x}",
            state.rotation, state.width, state.height, state.madctl
        );
        Ok(state)
    }

    pub fn set_rotation(
        &mut self,
        rotation: Rotation,
    ) -> Result<OrientationState, Error<T::Error>> {
        self.apply_rotation(rotation.index())
    }

    /// Write `pixels` into `window` (inclusive, logical coordinates).
    ///
    /// `pixels` is sent unaltered in raster order and must hold exactly
    /// `width * height * bytes_per_pixel` bytes. Invalid windows and
    /// mismatched buffers are rejected before any transport call.
    pub fn write_region(
        &mut self,
        window: WriteWindow,
        pixels: &[u8],
    ) -> Result<(), Error<T::Error>> {
        self.check_window(window)?;

        let expected = window.pixel_count() * self.config.pixel_format.bytes_per_pixel();
        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch { expected, actual: pixels.len() });
        }

        self.start_memory_write(window)?;
        self.stream_pixels(pixels)
    }

    /// RGB565 words already in panel byte order (big-endian in memory, as
    /// produced by `u16::to_be` or a byte-swapped LVGL buffer).
    pub fn write_region_words(
        &mut self,
        window: WriteWindow,
        pixels: &[u16],
    ) -> Result<(), Error<T::Error>> {
        self.write_region(window, bytemuck::cast_slice(pixels))
    }

    /// Raw register write for features the driver does not model
    /// (inversion, brightness, partial mode, scrolling...).
    pub fn write_register(
        &mut self,
        command: u8,
        parameters: &[u8],
    ) -> Result<(), Error<T::Error>> {
        trace!("register {:#04x} ({} params)", command, parameters.len());
        sequence::write_register(&mut self.transport, command, parameters)
            .map_err(|source| Error::Transport { command, source })
    }

    /// Give the transport back.
    pub fn release(self) -> T {
        self.transport
    }

    #[cfg(test)]
    pub(crate) fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    // ---- Low-level helpers ----

    fn orientation_for(&self, rotation: Rotation) -> OrientationState {
        OrientationState::new(rotation, self.config.color_order, self.config.resolution)
    }

    pub(crate) fn check_window(&self, window: WriteWindow) -> Result<(), Error<T::Error>> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        if !window.fits(self.orientation.width, self.orientation.height) {
            return Err(Error::InvalidWindow(window));
        }
        Ok(())
    }

    // Program CASET/RASET and open RAMWR. Caller has validated the window.
    pub(crate) fn start_memory_write(
        &mut self,
        window: WriteWindow,
    ) -> Result<(), Error<T::Error>> {
        trace!("window ({},{})-({},{})", window.x0, window.y0, window.x1, window.y1);

        let off = self.profile.window_offset(self.config.resolution, self.orientation.rotation);
        let x0 = window.x0 + off.x;
        let x1 = window.x1 + off.x;
        let y0 = window.y0 + off.y;
        let y1 = window.y1 + off.y;

        let ca = [(x0 >> 8) as u8, (x0 & 0xFF) as u8, (x1 >> 8) as u8, (x1 & 0xFF) as u8];
        let ra = [(y0 >> 8) as u8, (y0 & 0xFF) as u8, (y1 >> 8) as u8, (y1 & 0xFF) as u8];

        sequence::write_register(&mut self.transport, CASET, &ca)
            .map_err(|source| Error::Transport {
                command: CASET,
                source,
            })?;
        sequence::write_register(&mut self.transport, RASET, &ra)
            .map_err(|source| Error::Transport {
                command: RASET,
                source,
            })?;
        self.transport
            .send_command(RAMWR)
            .map_err(|source| Error::Transport {
                command: RAMWR,
                source,
            })
    }

    // Continue the RAMWR payload opened by `start_memory_write`.
    pub(crate) fn stream_pixels(&mut self, bytes: &[u8]) -> Result<(), Error<T::Error>> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.transport
            .send_data(bytes)
            .map_err(|source| Error::Transport {
                command: RAMWR,
                source,
            })
    }
}
