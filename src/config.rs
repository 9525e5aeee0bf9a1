//! Construction-time configuration.
//!
//! ```
//! use ili9xxx_spi::{config::Builder, models, ColorOrder, Rotation};
//!
//! let config = Builder::new(models::ST7789)
//!     .resolution(240, 240)
//!     .rotation(Rotation::Landscape)
//!     .color_order(ColorOrder::Bgr)
//!     .build();
//! assert_eq!(config.resolution.height, 240);
//! ```

use crate::driver::Driver;
use crate::interface::Transport;
use crate::orientation::{ColorOrder, Rotation};
use crate::profile::{ControllerProfile, PixelFormat, Resolution};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Must be one of the profile's supported resolutions; checked by `initialize`.
    pub resolution: Resolution,
    pub initial_rotation: Rotation,
    pub color_order: ColorOrder,
    pub pixel_format: PixelFormat,
}

impl DriverConfig {
    /// The profile's own defaults: native size, portrait, its colour order
    /// and the pixel format its init table selects.
    pub const fn for_profile(profile: &ControllerProfile) -> Self {
        Self {
            resolution: profile.native_resolution,
            initial_rotation: Rotation::Portrait,
            color_order: profile.color_order,
            pixel_format: profile.pixel_format,
        }
    }
}

/// Builder starting from a profile's defaults.
pub struct Builder {
    profile: ControllerProfile,
    config: DriverConfig,
}

impl Builder {
    pub const fn new(profile: ControllerProfile) -> Self {
        let config = DriverConfig::for_profile(&profile);
        Self { profile, config }
    }

    /// Panel size in native (portrait) orientation.
    pub const fn resolution(mut self, width: u16, height: u16) -> Self {
        self.config.resolution = Resolution::new(width, height);
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.initial_rotation = rotation;
        self
    }

    pub const fn color_order(mut self, color_order: ColorOrder) -> Self {
        self.config.color_order = color_order;
        self
    }

    pub const fn pixel_format(mut self, pixel_format: PixelFormat) -> Self {
        self.config.pixel_format = pixel_format;
        self
    }

    /// Pixel format by interface depth (16 or 18); `None` for any other value.
    pub const fn bits_per_pixel(self, bits: u8) -> Option<Self> {
        match PixelFormat::from_bits(bits) {
            Some(format) => Some(self.pixel_format(format)),
            None => None,
        }
    }

    pub const fn build(self) -> DriverConfig {
        self.config
    }

    /// Build and attach a transport. The driver is not initialized yet.
    pub fn into_driver<T: Transport>(self, transport: T) -> Driver<T> {
        Driver::new(transport, self.profile, self.config)
    }
}
