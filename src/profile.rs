//! Static description of one controller chip.
//!
//! A profile is pure data: the chip's init table, which panel sizes it can
//! drive, and the colour order / pixel format its table leaves behind.
//! Chip variants differ only in their profile; the driver is shared.

use crate::orientation::{ColorOrder, Rotation};
use crate::sequence::RegisterStep;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u16,
    pub height: u16,
}

impl Resolution {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Interface pixel format (COLMOD).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// 16 bpp, two bytes per pixel, big-endian on the wire.
    #[default]
    Rgb565,
    /// 18 bpp, three bytes per pixel (6 significant bits each).
    Rgb666,
}

impl PixelFormat {
    pub const fn from_bits(bits_per_pixel: u8) -> Option<Self> {
        match bits_per_pixel {
            16 => Some(PixelFormat::Rgb565),
            18 => Some(PixelFormat::Rgb666),
            _ => None,
        }
    }

    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            PixelFormat::Rgb565 => 16,
            PixelFormat::Rgb666 => 18,
        }
    }

    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb565 => 2,
            PixelFormat::Rgb666 => 3,
        }
    }

    /// COLMOD parameter, same value in the RGB and MCU interface nibbles.
    pub const fn colmod(self) -> u8 {
        match self {
            PixelFormat::Rgb565 => 0x55,
            PixelFormat::Rgb666 => 0x66,
        }
    }
}

/// RAM offset of the visible glass, added to window coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub x: u16,
    pub y: u16,
}

impl Offset {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Per-rotation offsets for a panel smaller than the controller's RAM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowOffsets {
    pub resolution: Resolution,
    /// Indexed by rotation index.
    pub by_rotation: [Offset; 4],
}

#[derive(Clone, Copy, Debug)]
pub struct ControllerProfile {
    pub name: &'static str,
    pub native_resolution: Resolution,
    pub supported_resolutions: &'static [Resolution],
    /// Colour order of the panels this chip usually ships with.
    pub color_order: ColorOrder,
    /// Format the init sequence selects.
    pub pixel_format: PixelFormat,
    pub supported_pixel_formats: &'static [PixelFormat],
    /// Must end with SLPOUT and DISPON, each with a settle delay.
    pub init_sequence: &'static [RegisterStep],
    /// Empty when the glass maps 1:1 onto controller RAM.
    pub window_offsets: &'static [WindowOffsets],
}

impl ControllerProfile {
    pub fn supports_resolution(&self, resolution: Resolution) -> bool {
        self.supported_resolutions.contains(&resolution)
    }

    pub fn supports_pixel_format(&self, format: PixelFormat) -> bool {
        self.supported_pixel_formats.contains(&format)
    }

    /// Offset to add to window coordinates for `resolution` at `rotation`.
    pub fn window_offset(&self, resolution: Resolution, rotation: Rotation) -> Offset {
        self.window_offsets
            .iter()
            .find(|o| o.resolution == resolution)
            .map(|o| o.by_rotation[rotation.index() as usize])
            .unwrap_or_default()
    }
}
