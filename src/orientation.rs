//! Rotation index to MADCTL value and logical panel size.

use crate::command::madctl;
use crate::profile::Resolution;

/// Panel colour filter order, selects the MADCTL BGR bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorOrder {
    #[default]
    Rgb,
    Bgr,
}

impl ColorOrder {
    pub const fn madctl_bit(self) -> u8 {
        match self {
            ColorOrder::Rgb => 0,
            ColorOrder::Bgr => madctl::BGR,
        }
    }
}

/// The four orientations the controllers support.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    Portrait,
    Landscape,
    InvertedPortrait,
    InvertedLandscape,
}

/// Scan-direction bits per rotation index.
///
/// Index 3 sets three bits while 0..=2 set one each. This matches the
/// controllers' verified behaviour; do not derive it from a formula.
pub const ROTATION_TABLE: [u8; 4] = [
    madctl::MX,                             // 0 = portrait
    madctl::MV,                             // 1 = landscape
    madctl::MY,                             // 2 = inverted portrait
    madctl::MX | madctl::MY | madctl::MV,   // 3 = inverted landscape
];

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Portrait,
        Rotation::Landscape,
        Rotation::InvertedPortrait,
        Rotation::InvertedLandscape,
    ];

    /// Any integer maps onto one of the four orientations (index mod 4).
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Rotation::Portrait,
            1 => Rotation::Landscape,
            2 => Rotation::InvertedPortrait,
            _ => Rotation::InvertedLandscape,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Odd rotations are 90° off the panel's native raster order.
    pub const fn swaps_axes(self) -> bool {
        self.index() % 2 == 1
    }

    pub const fn scan_bits(self) -> u8 {
        ROTATION_TABLE[self.index() as usize]
    }
}

impl From<u8> for Rotation {
    fn from(index: u8) -> Self {
        Rotation::from_index(index)
    }
}

/// Derived orientation: what MADCTL holds and how big the panel looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrientationState {
    pub rotation: Rotation,
    pub madctl: u8,
    pub width: u16,
    pub height: u16,
}

impl OrientationState {
    pub const fn new(rotation: Rotation, color_order: ColorOrder, resolution: Resolution) -> Self {
        let (width, height) = if rotation.swaps_axes() {
            (resolution.height, resolution.width)
        } else {
            (resolution.width, resolution.height)
        };
        Self {
            rotation,
            madctl: color_order.madctl_bit() | rotation.scan_bits(),
            width,
            height,
        }
    }
}
