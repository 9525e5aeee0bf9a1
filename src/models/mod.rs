//! Shipped controller profiles.
//!
//! Adding a chip means adding one table here; the driver does not change.

mod gc9a01;
mod ili9341;
mod st7789;

pub use gc9a01::GC9A01;
pub use ili9341::ILI9341;
pub use st7789::ST7789;

use crate::profile::ControllerProfile;

pub const ALL: [ControllerProfile; 3] = [GC9A01, ILI9341, ST7789];
