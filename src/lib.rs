//! Table-driven driver for SPI TFT controllers of the ILI9xxx / ST77xx /
//! GC9A01 family.
//!
//! A chip is described by a [`ControllerProfile`]: its init sequence as
//! plain `(command, parameters, delay)` data, the panel sizes it supports and
//! its colour order. One generic [`Driver`] plays that sequence over a
//! [`Transport`], sets orientation (MADCTL) and then accepts windowed pixel
//! writes (CASET / RASET / RAMWR).
//!
//! ```
//! # use ili9xxx_spi::{Transport, WriteWindow};
//! # struct Bus;
//! # impl Transport for Bus {
//! #     type Error = ();
//! #     fn send_command(&mut self, _: u8) -> Result<(), ()> { Ok(()) }
//! #     fn send_data(&mut self, _: &[u8]) -> Result<(), ()> { Ok(()) }
//! # }
//! # struct Delay;
//! # impl embedded_hal::delay::DelayNs for Delay { fn delay_ns(&mut self, _: u32) {} }
//! use ili9xxx_spi::{config::Builder, models};
//!
//! let mut bus = Bus;
//! let mut display = Builder::new(models::GC9A01).into_driver(&mut bus);
//! display.initialize(&mut Delay).unwrap();
//!
//! let pixels = [0u8; 10 * 10 * 2];
//! display.write_region(WriteWindow::new(0, 0, 9, 9), &pixels).unwrap();
//! ```
//!
//! The driver is synchronous and does no locking. Callers sharing the SPI
//! bus must serialize whole driver calls (e.g. with
//! `embedded_hal_bus::spi::ExclusiveDevice` or a mutex around the bus).

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod graphics;
pub mod interface;
pub mod models;
pub mod orientation;
pub mod profile;
pub mod sequence;
pub mod window;

#[cfg(test)]
mod mock;

pub use config::{Builder, DriverConfig};
pub use driver::Driver;
pub use error::Error;
pub use graphics::FlushTarget;
pub use interface::{hard_reset, InterfaceError, SpiTransport, Transport};
pub use orientation::{ColorOrder, OrientationState, Rotation};
pub use profile::{ControllerProfile, Offset, PixelFormat, Resolution, WindowOffsets};
pub use sequence::{run_sequence, RegisterStep};
pub use window::WriteWindow;
