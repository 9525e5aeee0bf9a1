//! Transport between the driver and the controller.
//!
//! The driver only ever needs two primitives: send one command byte, and send
//! a parameter/pixel payload. Anything that can do that (4-wire SPI with a
//! D/C line, a parallel bus, a test recorder) implements [`Transport`].
//!
//! [`SpiTransport`] is the embedded-hal 1.0 implementation for the usual
//! wiring: an `SpiDevice` that owns chip-select and a D/C `OutputPin`.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

/// Command/data primitive consumed by the driver.
///
/// Implementations must not reorder calls: the controller interprets every
/// data payload as parameters of the most recent command.
pub trait Transport {
    type Error: fmt::Debug;

    /// Send a single command byte (D/C low).
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send a parameter or pixel payload (D/C high).
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

// Lets the caller keep ownership of the bus and hand the driver `&mut`.
impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        T::send_command(self, command)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::send_data(self, data)
    }
}

/// Error type that wraps SPI and D/C pin errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceError<SpiE, DcE> {
    Spi(SpiE),
    Dc(DcE),
}

/// 4-wire SPI transport: command bytes with D/C low, payloads with D/C high.
/// CS is handled by the `SpiDevice` implementation, one transaction per call.
pub struct SpiTransport<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiTransport<SPI, DC>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
{
    /// * `spi` - an SPI device with CS control (e.g. `embedded_hal_bus::spi::ExclusiveDevice`)
    /// * `dc` - the data/command select line
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Give the bus and pin back.
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> Transport for SpiTransport<SPI, DC>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
{
    type Error = InterfaceError<SPI::Error, DC::Error>;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Dc)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }
        self.dc.set_high().map_err(InterfaceError::Dc)?;
        self.spi.write(data).map_err(InterfaceError::Spi)
    }
}

/// Pulse the controller's RST line: high, low for 10 ms, high and wait for
/// the controller to come out of reset (120 ms covers every shipped profile).
pub fn hard_reset<RST, D>(rst: &mut RST, delay: &mut D) -> Result<(), RST::Error>
where
    RST: OutputPin,
    D: DelayNs,
{
    rst.set_high()?;
    delay.delay_ms(1);
    rst.set_low()?;
    delay.delay_ms(10);
    rst.set_high()?;
    delay.delay_ms(120);
    Ok(())
}
