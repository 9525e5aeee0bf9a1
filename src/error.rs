use core::fmt;

use crate::profile::{PixelFormat, Resolution};
use crate::window::WriteWindow;

/// Driver error; `E` is the transport's error type, carried unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Configured resolution is not one the profile supports. No I/O was done.
    UnsupportedResolution(Resolution),
    /// Configured pixel format is not one the profile supports. No I/O was done.
    UnsupportedPixelFormat(PixelFormat),
    /// Init step `step` (zero-based) failed; the controller state is undefined
    /// and only a full `initialize` from scratch recovers it.
    InitializationFailed { step: usize, command: u8, source: E },
    /// Pixel writes are refused until `initialize` has completed.
    NotInitialized,
    /// Window is inverted or outside the current logical bounds. No I/O was done.
    InvalidWindow(WriteWindow),
    /// Pixel buffer length does not match the window. No I/O was done.
    BufferSizeMismatch { expected: usize, actual: usize },
    /// A register or memory write failed outside initialization.
    Transport { command: u8, source: E },
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedResolution(r) => {
                write!(f, "unsupported resolution {}x{}", r.width, r.height)
            }
            Error::UnsupportedPixelFormat(p) => {
                write!(f, "unsupported pixel format ({} bpp)", p.bits_per_pixel())
            }
            Error::InitializationFailed { step, command, source } => {
                write!(f, "initialization failed at step {step} (cmd {command:#04x}): {source:?}")
            }
            Error::NotInitialized => f.write_str("controller not initialized"),
            Error::InvalidWindow(w) => {
                write!(f, "invalid window ({},{})-({},{})", w.x0, w.y0, w.x1, w.y1)
            }
            Error::BufferSizeMismatch { expected, actual } => {
                write!(f, "pixel buffer is {actual} bytes, window needs {expected}")
            }
            Error::Transport { command, source } => {
                write!(f, "transport error on cmd {command:#04x}: {source:?}")
            }
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
