//! Graphics-layer integration.
//!
//! Two entry points:
//! - [`FlushTarget`], the flush callback a frame-buffer based UI (LVGL,
//!   slint, a hand-rolled dirty-rect renderer) calls with a rendered
//!   rectangle.
//! - `embedded-graphics` `DrawTarget<Rgb565>` on [`Driver`], drawing straight
//!   to the panel without a frame buffer.

use embedded_graphics::pixelcolor::{Rgb565, Rgb666};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::driver::Driver;
use crate::error::Error;
use crate::interface::Transport;
use crate::profile::PixelFormat;
use crate::window::WriteWindow;

// Staging buffer for streamed writes; whole pixels in both formats (2 and 3 bytes).
const STAGE_BYTES: usize = 960;

type Stage = heapless::Vec<u8, STAGE_BYTES>;

/// Flush callback contract: write a rendered rectangle, return once the
/// transfer has been issued. There is no "panel has shown it" acknowledgment.
pub trait FlushTarget {
    type Error;

    fn flush(&mut self, window: WriteWindow, pixels: &[u8]) -> Result<(), Self::Error>;
}

impl<T: Transport> FlushTarget for Driver<T> {
    type Error = Error<T::Error>;

    fn flush(&mut self, window: WriteWindow, pixels: &[u8]) -> Result<(), Self::Error> {
        self.write_region(window, pixels)
    }
}

/// Encode one colour in the interface format; returns the byte count.
pub fn encode_color(format: PixelFormat, color: Rgb565, out: &mut [u8; 3]) -> usize {
    match format {
        PixelFormat::Rgb565 => {
            let be = color.into_storage().to_be_bytes();
            out[0] = be[0];
            out[1] = be[1];
            2
        }
        PixelFormat::Rgb666 => {
            // 6 significant bits, left aligned in each byte
            let c: Rgb666 = color.into();
            out[0] = c.r() << 2;
            out[1] = c.g() << 2;
            out[2] = c.b() << 2;
            3
        }
    }
}

impl<T: Transport> Driver<T> {
    /// Fill `window` with a single colour, streamed through a small stack buffer.
    pub fn fill_region(
        &mut self,
        window: WriteWindow,
        color: Rgb565,
    ) -> Result<(), Error<T::Error>> {
        self.check_window(window)?;

        let mut px = [0u8; 3];
        let n = encode_color(self.config().pixel_format, color, &mut px);

        let mut stage = Stage::new();
        while stage.len() + n <= STAGE_BYTES {
            stage.extend_from_slice(&px[..n]).ok();
        }

        self.start_memory_write(window)?;
        let mut remaining = window.pixel_count() * n;
        while remaining > 0 {
            let take = remaining.min(stage.len());
            self.stream_pixels(&stage[..take])?;
            remaining -= take;
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(self.width() as u32, self.height() as u32))
    }
}

// Visible part of `area` as a write window, if any.
fn to_window(area: &Rectangle) -> Option<WriteWindow> {
    let br = area.bottom_right()?;
    Some(WriteWindow::new(area.top_left.x as u16, area.top_left.y as u16, br.x as u16, br.y as u16))
}

impl<T: Transport> OriginDimensions for Driver<T> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl<T: Transport> DrawTarget for Driver<T> {
    type Color = Rgb565;
    type Error = Error<T::Error>;

    // Simple but slow: one 1x1 window per pixel.
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        let bounds = self.bounds();
        let format = self.config().pixel_format;
        let mut px = [0u8; 3];

        for Pixel(p, color) in pixels {
            if !bounds.contains(p) {
                continue;
            }
            let (x, y) = (p.x as u16, p.y as u16);
            let n = encode_color(format, color, &mut px);
            self.write_region(WriteWindow::new(x, y, x, y), &px[..n])?;
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        let visible = area.intersection(&self.bounds());
        let Some(window) = to_window(&visible) else {
            return Ok(());
        };
        self.check_window(window)?;

        let format = self.config().pixel_format;
        let mut px = [0u8; 3];
        let mut stage = Stage::new();

        // Fast path: whole area on screen, one window and one RAMWR.
        if visible == *area {
            self.start_memory_write(window)?;
            for color in colors.into_iter().take(window.pixel_count()) {
                let n = encode_color(format, color, &mut px);
                if stage.len() + n > STAGE_BYTES {
                    self.stream_pixels(&stage)?;
                    stage.clear();
                }
                stage.extend_from_slice(&px[..n]).ok();
            }
            return self.stream_pixels(&stage);
        }

        // Clipped: the visible span of each row is contiguous, write it as its own window.
        let mut span: Option<(u16, u16)> = None; // (x of first staged pixel, row)
        for (p, color) in area.points().zip(colors) {
            let row = p.y as u16;
            if let Some((x0, y)) = span {
                if y != row {
                    self.flush_span(&mut stage, x0, y, format)?;
                    span = None;
                }
            }
            if !visible.contains(p) {
                continue;
            }
            let n = encode_color(format, color, &mut px);
            if stage.len() + n > STAGE_BYTES {
                if let Some((x0, y)) = span {
                    self.flush_span(&mut stage, x0, y, format)?;
                }
                span = None;
            }
            if span.is_none() {
                span = Some((p.x as u16, row));
            }
            stage.extend_from_slice(&px[..n]).ok();
        }
        if let Some((x0, y)) = span {
            self.flush_span(&mut stage, x0, y, format)?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        match to_window(&area.intersection(&self.bounds())) {
            Some(window) => self.fill_region(window, color),
            None => Ok(()),
        }
    }
}

impl<T: Transport> Driver<T> {
    // Write the staged pixels of one row starting at `x0`, then empty the stage.
    fn flush_span(
        &mut self,
        stage: &mut Stage,
        x0: u16,
        y: u16,
        format: PixelFormat,
    ) -> Result<(), Error<T::Error>> {
        let count = stage.len() / format.bytes_per_pixel();
        if count > 0 {
            let window = WriteWindow::new(x0, y, x0 + count as u16 - 1, y);
            self.write_region(window, stage)?;
        }
        stage.clear();
        Ok(())
    }
}
