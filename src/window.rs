/// Inclusive rectangle of logical pixel coordinates targeted by one write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteWindow {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl WriteWindow {
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Window of `width` x `height` pixels at (`x`, `y`); `None` if empty or
    /// the far corner overflows `u16`.
    pub fn from_origin(x: u16, y: u16, width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let x1 = x.checked_add(width - 1)?;
        let y1 = y.checked_add(height - 1)?;
        Some(Self::new(x, y, x1, y1))
    }

    /// True when the corners are ordered and the far corner is inside
    /// a `width` x `height` area.
    pub const fn fits(&self, width: u16, height: u16) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1 && self.x1 < width && self.y1 < height
    }

    /// Pixel count; only meaningful for an ordered window.
    pub const fn pixel_count(&self) -> usize {
        (self.x1 as usize - self.x0 as usize + 1) * (self.y1 as usize - self.y0 as usize + 1)
    }

    pub const fn width(&self) -> u16 {
        self.x1 - self.x0 + 1
    }

    pub const fn height(&self) -> u16 {
        self.y1 - self.y0 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_rejects_inverted_and_out_of_bounds() {
        assert!(WriteWindow::new(0, 0, 239, 239).fits(240, 240));
        assert!(!WriteWindow::new(5, 0, 4, 0).fits(240, 240));
        assert!(!WriteWindow::new(0, 5, 0, 4).fits(240, 240));
        assert!(!WriteWindow::new(0, 0, 240, 0).fits(240, 240));
        assert!(!WriteWindow::new(0, 0, 0, 240).fits(240, 240));
    }

    #[test]
    fn from_origin() {
        assert_eq!(WriteWindow::from_origin(10, 20, 5, 2), Some(WriteWindow::new(10, 20, 14, 21)));
        assert_eq!(WriteWindow::from_origin(0, 0, 0, 1), None);
        assert_eq!(WriteWindow::from_origin(u16::MAX, 0, 2, 1), None);
        assert_eq!(WriteWindow::new(0, 0, 9, 9).pixel_count(), 100);
    }
}
