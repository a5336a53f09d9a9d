//! Page-addressed monochrome framebuffer.
//!
//! [`PageBuffer`] stores pixels in the SSD1306 RAM layout so it can be
//! passed straight to [`Ssd1306I2c::flush()`](crate::Ssd1306I2c::flush).
//! It implements [`DrawTarget`] so any `embedded-graphics` primitive, font
//! or image can be drawn into it.

use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

use crate::geometry::{Geometry, MAX_BUFFER_LEN};

/// Fixed-capacity framebuffer for any supported [`Geometry`].
///
/// Byte `x + (y / 8) * width` holds column `x` of page `y / 8`; bit
/// `y % 8` is the pixel at row `y`.
#[derive(Clone, PartialEq, Eq)]
pub struct PageBuffer {
    geometry: Geometry,
    bytes: [u8; MAX_BUFFER_LEN],
}

impl PageBuffer {
    /// All-off buffer sized for `geometry`.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            bytes: [0; MAX_BUFFER_LEN],
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The frame, exactly `geometry.buffer_len()` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.geometry.buffer_len()]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.geometry.buffer_len();
        &mut self.bytes[..len]
    }

    /// Switch every pixel off. No I2C traffic.
    pub fn clear_buffer(&mut self) {
        self.bytes.fill(0);
    }

    /// Set one pixel. Coordinates outside the panel are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if let Some((index, mask)) = self.locate(x, y) {
            if on {
                self.bytes[index] |= mask;
            } else {
                self.bytes[index] &= !mask;
            }
        }
    }

    /// Read one pixel. Coordinates outside the panel read as off.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        self.locate(x, y)
            .map(|(index, mask)| self.bytes[index] & mask != 0)
            .unwrap_or(false)
    }

    fn locate(&self, x: u32, y: u32) -> Option<(usize, u8)> {
        let width = self.geometry.width() as u32;
        if x >= width || y >= self.geometry.height() as u32 {
            return None;
        }
        let index = (x + (y / 8) * width) as usize;
        Some((index, 1 << (y % 8)))
    }
}

impl OriginDimensions for PageBuffer {
    fn size(&self) -> Size {
        Size::new(self.geometry.width() as u32, self.geometry.height() as u32)
    }
}

impl DrawTarget for PageBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as u32, point.y as u32, color.is_on());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        self.as_bytes_mut().fill(fill);
        Ok(())
    }
}
