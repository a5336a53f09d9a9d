//! Panel geometry.
//!
//! The SSD1306 drives up to 128 × 64 pixels. Smaller glass (128 × 32,
//! 64 × 48, 64 × 32) uses a subset of the controller RAM, horizontally
//! centred within the 128 native columns.

use crate::command::NATIVE_WIDTH;

/// Largest supported frame: 128 × 64 pixels, one bit each.
pub const MAX_BUFFER_LEN: usize = 128 * 64 / 8;

/// Supported panel sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Geometry {
    /// 128 × 64, the common 0.96" module.
    #[default]
    G128x64,
    /// 128 × 32, the 0.91" strip module.
    G128x32,
    /// 64 × 48, e.g. Wemos D1 mini OLED shield.
    G64x48,
    /// 64 × 32.
    G64x32,
    /// Arbitrary size. Width is clamped to 128; height is clamped to 64
    /// and rounded down to a whole number of pages.
    Raw { width: u8, height: u8 },
}

impl Geometry {
    /// Width in pixels.
    pub fn width(&self) -> u8 {
        match *self {
            Geometry::G128x64 | Geometry::G128x32 => 128,
            Geometry::G64x48 | Geometry::G64x32 => 64,
            Geometry::Raw { width, .. } => width.min(NATIVE_WIDTH),
        }
    }

    /// Height in pixels.
    pub fn height(&self) -> u8 {
        match *self {
            Geometry::G128x64 => 64,
            Geometry::G128x32 | Geometry::G64x32 => 32,
            Geometry::G64x48 => 48,
            Geometry::Raw { height, .. } => height.min(64) & !0x07,
        }
    }

    /// Number of 8-pixel-tall pages.
    pub fn pages(&self) -> u8 {
        self.height() / 8
    }

    /// Framebuffer length in bytes: `width * height / 8`.
    pub fn buffer_len(&self) -> usize {
        self.width() as usize * self.pages() as usize
    }

    /// First controller column used by this panel.
    pub fn x_offset(&self) -> u8 {
        (NATIVE_WIDTH - self.width()) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_geometries() {
        assert_eq!((Geometry::G128x64.width(), Geometry::G128x64.height()), (128, 64));
        assert_eq!((Geometry::G128x32.width(), Geometry::G128x32.height()), (128, 32));
        assert_eq!((Geometry::G64x48.width(), Geometry::G64x48.height()), (64, 48));
        assert_eq!((Geometry::G64x32.width(), Geometry::G64x32.height()), (64, 32));
    }

    #[test]
    fn buffer_len_is_width_times_pages() {
        assert_eq!(Geometry::G128x64.buffer_len(), 1024);
        assert_eq!(Geometry::G128x32.buffer_len(), 512);
        assert_eq!(Geometry::G64x48.buffer_len(), 384);
        assert_eq!(Geometry::G64x48.pages(), 6);
        assert_eq!(Geometry::G128x64.buffer_len(), MAX_BUFFER_LEN);
    }

    #[test]
    fn narrow_panels_are_centred() {
        assert_eq!(Geometry::G128x64.x_offset(), 0);
        assert_eq!(Geometry::G64x48.x_offset(), 32);
        assert_eq!(Geometry::Raw { width: 96, height: 16 }.x_offset(), 16);
    }

    #[test]
    fn raw_geometry_is_clamped() {
        let g = Geometry::Raw { width: 200, height: 70 };
        assert_eq!(g.width(), 128);
        assert_eq!(g.height(), 64);

        let g = Geometry::Raw { width: 72, height: 20 };
        assert_eq!(g.height(), 16);
        assert_eq!(g.pages(), 2);
        assert_eq!(g.buffer_len(), 144);
    }

    #[test]
    fn default_is_128x64() {
        assert_eq!(Geometry::default(), Geometry::G128x64);
    }
}
