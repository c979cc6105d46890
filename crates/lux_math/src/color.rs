//! Linear RGB color helpers.

use crate::{Interval, Vec3};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Extension trait with the tone/quantization steps of the pixel pipeline.
pub trait ColorExt {
    /// Scale all channels down by the largest channel if any channel exceeds 1.
    ///
    /// Channel ratios are preserved: `c / max(c.r, c.g, c.b, 1)`.
    fn max_to_one(self) -> Self;

    /// Quantize to 8 bits per channel, truncating like a float-to-byte cast.
    fn to_rgb8(self) -> [u8; 3];

    /// Quantize and pack as `0x00RRGGBB`.
    fn to_packed_rgb(self) -> u32;
}

impl ColorExt for Color {
    #[inline]
    fn max_to_one(self) -> Self {
        let max = self.max_element();
        if max > 1.0 {
            self / max
        } else {
            self
        }
    }

    #[inline]
    fn to_rgb8(self) -> [u8; 3] {
        [
            (Interval::UNIT.clamp(self.x) * 255.0) as u8,
            (Interval::UNIT.clamp(self.y) * 255.0) as u8,
            (Interval::UNIT.clamp(self.z) * 255.0) as u8,
        ]
    }

    #[inline]
    fn to_packed_rgb(self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }
}

/// Named colors.
pub mod colors {
    use super::Color;

    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_to_one_preserves_ratios() {
        let c = Color::new(4.0, 2.0, 1.0).max_to_one();
        assert_eq!(c, Color::new(1.0, 0.5, 0.25));
    }

    #[test]
    fn test_max_to_one_leaves_in_range_colors() {
        let c = Color::new(0.2, 0.9, 1.0);
        assert_eq!(c.max_to_one(), c);
    }

    #[test]
    fn test_to_rgb8_truncates_and_clamps() {
        assert_eq!(colors::WHITE.to_rgb8(), [255, 255, 255]);
        assert_eq!(Color::new(0.5, -1.0, 2.0).to_rgb8(), [127, 0, 255]);
    }

    #[test]
    fn test_to_packed_rgb() {
        assert_eq!(colors::RED.to_packed_rgb(), 0x00FF_0000);
        assert_eq!(colors::GREEN.to_packed_rgb(), 0x0000_FF00);
        assert_eq!(colors::BLUE.to_packed_rgb(), 0x0000_00FF);
        assert_eq!(colors::BLACK.to_packed_rgb(), 0);
    }
}
