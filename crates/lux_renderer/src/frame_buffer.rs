//! Packed RGB output buffer.

/// Row-major buffer of `0x00RRGGBB` pixels.
///
/// The size is fixed for the lifetime of the buffer; render a different
/// resolution into a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Get the pixel at (x, y), if in bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Get the pixel at (x, y) as `[r, g, b]`, if in bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.get(x, y).map(unpack_rgb)
    }

    /// Expand to tightly packed RGB bytes (for saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for &pixel in &self.pixels {
            bytes.extend_from_slice(&unpack_rgb(pixel));
        }
        bytes
    }
}

/// Split `0x00RRGGBB` into `[r, g, b]`.
#[inline]
pub fn unpack_rgb(pixel: u32) -> [u8; 3] {
    [(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.pixels().len(), 12);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_get_bounds() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.pixels_mut()[2 * 4 + 1] = 0x00FF8001;

        assert_eq!(fb.get(1, 2), Some(0x00FF8001));
        assert_eq!(fb.get_rgb(1, 2), Some([255, 128, 1]));
        assert_eq!(fb.get(4, 0), None);
        assert_eq!(fb.get(0, 3), None);
    }

    #[test]
    fn test_to_rgb8() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.pixels_mut()[1] = 0x00102030;

        assert_eq!(fb.to_rgb8(), vec![0, 0, 0, 0x10, 0x20, 0x30]);
    }
}
