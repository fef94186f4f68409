use crate::error::RenderError;
use crate::palette::Rgb;

/// Destination for the render pass: receives one colored pixel at a time.
///
/// Coordinates are screen coordinates with `(0, 0)` at the top-left.
pub trait PixelSink {
    fn put_pixel(&mut self, x: u32, y: u32, color: Rgb);
}

/// An RGBA pixel buffer representing a rendered frame.
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, 4 bytes per pixel, row-major, top row first.
    pub pixels: Vec<u8>,
}

impl RenderBuffer {
    /// Create a new buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        let pixel_count = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n > 0 && n.checked_mul(4).is_some())
            .ok_or(RenderError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            pixels: [0, 0, 0, 255].repeat(pixel_count),
        })
    }

    /// Reallocate for a new size if needed. Contents are undefined until
    /// the next full render.
    pub fn resize(&mut self, width: u32, height: u32) -> crate::Result<()> {
        if width != self.width || height != self.height {
            *self = Self::new(width, height)?;
        }
        Ok(())
    }

    /// RGBA bytes of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }
}

impl PixelSink for RenderBuffer {
    #[inline]
    fn put_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_rgba8());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black_opaque() {
        let buf = RenderBuffer::new(4, 4).unwrap();
        assert_eq!(buf.pixels.len(), 4 * 4 * 4);
        for chunk in buf.pixels.chunks_exact(4) {
            assert_eq!(chunk, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(RenderBuffer::new(0, 10).is_err());
        assert!(RenderBuffer::new(10, 0).is_err());
    }

    #[test]
    fn size_overflowing_usize_is_rejected() {
        // 2³² - 1 squared, times 4 bytes, does not fit in 64 bits.
        assert!(matches!(
            RenderBuffer::new(u32::MAX, u32::MAX),
            Err(RenderError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn put_pixel_writes_one_pixel() {
        let mut buf = RenderBuffer::new(8, 8).unwrap();
        buf.put_pixel(2, 1, Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(buf.pixel(2, 1), [255, 0, 0, 255]);
        assert_eq!(buf.pixel(1, 2), [0, 0, 0, 255]);
        assert_eq!(buf.pixel(0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn out_of_range_pixels_are_dropped() {
        let mut buf = RenderBuffer::new(2, 2).unwrap();
        buf.put_pixel(2, 0, Rgb::new(1.0, 1.0, 1.0));
        buf.put_pixel(0, 2, Rgb::new(1.0, 1.0, 1.0));
        assert!(buf.pixels.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn resize_reallocates() {
        let mut buf = RenderBuffer::new(2, 2).unwrap();
        buf.resize(3, 5).unwrap();
        assert_eq!((buf.width, buf.height), (3, 5));
        assert_eq!(buf.pixels.len(), 3 * 5 * 4);
        assert!(buf.resize(0, 5).is_err());
    }
}
