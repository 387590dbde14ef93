//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a bounds-checked view into the byte buffer that gets streamed to
//! the display every frame.

use crate::colors::{Color, BLACK};

/// Bytes per pixel: R, G, B and one byte the renderer never writes.
pub const BYTES_PER_PIXEL: usize = 4;

/// A view into a row-major RGBx pixel buffer.
///
/// Wraps a 1D byte slice with width/height metadata to enable safe 2D pixel
/// access. This is a borrowed view, not an owning type. The bytes belong to
/// whoever presents them; the game only draws into them.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a byte slice and dimensions.
    ///
    /// # Panics
    /// Panics (in debug builds) if the slice length doesn't match width * height * 4
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * BYTES_PER_PIXEL,
            "Pixel buffer size doesn't match dimensions"
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Distance in bytes between the starts of two rows.
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.pixels
    }

    /// Zero every byte, including the unused fourth byte of each pixel.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Write r, g, b at (x, y). The fourth byte is untouched.
    ///
    /// Silently ignores coordinates off the window. A write is also dropped
    /// unless at least one byte of the buffer follows the pixel's alpha slot,
    /// so the bottom-right pixel is never written.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        if idx + BYTES_PER_PIXEL < self.pixels.len() {
            self.pixels[idx] = color.r;
            self.pixels[idx + 1] = color.g;
            self.pixels[idx + 2] = color.b;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some(Color::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }

    /// True if the pixel at (x, y) holds anything but black.
    pub fn is_lit(&self, x: i32, y: i32) -> bool {
        self.get_pixel(x, y).is_some_and(|c| c != BLACK)
    }

    /// Fill a `width` x `height` block whose top-left corner is (x, y).
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }
}
