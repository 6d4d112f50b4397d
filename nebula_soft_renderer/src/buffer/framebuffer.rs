//! Destination pixel memory.

/// Owns a pixel buffer of `width * height` packed 32-bit colors.
///
/// Colors are packed `0x00RRGGBB`, row-major, top-to-bottom, matching
/// what the fragment stages produce and what the presentation layer
/// (the demo's softbuffer surface) consumes directly.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Create a framebuffer sized to the display resolution, cleared to black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    // ===== GETTERS =====

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The full pixel buffer, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The pixel memory as raw bytes (`width * height * 4`).
    ///
    /// This is the external presentation contract: platform blitting
    /// code that wants bytes instead of packed u32s reads through here.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Read one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize]
    }

    // ===== WRITES =====

    /// Write one packed color.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer. Callers are expected to
    /// stay in bounds; the pipeline does not clip against the screen.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: u32) {
        assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Fill every pixel with one color. Called once per frame before drawing.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }
}

#[cfg(test)]
#[path = "framebuffer_tests.rs"]
mod tests;
