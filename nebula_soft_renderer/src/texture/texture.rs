//! Decoded texture data and texel sampling.
//!
//! The renderer never parses image file formats. A texture is built
//! from bytes an external decoder already produced: row-major,
//! top-to-bottom, the first three bytes of each pixel being R, G, B
//! regardless of how many channels the source had.

use crate::error::{Error, Result};

/// Owns decoded pixel bytes plus their dimensions and channel stride.
///
/// Loaded once at scene construction and lives for the scene's
/// lifetime.
#[derive(Debug)]
pub struct Texture {
    width: u32,
    height: u32,
    channel_count: u32,
    texels: Vec<u8>,
}

impl Texture {
    /// Build a texture from already-decoded bytes.
    ///
    /// # Errors
    ///
    /// `InvalidTextureData` if the buffer is not exactly
    /// `width * height * channel_count` bytes or fewer than three
    /// channels are present.
    pub fn from_decoded_bytes(
        width: u32,
        height: u32,
        channel_count: u32,
        texels: Vec<u8>,
    ) -> Result<Self> {
        let expected = (width * height * channel_count) as usize;
        if channel_count < 3 || texels.len() != expected {
            return Err(Error::InvalidTextureData {
                expected,
                actual: texels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channel_count,
            texels,
        })
    }

    /// Width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per texel in the source data.
    pub fn channel_count(&self) -> u32 {
        self.channel_count
    }

    /// Sample the texture at normalized coordinates.
    ///
    /// With `wrap` false, `u * width` / `v * height` are clamped to the
    /// nearest valid texel. With `wrap` true they wrap via modulo
    /// `dimension - 1`. The `dimension - 1` divisor (rather than
    /// `dimension`) skips the last texel row/column each repeat; it is
    /// observed behavior of the reference renderer and is kept, not
    /// fixed.
    ///
    /// Returns a packed `(R << 16 | G << 8 | B)` color from the first
    /// three channels of the texel.
    pub fn sample(&self, u: f32, v: f32, wrap: bool) -> u32 {
        let w = self.width as f32;
        let h = self.height as f32;

        let (x, y) = if wrap {
            ((u * w) % (w - 1.0), (v * h) % (h - 1.0))
        } else {
            (u * w, v * h)
        };

        let texture_x = (x as i32).clamp(0, self.width as i32 - 1) as u32;
        let texture_y = (y as i32).clamp(0, self.height as i32 - 1) as u32;

        let offset = (self.channel_count * (texture_y * self.width + texture_x)) as usize;
        let red = self.texels[offset] as u32;
        let green = self.texels[offset + 1] as u32;
        let blue = self.texels[offset + 2] as u32;

        red << 16 | green << 8 | blue
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
