//! Inverse-depth buffer for occlusion.

/// Owns `width * height` 32-bit floats, one inverse-depth value per pixel.
///
/// The pipeline stores `1 / rcp_z` (the recovered view-space depth) per
/// covered pixel. A pixel may only be overwritten by a fragment whose
/// depth is strictly closer than the stored value.
pub struct DepthBuffer {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl DepthBuffer {
    /// Create a depth buffer sized to the display resolution, cleared to +infinity.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![f32::INFINITY; (width * height) as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every cell to +infinity. Called once per frame before drawing.
    pub fn clear(&mut self) {
        self.values.fill(f32::INFINITY);
    }

    /// Combined occlusion test and store.
    ///
    /// Returns `true` and stores `z` if `z` is strictly less than the
    /// currently stored value at `(x, y)`; otherwise returns `false` and
    /// leaves the buffer unchanged. The caller must never separate the
    /// color write from this test.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer.
    pub fn test_and_set(&mut self, x: u32, y: u32, z: f32) -> bool {
        assert!(x < self.width && y < self.height);
        let cell = &mut self.values[(y * self.width + x) as usize];
        if z < *cell {
            *cell = z;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "depth_buffer_tests.rs"]
mod tests;
