//! Texture sources for the textured scenes.
//!
//! The renderer only consumes already-decoded bytes; decoding a file is
//! this module's job, via the `image` crate. When no file is given the
//! demo falls back to a procedural checkerboard.

use std::error::Error;
use std::path::Path;

use nebula_soft_renderer::nebula::{Result, Texture};

/// Decode an image file into an RGB texture.
pub fn load(path: &Path) -> std::result::Result<Texture, Box<dyn Error>> {
    let decoded = image::open(path)?.to_rgb8();
    let (width, height) = decoded.dimensions();
    Ok(Texture::from_decoded_bytes(width, height, 3, decoded.into_raw())?)
}

/// Procedural two-tone checkerboard, `cell` texels per square.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> Result<Texture> {
    let light = [0xE0, 0xA0, 0x30];
    let dark = [0x30, 0x30, 0x40];

    let mut texels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let parity = (x / cell + y / cell) % 2;
            let color = if parity == 0 { light } else { dark };
            texels.extend_from_slice(&color);
        }
    }

    Texture::from_decoded_bytes(width, height, 3, texels)
}

#[cfg(test)]
#[path = "texture_io_tests.rs"]
mod tests;
