//! Texture storage and sampling.

mod texture;

pub use texture::Texture;
