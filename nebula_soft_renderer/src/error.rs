//! Error types for the Nebula soft renderer
//!
//! The renderer has a narrow failure surface: every error is a
//! precondition violation detected while assembling scene data (bad
//! indices, unbound or malformed resources). Zero-area and off-screen
//! triangles are not errors - the scan-range computations turn them
//! into silent no-ops.

use std::fmt;

/// Result type for Nebula renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nebula renderer errors - all precondition violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A triangle index references a vertex past the end of the vertex array
    IndexOutOfBounds { index: usize, vertex_count: usize },

    /// The index buffer length is not a multiple of three
    MalformedIndexCount { index_count: usize },

    /// A texture-sampling fragment stage was used with no texture bound
    TextureNotBound,

    /// Texture byte buffer does not match width * height * channels
    InvalidTextureData { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfBounds { index, vertex_count } => {
                write!(f, "Index out of bounds: {} (vertex count {})", index, vertex_count)
            }
            Error::MalformedIndexCount { index_count } => {
                write!(f, "Malformed index buffer: {} indices is not a multiple of 3", index_count)
            }
            Error::TextureNotBound => write!(f, "No texture bound to texture-sampling stage"),
            Error::InvalidTextureData { expected, actual } => {
                write!(f, "Invalid texture data: expected {} bytes, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
