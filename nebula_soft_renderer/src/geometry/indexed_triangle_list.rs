//! Indexed triangle geometry.

use crate::error::{Error, Result};

/// A flat vertex array plus a triangle index array, three indices per
/// triangle.
///
/// Constructed once per scene and logically immutable during rendering:
/// the pipeline only ever reads from it into its own scratch buffers.
#[derive(Debug)]
pub struct IndexedTriangleList<V> {
    vertices: Vec<V>,
    indices: Vec<usize>,
}

impl<V> IndexedTriangleList<V> {
    /// Create a triangle list, validating the index data.
    ///
    /// # Errors
    ///
    /// - `MalformedIndexCount` if the index count is not a multiple of three
    /// - `IndexOutOfBounds` if any index references past the vertex array
    pub fn new(vertices: Vec<V>, indices: Vec<usize>) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(Error::MalformedIndexCount {
                index_count: indices.len(),
            });
        }
        if let Some(&bad) = indices.iter().find(|&&i| i >= vertices.len()) {
            return Err(Error::IndexOutOfBounds {
                index: bad,
                vertex_count: vertices.len(),
            });
        }
        Ok(Self { vertices, indices })
    }

    /// The vertex array.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// The index array, interpreted three-at-a-time as one triangle.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of triangles described by the index array.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
#[path = "indexed_triangle_list_tests.rs"]
mod tests;
