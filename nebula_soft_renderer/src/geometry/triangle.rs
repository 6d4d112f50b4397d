//! The triangle assembled by the geometry stage.

/// Three vertices of one post-geometry-stage shape.
///
/// Ephemeral: produced and consumed within one draw call per face.
#[derive(Debug, Clone, Copy)]
pub struct Triangle<V> {
    pub v0: V,
    pub v1: V,
    pub v2: V,
}

impl<V> Triangle<V> {
    pub fn new(v0: V, v1: V, v2: V) -> Self {
        Self { v0, v1, v2 }
    }
}
