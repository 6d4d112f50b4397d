//! The vertex algebra contract.
//!
//! A vertex is a position plus zero or more interpolable attributes
//! (color, texture coordinates, ...). The pipeline interpolates whole
//! vertices: edge stepping, scanline stepping, the split vertex of a
//! general triangle, and the perspective pre-divide are all expressed
//! through the five operations below, component-wise over every
//! attribute at once.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

use glam::Vec3;

/// The interpolation algebra: addition, subtraction, scalar multiply,
/// scalar divide, in-place accumulate and in-place scale.
///
/// These are the only operations the pipeline calls when interpolating.
/// Implement the six operator traits on a vertex shape and the blanket
/// impl picks it up; there is nothing else to write.
pub trait Interpolable:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
    + AddAssign
    + MulAssign<f32>
{
}

impl<T> Interpolable for T where
    T: Copy
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<f32, Output = T>
        + Div<f32, Output = T>
        + AddAssign
        + MulAssign<f32>
{
}

/// A vertex shape the pipeline can sort, cull, and project.
///
/// The position starts in object space, is overwritten in place with
/// the world-space position by the vertex stage, and again with the
/// screen-space position (x, y remapped, `rcp_z` stored in the z slot)
/// during projection.
pub trait Vertex: Interpolable {
    /// Current position of this vertex.
    fn position(&self) -> Vec3;

    /// Mutable access for in-place transformation.
    fn position_mut(&mut self) -> &mut Vec3;
}

/// Copy every attribute except position from a vertex of shape `Src`.
///
/// Used when a stage produces a vertex of a different (or freshly
/// constructed) shape but keeps the source payload: the default vertex
/// stage transforms the position and carries everything else through
/// this.
pub trait CopyAttributes<Src> {
    fn copy_attributes_from(&mut self, src: &Src);
}

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;
