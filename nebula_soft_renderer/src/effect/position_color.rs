//! Position-derived color effect.
//!
//! The input shape carries nothing but a position; the vertex stage
//! changes the vertex type, deriving a color from the absolute value of
//! the world-space position. Demonstrates a stage whose output shape
//! differs from its input shape.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

use glam::{Mat4, Vec3};

use crate::geometry::{CopyAttributes, Vertex};
use super::stage::{DefaultGeometryStage, Effect, ModelTransform, VertexStage};
use super::vertex_color::{ColorFragmentStage, ColorVertex};

/// Bare position, no attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionVertex {
    pub position: Vec3,
}

impl PositionVertex {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

impl Add for PositionVertex {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { position: self.position + rhs.position }
    }
}

impl Sub for PositionVertex {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { position: self.position - rhs.position }
    }
}

impl Mul<f32> for PositionVertex {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self { position: self.position * s }
    }
}

impl Div<f32> for PositionVertex {
    type Output = Self;
    fn div(self, s: f32) -> Self {
        Self { position: self.position / s }
    }
}

impl AddAssign for PositionVertex {
    fn add_assign(&mut self, rhs: Self) {
        self.position += rhs.position;
    }
}

impl MulAssign<f32> for PositionVertex {
    fn mul_assign(&mut self, s: f32) {
        self.position *= s;
    }
}

impl Vertex for PositionVertex {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn position_mut(&mut self) -> &mut Vec3 {
        &mut self.position
    }
}

impl CopyAttributes<PositionVertex> for PositionVertex {
    fn copy_attributes_from(&mut self, _src: &PositionVertex) {}
}

/// Transforms the position and fabricates a color from it.
pub struct PositionColorVertexStage {
    model: Mat4,
}

impl PositionColorVertexStage {
    pub fn new() -> Self {
        Self { model: Mat4::IDENTITY }
    }
}

impl Default for PositionColorVertexStage {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexStage for PositionColorVertexStage {
    type In = PositionVertex;
    type Out = ColorVertex;

    fn run(&self, vertex: &PositionVertex) -> ColorVertex {
        let world = self.model.transform_point3(vertex.position);
        ColorVertex::new(world, world.abs())
    }
}

impl ModelTransform for PositionColorVertexStage {
    fn set_model(&mut self, model: Mat4) {
        self.model = model;
    }
}

/// The complete position-derived color effect.
pub type PositionColorEffect =
    Effect<PositionColorVertexStage, DefaultGeometryStage<ColorVertex>, ColorFragmentStage>;

/// Assemble a position-derived color effect with default stage state.
pub fn position_color_effect() -> PositionColorEffect {
    Effect::new(
        PositionColorVertexStage::new(),
        DefaultGeometryStage::new(),
        ColorFragmentStage,
    )
}

#[cfg(test)]
#[path = "position_color_tests.rs"]
mod tests;
