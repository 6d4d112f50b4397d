//! Per-face color effect.
//!
//! Vertex shape: position plus an already-packed color. All three
//! vertices of a face carry the same color, so the algebra treats the
//! color as pass-through rather than interpolating it component-wise -
//! interpolating a packed u32 as a number would shear across channel
//! boundaries.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

use glam::Vec3;

use crate::geometry::{CopyAttributes, Vertex};
use super::stage::{DefaultGeometryStage, DefaultVertexStage, Effect, FragmentStage};

/// Position + packed `0x00RRGGBB` face color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FaceVertex {
    pub position: Vec3,
    pub color: u32,
}

impl FaceVertex {
    pub fn new(position: Vec3, color: u32) -> Self {
        Self { position, color }
    }
}

// The packed color rides along unchanged through the algebra; only the
// position participates in interpolation arithmetic.

impl Add for FaceVertex {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            position: self.position + rhs.position,
            color: self.color,
        }
    }
}

impl Sub for FaceVertex {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            position: self.position - rhs.position,
            color: self.color,
        }
    }
}

impl Mul<f32> for FaceVertex {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self {
            position: self.position * s,
            color: self.color,
        }
    }
}

impl Div<f32> for FaceVertex {
    type Output = Self;
    fn div(self, s: f32) -> Self {
        Self {
            position: self.position / s,
            color: self.color,
        }
    }
}

impl AddAssign for FaceVertex {
    fn add_assign(&mut self, rhs: Self) {
        self.position += rhs.position;
    }
}

impl MulAssign<f32> for FaceVertex {
    fn mul_assign(&mut self, s: f32) {
        self.position *= s;
    }
}

impl Vertex for FaceVertex {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn position_mut(&mut self) -> &mut Vec3 {
        &mut self.position
    }
}

impl CopyAttributes<FaceVertex> for FaceVertex {
    fn copy_attributes_from(&mut self, src: &FaceVertex) {
        self.color = src.color;
    }
}

/// Emits the face color carried by the interpolated vertex.
pub struct FaceColorFragmentStage;

impl FragmentStage for FaceColorFragmentStage {
    type In = FaceVertex;

    fn run(&self, input: &FaceVertex) -> u32 {
        input.color
    }
}

/// The complete per-face color effect.
pub type FaceColorEffect =
    Effect<DefaultVertexStage<FaceVertex>, DefaultGeometryStage<FaceVertex>, FaceColorFragmentStage>;

/// Assemble a per-face color effect with default stage state.
pub fn face_color_effect() -> FaceColorEffect {
    Effect::new(
        DefaultVertexStage::new(),
        DefaultGeometryStage::new(),
        FaceColorFragmentStage,
    )
}

#[cfg(test)]
#[path = "face_color_tests.rs"]
mod tests;
