//! Per-vertex color effect.
//!
//! Vertex shape: position plus an RGB color in unit range. The color is
//! interpolated across the triangle face like any other attribute and
//! packed by the fragment stage.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

use glam::Vec3;

use crate::geometry::{CopyAttributes, Vertex};
use super::stage::{
    pack_unit_rgb, DefaultGeometryStage, DefaultVertexStage, Effect, FragmentStage,
};

/// Position + unit-range RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl ColorVertex {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

impl Add for ColorVertex {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            position: self.position + rhs.position,
            color: self.color + rhs.color,
        }
    }
}

impl Sub for ColorVertex {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            position: self.position - rhs.position,
            color: self.color - rhs.color,
        }
    }
}

impl Mul<f32> for ColorVertex {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self {
            position: self.position * s,
            color: self.color * s,
        }
    }
}

impl Div<f32> for ColorVertex {
    type Output = Self;
    fn div(self, s: f32) -> Self {
        Self {
            position: self.position / s,
            color: self.color / s,
        }
    }
}

impl AddAssign for ColorVertex {
    fn add_assign(&mut self, rhs: Self) {
        self.position += rhs.position;
        self.color += rhs.color;
    }
}

impl MulAssign<f32> for ColorVertex {
    fn mul_assign(&mut self, s: f32) {
        self.position *= s;
        self.color *= s;
    }
}

impl Vertex for ColorVertex {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn position_mut(&mut self) -> &mut Vec3 {
        &mut self.position
    }
}

impl CopyAttributes<ColorVertex> for ColorVertex {
    fn copy_attributes_from(&mut self, src: &ColorVertex) {
        self.color = src.color;
    }
}

/// Packs the interpolated vertex color.
pub struct ColorFragmentStage;

impl FragmentStage for ColorFragmentStage {
    type In = ColorVertex;

    fn run(&self, input: &ColorVertex) -> u32 {
        pack_unit_rgb(input.color)
    }
}

/// The complete per-vertex color effect.
pub type VertexColorEffect =
    Effect<DefaultVertexStage<ColorVertex>, DefaultGeometryStage<ColorVertex>, ColorFragmentStage>;

/// Assemble a per-vertex color effect with default stage state.
pub fn vertex_color_effect() -> VertexColorEffect {
    Effect::new(
        DefaultVertexStage::new(),
        DefaultGeometryStage::new(),
        ColorFragmentStage,
    )
}

#[cfg(test)]
#[path = "vertex_color_tests.rs"]
mod tests;
