//! Textured effect.
//!
//! Vertex shape: position plus texture coordinates. The fragment stage
//! holds the bound texture and samples it by the interpolated (and by
//! then perspective-corrected) coordinates.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

use glam::{Vec2, Vec3};

use crate::error::{Error, Result};
use crate::geometry::{CopyAttributes, Vertex};
use crate::texture::Texture;
use super::stage::{DefaultGeometryStage, DefaultVertexStage, Effect, FragmentStage};

/// Position + texture coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UvVertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl UvVertex {
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self { position, uv }
    }
}

impl Add for UvVertex {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            position: self.position + rhs.position,
            uv: self.uv + rhs.uv,
        }
    }
}

impl Sub for UvVertex {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            position: self.position - rhs.position,
            uv: self.uv - rhs.uv,
        }
    }
}

impl Mul<f32> for UvVertex {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self {
            position: self.position * s,
            uv: self.uv * s,
        }
    }
}

impl Div<f32> for UvVertex {
    type Output = Self;
    fn div(self, s: f32) -> Self {
        Self {
            position: self.position / s,
            uv: self.uv / s,
        }
    }
}

impl AddAssign for UvVertex {
    fn add_assign(&mut self, rhs: Self) {
        self.position += rhs.position;
        self.uv += rhs.uv;
    }
}

impl MulAssign<f32> for UvVertex {
    fn mul_assign(&mut self, s: f32) {
        self.position *= s;
        self.uv *= s;
    }
}

impl Vertex for UvVertex {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn position_mut(&mut self) -> &mut Vec3 {
        &mut self.position
    }
}

impl CopyAttributes<UvVertex> for UvVertex {
    fn copy_attributes_from(&mut self, src: &UvVertex) {
        self.uv = src.uv;
    }
}

/// Samples a bound texture by the interpolated texture coordinates.
pub struct TextureFragmentStage {
    texture: Option<Texture>,
    wrap: bool,
}

impl TextureFragmentStage {
    /// Create the stage with no texture bound yet.
    pub fn new(wrap: bool) -> Self {
        Self { texture: None, wrap }
    }

    /// Bind the texture this stage samples.
    pub fn bind_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }

    /// Validate that a texture is bound before the first draw.
    pub fn ensure_bound(&self) -> Result<()> {
        if self.texture.is_none() {
            return Err(Error::TextureNotBound);
        }
        Ok(())
    }
}

impl FragmentStage for TextureFragmentStage {
    type In = UvVertex;

    /// # Panics
    ///
    /// Sampling with no texture bound is a fatal precondition
    /// violation; call `ensure_bound` at scene setup.
    fn run(&self, input: &UvVertex) -> u32 {
        let texture = self
            .texture
            .as_ref()
            .expect("texture fragment stage invoked with no texture bound");
        texture.sample(input.uv.x, input.uv.y, self.wrap)
    }
}

/// The complete textured effect.
pub type TextureEffect =
    Effect<DefaultVertexStage<UvVertex>, DefaultGeometryStage<UvVertex>, TextureFragmentStage>;

/// Assemble a textured effect around an already-decoded texture.
pub fn texture_effect(texture: Texture, wrap: bool) -> TextureEffect {
    let mut fragment_stage = TextureFragmentStage::new(wrap);
    fragment_stage.bind_texture(texture);
    Effect::new(
        DefaultVertexStage::new(),
        DefaultGeometryStage::new(),
        fragment_stage,
    )
}

#[cfg(test)]
#[path = "texture_effect_tests.rs"]
mod tests;
