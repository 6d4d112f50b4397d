//! Time-varying displacement effect.
//!
//! A textured effect whose vertex stage adds a sinusoidal y offset
//! driven by elapsed time, producing a scrolling wave across the
//! geometry.

use glam::Mat4;

use crate::geometry::{CopyAttributes, Vertex};
use super::stage::{DefaultGeometryStage, Effect, ModelTransform, VertexStage};
use super::texture_effect::{TextureFragmentStage, UvVertex};

/// Model transform plus a sinusoidal world-space y displacement.
///
/// `y += amplitude * sin(time * scroll_frequency + x * wave_frequency)`
pub struct WavyVertexStage {
    model: Mat4,
    time: f32,
    pub wave_frequency: f32,
    pub scroll_frequency: f32,
    pub amplitude: f32,
}

impl WavyVertexStage {
    pub fn new() -> Self {
        Self {
            model: Mat4::IDENTITY,
            time: 0.0,
            wave_frequency: 10.0,
            scroll_frequency: 5.0,
            amplitude: 0.05,
        }
    }

    /// Elapsed time pushed in by the caller once per frame.
    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }
}

impl Default for WavyVertexStage {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexStage for WavyVertexStage {
    type In = UvVertex;
    type Out = UvVertex;

    fn run(&self, vertex: &UvVertex) -> UvVertex {
        let mut out = UvVertex::default();
        let world = self.model.transform_point3(vertex.position());
        *out.position_mut() = world;
        out.position.y +=
            self.amplitude * (self.time * self.scroll_frequency + world.x * self.wave_frequency).sin();
        out.copy_attributes_from(vertex);
        out
    }
}

impl ModelTransform for WavyVertexStage {
    fn set_model(&mut self, model: Mat4) {
        self.model = model;
    }
}

/// The complete wavy textured effect.
pub type WavyTextureEffect =
    Effect<WavyVertexStage, DefaultGeometryStage<UvVertex>, TextureFragmentStage>;

/// Assemble a wavy textured effect around an already-decoded texture.
pub fn wavy_texture_effect(texture: crate::texture::Texture, wrap: bool) -> WavyTextureEffect {
    let mut fragment_stage = TextureFragmentStage::new(wrap);
    fragment_stage.bind_texture(texture);
    Effect::new(
        WavyVertexStage::new(),
        DefaultGeometryStage::new(),
        fragment_stage,
    )
}

#[cfg(test)]
#[path = "wavy_tests.rs"]
mod tests;
