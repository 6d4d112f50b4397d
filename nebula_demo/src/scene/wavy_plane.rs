//! Tessellated textured plane rippled by the wavy vertex stage.

use glam::{Vec2, Vec3};

use nebula_soft_renderer::nebula::buffer::{DepthBuffer, Framebuffer};
use nebula_soft_renderer::nebula::effect::{
    wavy_texture_effect, DefaultGeometryStage, ModelTransform, TextureFragmentStage, UvVertex,
    WavyVertexStage,
};
use nebula_soft_renderer::nebula::geometry::IndexedTriangleList;
use nebula_soft_renderer::nebula::{Pipeline, Result, Texture};

use crate::input::InputState;
use super::{Scene, Spin};

type WavyPlanePipeline =
    Pipeline<WavyVertexStage, DefaultGeometryStage<UvVertex>, TextureFragmentStage>;

pub struct WavyPlaneScene {
    pipeline: WavyPlanePipeline,
    list: IndexedTriangleList<UvVertex>,
    spin: Spin,
    time: f32,
}

impl WavyPlaneScene {
    const DIVISIONS: usize = 20;

    pub fn new(texture: Texture) -> Result<Self> {
        let divs = Self::DIVISIONS;
        let vertex_count = divs + 1;

        let h = 0.5;
        let step = (2.0 * h) / divs as f32;

        // Unit square in the z = 0 plane, row-major from the top-left,
        // texture coordinates tracking position.
        let mut vertices = Vec::with_capacity(vertex_count * vertex_count);
        for yi in 0..vertex_count {
            for xi in 0..vertex_count {
                let position =
                    Vec3::new(-h + xi as f32 * step, h - yi as f32 * step, 0.0);
                let uv = Vec2::new(xi as f32 * step, yi as f32 * step);
                vertices.push(UvVertex::new(position, uv));
            }
        }

        // Two triangles per grid cell
        let mut indices = Vec::with_capacity(divs * divs * 6);
        for yi in 0..divs {
            for xi in 0..divs {
                let top_left = yi * vertex_count + xi;
                indices.extend_from_slice(&[
                    top_left,
                    top_left + vertex_count,
                    top_left + vertex_count + 1,
                ]);
                indices.extend_from_slice(&[top_left + vertex_count + 1, top_left + 1, top_left]);
            }
        }

        Ok(Self {
            pipeline: Pipeline::new(wavy_texture_effect(texture, true)),
            list: IndexedTriangleList::new(vertices, indices)?,
            spin: Spin::new(),
            time: 0.0,
        })
    }
}

impl Scene for WavyPlaneScene {
    fn name(&self) -> &'static str {
        "wavy-plane"
    }

    fn update(&mut self, dt: f32, input: &InputState) {
        self.spin.advance(dt, input);
        self.time += dt;
        self.pipeline.effect.vertex_stage.set_model(self.spin.model());
        self.pipeline.effect.vertex_stage.set_time(self.time);
    }

    fn draw(&mut self, framebuffer: &mut Framebuffer, depth_buffer: &mut DepthBuffer) {
        self.pipeline.draw(framebuffer, depth_buffer, &self.list);
    }
}
