//! Cube colored by the absolute value of each world-space position.
//!
//! The vertex stage derives the color; the input vertices carry nothing
//! but position.

use glam::Vec3;

use nebula_soft_renderer::nebula::buffer::{DepthBuffer, Framebuffer};
use nebula_soft_renderer::nebula::effect::{
    position_color_effect, ColorFragmentStage, ColorVertex, DefaultGeometryStage,
    ModelTransform, PositionColorVertexStage, PositionVertex,
};
use nebula_soft_renderer::nebula::geometry::IndexedTriangleList;
use nebula_soft_renderer::nebula::{Pipeline, Result};

use crate::input::InputState;
use super::{Scene, Spin};

type PositionColorCubePipeline = Pipeline<
    PositionColorVertexStage,
    DefaultGeometryStage<ColorVertex>,
    ColorFragmentStage,
>;

pub struct PositionColorCubeScene {
    pipeline: PositionColorCubePipeline,
    list: IndexedTriangleList<PositionVertex>,
    spin: Spin,
}

impl PositionColorCubeScene {
    pub fn new() -> Result<Self> {
        let h = 0.5;

        let vertices = vec![
            PositionVertex::new(Vec3::new(-h, -h, -h)),
            PositionVertex::new(Vec3::new(h, -h, -h)),
            PositionVertex::new(Vec3::new(-h, h, -h)),
            PositionVertex::new(Vec3::new(h, h, -h)),
            PositionVertex::new(Vec3::new(-h, -h, h)),
            PositionVertex::new(Vec3::new(h, -h, h)),
            PositionVertex::new(Vec3::new(-h, h, h)),
            PositionVertex::new(Vec3::new(h, h, h)),
        ];

        let indices = vec![
            0, 2, 1, 2, 3, 1, // far
            1, 3, 5, 3, 7, 5, // right
            2, 6, 3, 3, 6, 7, // top
            4, 5, 7, 4, 7, 6, // near
            0, 4, 2, 2, 4, 6, // left
            0, 1, 4, 1, 5, 4, // bottom
        ];

        Ok(Self {
            pipeline: Pipeline::new(position_color_effect()),
            list: IndexedTriangleList::new(vertices, indices)?,
            spin: Spin::new(),
        })
    }
}

impl Scene for PositionColorCubeScene {
    fn name(&self) -> &'static str {
        "position-color-cube"
    }

    fn update(&mut self, dt: f32, input: &InputState) {
        self.spin.advance(dt, input);
        self.pipeline.effect.vertex_stage.set_model(self.spin.model());
    }

    fn draw(&mut self, framebuffer: &mut Framebuffer, depth_buffer: &mut DepthBuffer) {
        self.pipeline.draw(framebuffer, depth_buffer, &self.list);
    }
}
