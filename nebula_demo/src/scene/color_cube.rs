//! Cube with one interpolated color per corner.

use glam::Vec3;

use nebula_soft_renderer::nebula::buffer::{DepthBuffer, Framebuffer};
use nebula_soft_renderer::nebula::effect::{
    vertex_color_effect, ColorFragmentStage, ColorVertex, DefaultGeometryStage,
    DefaultVertexStage, ModelTransform,
};
use nebula_soft_renderer::nebula::geometry::IndexedTriangleList;
use nebula_soft_renderer::nebula::{Pipeline, Result};

use crate::input::InputState;
use super::{Scene, Spin};

type ColorCubePipeline = Pipeline<
    DefaultVertexStage<ColorVertex>,
    DefaultGeometryStage<ColorVertex>,
    ColorFragmentStage,
>;

pub struct ColorCubeScene {
    pipeline: ColorCubePipeline,
    list: IndexedTriangleList<ColorVertex>,
    spin: Spin,
}

impl ColorCubeScene {
    pub fn new() -> Result<Self> {
        let h = 0.5;

        // One corner per vertex, colors chosen so every axis flips one
        // color channel. Faces wound so all normals point outward.
        let vertices = vec![
            ColorVertex::new(Vec3::new(-h, -h, -h), Vec3::new(0.0, 0.0, 0.0)),
            ColorVertex::new(Vec3::new(h, -h, -h), Vec3::new(1.0, 0.0, 0.0)),
            ColorVertex::new(Vec3::new(h, -h, h), Vec3::new(1.0, 0.0, 1.0)),
            ColorVertex::new(Vec3::new(-h, -h, h), Vec3::new(0.0, 0.0, 1.0)),
            ColorVertex::new(Vec3::new(-h, h, h), Vec3::new(0.0, 1.0, 1.0)),
            ColorVertex::new(Vec3::new(-h, h, -h), Vec3::new(0.0, 1.0, 0.0)),
            ColorVertex::new(Vec3::new(h, h, -h), Vec3::new(1.0, 1.0, 0.0)),
            ColorVertex::new(Vec3::new(h, h, h), Vec3::new(1.0, 1.0, 1.0)),
        ];

        let indices = vec![
            3, 5, 0, 3, 4, 5, // left
            2, 4, 3, 2, 7, 4, // near
            1, 7, 2, 1, 6, 7, // right
            1, 5, 6, 1, 0, 5, // far
            7, 5, 4, 7, 6, 5, // top
            3, 0, 2, 0, 1, 2, // bottom
        ];

        Ok(Self {
            pipeline: Pipeline::new(vertex_color_effect()),
            list: IndexedTriangleList::new(vertices, indices)?,
            spin: Spin::new(),
        })
    }
}

impl Scene for ColorCubeScene {
    fn name(&self) -> &'static str {
        "color-cube"
    }

    fn update(&mut self, dt: f32, input: &InputState) {
        self.spin.advance(dt, input);
        self.pipeline.effect.vertex_stage.set_model(self.spin.model());
    }

    fn draw(&mut self, framebuffer: &mut Framebuffer, depth_buffer: &mut DepthBuffer) {
        self.pipeline.draw(framebuffer, depth_buffer, &self.list);
    }
}
