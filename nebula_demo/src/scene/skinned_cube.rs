//! Textured cube with a folded dice-skin unwrap.
//!
//! Eight corners are not enough for a seamless unwrap: corners on the
//! skin's cut edges appear once per incident face, giving 14 vertices.

use glam::{Vec2, Vec3};

use nebula_soft_renderer::nebula::buffer::{DepthBuffer, Framebuffer};
use nebula_soft_renderer::nebula::effect::{
    texture_effect, DefaultGeometryStage, DefaultVertexStage, ModelTransform,
    TextureFragmentStage, UvVertex,
};
use nebula_soft_renderer::nebula::geometry::IndexedTriangleList;
use nebula_soft_renderer::nebula::{Pipeline, Result, Texture};

use crate::input::InputState;
use super::{Scene, Spin};

type SkinnedCubePipeline = Pipeline<
    DefaultVertexStage<UvVertex>,
    DefaultGeometryStage<UvVertex>,
    TextureFragmentStage,
>;

pub struct SkinnedCubeScene {
    pipeline: SkinnedCubePipeline,
    list: IndexedTriangleList<UvVertex>,
    spin: Spin,
}

impl SkinnedCubeScene {
    pub fn new(texture: Texture) -> Result<Self> {
        let h = 0.5;

        let positions = [
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, -h, h),
            Vec3::new(-h, -h, h),
            Vec3::new(-h, h, h),
            Vec3::new(-h, h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(h, h, h),
            // Cut-edge duplicates
            Vec3::new(-h, h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, -h, -h),
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
        ];

        // Dice-skin layout: a 3x4 cross of faces in normalized
        // coordinates.
        let uvs = [
            Vec2::new(2.0 / 3.0, 0.0),
            Vec2::new(2.0 / 3.0, 3.0 / 4.0),
            Vec2::new(2.0 / 3.0, 2.0 / 4.0),
            Vec2::new(2.0 / 3.0, 1.0 / 4.0),
            Vec2::new(1.0 / 3.0, 1.0 / 4.0),
            Vec2::new(1.0 / 3.0, 0.0),
            Vec2::new(1.0 / 3.0, 3.0 / 4.0),
            Vec2::new(1.0 / 3.0, 2.0 / 4.0),
            Vec2::new(0.0, 1.0 / 4.0),
            Vec2::new(0.0, 2.0 / 4.0),
            Vec2::new(1.0 / 3.0, 1.0),
            Vec2::new(2.0 / 3.0, 1.0),
            Vec2::new(1.0, 1.0 / 4.0),
            Vec2::new(1.0, 2.0 / 4.0),
        ];

        let vertices = positions
            .iter()
            .zip(&uvs)
            .map(|(&position, &uv)| UvVertex::new(position, uv))
            .collect();

        let indices = vec![
            3, 5, 0, 3, 4, 5, // left
            2, 4, 3, 2, 7, 4, // near
            1, 7, 2, 1, 6, 7, // right
            1, 10, 6, 1, 11, 10, // far, through cut duplicates
            7, 8, 4, 7, 9, 8, // top
            3, 12, 2, 12, 13, 2, // bottom
        ];

        Ok(Self {
            pipeline: Pipeline::new(texture_effect(texture, true)),
            list: IndexedTriangleList::new(vertices, indices)?,
            spin: Spin::new(),
        })
    }
}

impl Scene for SkinnedCubeScene {
    fn name(&self) -> &'static str {
        "skinned-cube"
    }

    fn update(&mut self, dt: f32, input: &InputState) {
        self.spin.advance(dt, input);
        self.pipeline.effect.vertex_stage.set_model(self.spin.model());
    }

    fn draw(&mut self, framebuffer: &mut Framebuffer, depth_buffer: &mut DepthBuffer) {
        self.pipeline.draw(framebuffer, depth_buffer, &self.list);
    }
}
