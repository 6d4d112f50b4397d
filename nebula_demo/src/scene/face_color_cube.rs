//! Cube with one flat color per face.
//!
//! Corners are duplicated per face (24 vertices) so the packed color is
//! constant across each face instead of blending between corners.

use glam::Vec3;

use nebula_soft_renderer::nebula::buffer::{DepthBuffer, Framebuffer};
use nebula_soft_renderer::nebula::effect::{
    face_color_effect, pack_unit_rgb, DefaultGeometryStage, DefaultVertexStage,
    FaceColorFragmentStage, FaceVertex, ModelTransform,
};
use nebula_soft_renderer::nebula::geometry::IndexedTriangleList;
use nebula_soft_renderer::nebula::{Pipeline, Result};

use crate::input::InputState;
use super::{Scene, Spin};

type FaceColorCubePipeline = Pipeline<
    DefaultVertexStage<FaceVertex>,
    DefaultGeometryStage<FaceVertex>,
    FaceColorFragmentStage,
>;

pub struct FaceColorCubeScene {
    pipeline: FaceColorCubePipeline,
    list: IndexedTriangleList<FaceVertex>,
    spin: Spin,
}

impl FaceColorCubeScene {
    pub fn new() -> Result<Self> {
        let h = 0.5;

        let face_colors = [
            pack_unit_rgb(Vec3::new(1.0, 0.0, 0.0)),
            pack_unit_rgb(Vec3::new(0.0, 1.0, 0.0)),
            pack_unit_rgb(Vec3::new(0.0, 0.0, 1.0)),
            pack_unit_rgb(Vec3::new(1.0, 1.0, 0.0)),
            pack_unit_rgb(Vec3::new(0.0, 1.0, 1.0)),
            pack_unit_rgb(Vec3::new(1.0, 0.0, 1.0)),
        ];

        // Four corners per face, in face order: left, near, right, far,
        // top, bottom.
        let face_corners = [
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(-h, h, h),
                Vec3::new(-h, -h, h),
            ],
            [
                Vec3::new(-h, h, h),
                Vec3::new(h, h, h),
                Vec3::new(h, -h, h),
                Vec3::new(-h, -h, h),
            ],
            [
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, -h, h),
            ],
            [
                Vec3::new(h, h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
            ],
            [
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(-h, h, h),
            ],
            [
                Vec3::new(h, -h, h),
                Vec3::new(-h, -h, h),
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
            ],
        ];

        let mut vertices = Vec::with_capacity(24);
        for (corners, &color) in face_corners.iter().zip(&face_colors) {
            for &corner in corners {
                vertices.push(FaceVertex::new(corner, color));
            }
        }

        // Outward-facing winding per face quad; the corner order above
        // differs per face, so the diagonals differ too.
        let indices = vec![
            0, 3, 2, 2, 1, 0, // left
            6, 5, 4, 4, 7, 6, // near
            9, 8, 11, 11, 10, 9, // right
            13, 12, 15, 15, 14, 13, // far
            16, 17, 18, 18, 19, 16, // top
            22, 23, 20, 20, 21, 22, // bottom
        ];

        Ok(Self {
            pipeline: Pipeline::new(face_color_effect()),
            list: IndexedTriangleList::new(vertices, indices)?,
            spin: Spin::new(),
        })
    }
}

impl Scene for FaceColorCubeScene {
    fn name(&self) -> &'static str {
        "face-color-cube"
    }

    fn update(&mut self, dt: f32, input: &InputState) {
        self.spin.advance(dt, input);
        self.pipeline.effect.vertex_stage.set_model(self.spin.model());
    }

    fn draw(&mut self, framebuffer: &mut Framebuffer, depth_buffer: &mut DepthBuffer) {
        self.pipeline.draw(framebuffer, depth_buffer, &self.list);
    }
}
