//! The per-frame draw algorithm.
//!
//! Rasterization follows Direct3D's coordinate system and
//! rasterization rules: pixel (x, y) owns the half-open area
//! [x, x+1) x [y, y+1), the top-left pixel is (0, 0), and the first
//! covered row/column of an edge starting at `v` is `ceil(v - 0.5)`.
//! Scan inputs are in raster space but need not be integral; the rules
//! produce exact pixel coordinates on the fly.
//!
//! There is no frustum clipping. Triangles crossing the camera plane
//! project incorrectly; callers keep geometry fully in front of the
//! camera. The view axis is negative z, so view-space z coordinates are
//! negative and the perspective divide uses |z|.

use glam::Vec3;

use crate::buffer::{DepthBuffer, Framebuffer};
use crate::effect::{Effect, FragmentStage, GeometryStage, VertexStage};
use crate::geometry::{IndexedTriangleList, Triangle, Vertex};

/// The generic rendering pipeline: owns one effect, draws indexed
/// triangle lists into a framebuffer / depth-buffer pair.
///
/// Single-threaded and synchronous; `draw` runs to completion and the
/// caller must not touch the buffers concurrently.
pub struct Pipeline<VS, GS, FS> {
    pub effect: Effect<VS, GS, FS>,
}

impl<VS, GS, FS> Pipeline<VS, GS, FS>
where
    VS: VertexStage,
    GS: GeometryStage<In = VS::Out>,
    FS: FragmentStage<In = GS::Out>,
{
    pub fn new(effect: Effect<VS, GS, FS>) -> Self {
        Self { effect }
    }

    /// Draw every triangle of the list.
    ///
    /// Writes zero or more pixels into `framebuffer` and updates
    /// `depth_buffer`; never fails for well-formed input. The caller
    /// clears both buffers and pushes per-frame effect state before
    /// each call.
    pub fn draw(
        &self,
        framebuffer: &mut Framebuffer,
        depth_buffer: &mut DepthBuffer,
        list: &IndexedTriangleList<VS::In>,
    ) {
        debug_assert_eq!(framebuffer.width(), depth_buffer.width());
        debug_assert_eq!(framebuffer.height(), depth_buffer.height());

        let half_width = framebuffer.width() as f32 / 2.0;
        let half_height = framebuffer.height() as f32 / 2.0;

        // One vertex-stage pass over the shared vertex array amortizes
        // the transform across all triangles referencing a vertex.
        let transformed: Vec<VS::Out> = list
            .vertices()
            .iter()
            .map(|v| self.effect.vertex_stage.run(v))
            .collect();

        // Assemble triangles
        for (triangle_index, tri) in list.indices().chunks_exact(3).enumerate() {
            let v0 = &transformed[tri[0]];
            let v1 = &transformed[tri[1]];
            let v2 = &transformed[tri[2]];

            if is_back_facing(v0.position(), v1.position(), v2.position()) {
                continue;
            }

            let mut triangle = self
                .effect
                .geometry_stage
                .run(v0, v1, v2, triangle_index);

            // View space to screen space
            to_screen_space(&mut triangle.v0, half_width, half_height);
            to_screen_space(&mut triangle.v1, half_width, half_height);
            to_screen_space(&mut triangle.v2, half_width, half_height);

            self.rasterize_triangle(framebuffer, depth_buffer, &triangle);
        }
    }

    /// Scan-convert one screen-space triangle.
    ///
    /// Classifies the triangle as flat-top, flat-bottom, or general and
    /// decomposes the general case at the split vertex. Vertex ordering
    /// happens in a local three-element array; element swaps keep
    /// ownership unambiguous.
    fn rasterize_triangle(
        &self,
        framebuffer: &mut Framebuffer,
        depth_buffer: &mut DepthBuffer,
        triangle: &Triangle<GS::Out>,
    ) {
        let mut v = [triangle.v0, triangle.v1, triangle.v2];

        // Sort ascending by y: v[0] top, v[2] bottom
        if v[0].position().y > v[1].position().y {
            v.swap(0, 1);
        }
        if v[1].position().y > v[2].position().y {
            v.swap(1, 2);
        }
        if v[0].position().y > v[1].position().y {
            v.swap(0, 1);
        }

        if v[0].position().y == v[1].position().y {
            // Flat top: order the top pair left-to-right
            if v[0].position().x > v[1].position().x {
                v.swap(0, 1);
            }
            self.draw_flat_top(framebuffer, depth_buffer, &v[0], &v[1], &v[2]);
        } else if v[1].position().y == v[2].position().y {
            // Flat bottom: order the bottom pair left-to-right
            if v[1].position().x > v[2].position().x {
                v.swap(1, 2);
            }
            self.draw_flat_bottom(framebuffer, depth_buffer, &v[0], &v[1], &v[2]);
        } else {
            // General: split on the long edge at the middle vertex's y,
            // interpolating every attribute to synthesize the split vertex
            let alpha =
                (v[1].position().y - v[0].position().y) / (v[2].position().y - v[0].position().y);
            let split_vertex = v[0] + (v[2] - v[0]) * alpha;

            if split_vertex.position().x > v[1].position().x {
                // Major right
                self.draw_flat_bottom(framebuffer, depth_buffer, &v[0], &v[1], &split_vertex);
                self.draw_flat_top(framebuffer, depth_buffer, &v[1], &split_vertex, &v[2]);
            } else {
                // Major left
                self.draw_flat_bottom(framebuffer, depth_buffer, &v[0], &split_vertex, &v[1]);
                self.draw_flat_top(framebuffer, depth_buffer, &split_vertex, &v[1], &v[2]);
            }
        }
    }

    // Vertex order assumption:
    //
    //        v0
    //        /\
    //       /  \
    //      /    \
    //   v1 ------ v2
    fn draw_flat_bottom(
        &self,
        framebuffer: &mut Framebuffer,
        depth_buffer: &mut DepthBuffer,
        v0: &GS::Out,
        v1: &GS::Out,
        v2: &GS::Out,
    ) {
        let rcp_dy = 1.0 / (v2.position().y - v0.position().y);

        let dv0 = (*v1 - *v0) * rcp_dy;
        let dv1 = (*v2 - *v0) * rcp_dy;

        // Right edge interpolant starts at the apex
        let interp_right = *v0;

        self.draw_flat_triangle(framebuffer, depth_buffer, v0, v2, &dv0, &dv1, interp_right);
    }

    // Vertex order assumption:
    //
    //   v0 ------ v1
    //      \    /
    //       \  /
    //        \/
    //        v2
    fn draw_flat_top(
        &self,
        framebuffer: &mut Framebuffer,
        depth_buffer: &mut DepthBuffer,
        v0: &GS::Out,
        v1: &GS::Out,
        v2: &GS::Out,
    ) {
        let rcp_dy = 1.0 / (v2.position().y - v0.position().y);

        let dv0 = (*v2 - *v0) * rcp_dy;
        let dv1 = (*v2 - *v1) * rcp_dy;

        // Right edge interpolant starts at the top-right vertex
        let interp_right = *v1;

        self.draw_flat_triangle(framebuffer, depth_buffer, v0, v2, &dv0, &dv1, interp_right);
    }

    /// Scan a flat-top or flat-bottom half top-to-bottom.
    ///
    /// The pre-step against `v0.y` is valid for both halves: in the
    /// flat-top case the right edge's start vertex shares v0's y
    /// coordinate, so one subtraction serves both edge interpolants.
    fn draw_flat_triangle(
        &self,
        framebuffer: &mut Framebuffer,
        depth_buffer: &mut DepthBuffer,
        v0: &GS::Out,
        v2: &GS::Out,
        dv0: &GS::Out,
        dv1: &GS::Out,
        mut interp_right: GS::Out,
    ) {
        let mut interp_left = *v0;

        let y_start = (v0.position().y - 0.5).ceil() as i32;
        let y_end = (v2.position().y - 0.5).ceil() as i32;

        // Pre-step to the first covered pixel center
        let pre_step = y_start as f32 + 0.5 - v0.position().y;
        interp_left += *dv0 * pre_step;
        interp_right += *dv1 * pre_step;

        for y in y_start..y_end {
            self.draw_scan_line(framebuffer, depth_buffer, y, &interp_left, &interp_right);
            interp_left += *dv0;
            interp_right += *dv1;
        }
    }

    fn draw_scan_line(
        &self,
        framebuffer: &mut Framebuffer,
        depth_buffer: &mut DepthBuffer,
        y: i32,
        interp_left: &GS::Out,
        interp_right: &GS::Out,
    ) {
        let x_start = (interp_left.position().x - 0.5).ceil() as i32;
        let x_end = (interp_right.position().x - 0.5).ceil() as i32;

        let dx = interp_right.position().x - interp_left.position().x;
        let d_interp = (*interp_right - *interp_left) / dx;

        let mut interp =
            *interp_left + d_interp * (x_start as f32 + 0.5 - interp_left.position().x);

        for x in x_start..x_end {
            // The z slot holds rcp_z since projection; recover true depth
            let z = 1.0 / interp.position().z;
            if depth_buffer.test_and_set(x as u32, y as u32, z) {
                // Undo the perspective pre-divide on the whole attribute
                // bundle, then shade. Test and write stay fused.
                let color = self.effect.fragment_stage.run(&(interp * z));
                framebuffer.put_pixel(x as u32, y as u32, color);
            }
            interp += d_interp;
        }
    }
}

/// Signed-volume backface test.
///
/// Winding convention: counter-clockwise triangles viewed from the
/// camera looking down the negative view axis are front-facing and
/// yield a negative value. Zero-area triangles are culled too.
fn is_back_facing(p0: Vec3, p1: Vec3, p2: Vec3) -> bool {
    (p1 - p0).cross(p2 - p0).dot(p1) >= 0.0
}

/// Project one vertex into screen space, in place.
///
/// Every interpolable attribute is scaled by `rcp_z` - the perspective
/// pre-divide that makes later screen-space interpolation
/// perspective-correct once the fragment loop multiplies the recovered
/// depth back in. `rcp_z` itself lands in the position's z slot.
fn to_screen_space<V: Vertex>(vertex: &mut V, half_width: f32, half_height: f32) {
    // Looking down -z: view-space z is negative, |z| avoids mirroring
    // x and y about the origin during the divide.
    let rcp_z = 1.0 / vertex.position().z.abs();

    *vertex *= rcp_z;

    let position = vertex.position_mut();
    position.x = (position.x + 1.0) * half_width;
    position.y = (-position.y + 1.0) * half_height;
    position.z = rcp_z;
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
