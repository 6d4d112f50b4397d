//! Stage traits and the effect bundle.
//!
//! Each stage is a pure function of its input plus its own bound state
//! (model matrix, elapsed time, a texture). The pipeline drives the
//! three stages through these traits and nothing else.

use std::marker::PhantomData;

use glam::{Mat4, Vec3};

use crate::geometry::{CopyAttributes, Triangle, Vertex};

// ===== STAGE TRAITS =====

/// Per-vertex transform stage.
///
/// Maps one input-shape vertex to one output-shape vertex; applies the
/// current model transform (and possibly extra displacement) and
/// carries the non-position attributes through.
pub trait VertexStage {
    type In: Vertex;
    type Out: Vertex;

    fn run(&self, vertex: &Self::In) -> Self::Out;
}

/// Per-triangle stage.
///
/// Receives the three transformed vertices plus the triangle's index
/// and assembles the renderable triangle, possibly of a different
/// shape. Defaults to identity pass-through.
pub trait GeometryStage {
    type In: Vertex;
    type Out: Vertex;

    fn run(
        &self,
        v0: &Self::In,
        v1: &Self::In,
        v2: &Self::In,
        triangle_index: usize,
    ) -> Triangle<Self::Out>;
}

/// Per-fragment stage: interpolated attribute bundle in, packed
/// `0x00RRGGBB` color out.
pub trait FragmentStage {
    type In;

    fn run(&self, input: &Self::In) -> u32;
}

/// Push the caller's per-frame model matrix into a vertex stage
/// without knowing its concrete type.
pub trait ModelTransform {
    fn set_model(&mut self, model: Mat4);
}

// ===== EFFECT BUNDLE =====

/// Three composable stages defining one rendering style.
///
/// The pipeline owns one of these; the scene pushes per-frame state
/// (model matrix, time) into the stages before each draw.
pub struct Effect<VS, GS, FS> {
    pub vertex_stage: VS,
    pub geometry_stage: GS,
    pub fragment_stage: FS,
}

impl<VS, GS, FS> Effect<VS, GS, FS> {
    pub fn new(vertex_stage: VS, geometry_stage: GS, fragment_stage: FS) -> Self {
        Self {
            vertex_stage,
            geometry_stage,
            fragment_stage,
        }
    }
}

// ===== DEFAULT STAGES =====

/// Model-matrix transform with attribute pass-through.
///
/// The workhorse vertex stage: output shape equals input shape, the
/// position is taken through the model matrix, every other attribute is
/// copied verbatim.
pub struct DefaultVertexStage<V> {
    model: Mat4,
    _vertex: PhantomData<V>,
}

impl<V> DefaultVertexStage<V> {
    pub fn new() -> Self {
        Self {
            model: Mat4::IDENTITY,
            _vertex: PhantomData,
        }
    }
}

impl<V> Default for DefaultVertexStage<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> VertexStage for DefaultVertexStage<V>
where
    V: Vertex + CopyAttributes<V> + Default,
{
    type In = V;
    type Out = V;

    fn run(&self, vertex: &V) -> V {
        let mut out = V::default();
        *out.position_mut() = self.model.transform_point3(vertex.position());
        out.copy_attributes_from(vertex);
        out
    }
}

impl<V> ModelTransform for DefaultVertexStage<V> {
    fn set_model(&mut self, model: Mat4) {
        self.model = model;
    }
}

/// Identity geometry stage: assembles the three vertices into a
/// triangle of the same shape, untouched.
pub struct DefaultGeometryStage<V> {
    _vertex: PhantomData<V>,
}

impl<V> DefaultGeometryStage<V> {
    pub fn new() -> Self {
        Self { _vertex: PhantomData }
    }
}

impl<V> Default for DefaultGeometryStage<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> GeometryStage for DefaultGeometryStage<V> {
    type In = V;
    type Out = V;

    fn run(&self, v0: &V, v1: &V, v2: &V, _triangle_index: usize) -> Triangle<V> {
        Triangle::new(*v0, *v1, *v2)
    }
}

// ===== HELPERS =====

/// Pack a unit-range RGB color into `(R << 16 | G << 8 | B)`.
///
/// Channels are scaled by 255 and saturated, so slight interpolation
/// overshoot does not bleed across channel boundaries.
pub fn pack_unit_rgb(color: Vec3) -> u32 {
    let red = (color.x * 255.0) as u8 as u32;
    let green = (color.y * 255.0) as u8 as u32;
    let blue = (color.z * 255.0) as u8 as u32;
    red << 16 | green << 8 | blue
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
