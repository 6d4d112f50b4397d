//! Shading policy bundles
//!
//! An `Effect` packages three independently substitutable stages:
//! a per-vertex transform, an optional per-triangle stage, and a
//! per-fragment color stage. Concrete effects are selected at
//! scene-construction time; the pipeline is generic over the bundle so
//! every stage call monomorphizes with zero indirection.

mod stage;
pub mod vertex_color;
pub mod face_color;
pub mod texture_effect;
pub mod wavy;
pub mod position_color;

pub use stage::{
    VertexStage, GeometryStage, FragmentStage,
    Effect, ModelTransform,
    DefaultVertexStage, DefaultGeometryStage,
    pack_unit_rgb,
};
pub use vertex_color::{ColorVertex, ColorFragmentStage, VertexColorEffect, vertex_color_effect};
pub use face_color::{FaceVertex, FaceColorFragmentStage, FaceColorEffect, face_color_effect};
pub use texture_effect::{UvVertex, TextureFragmentStage, TextureEffect, texture_effect};
pub use wavy::{WavyVertexStage, WavyTextureEffect, wavy_texture_effect};
pub use position_color::{
    PositionVertex, PositionColorVertexStage, PositionColorEffect, position_color_effect,
};
