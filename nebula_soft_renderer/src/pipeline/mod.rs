//! The rasterization pipeline
//!
//! One generic draw algorithm serving every effect: vertex transform,
//! backface culling, perspective projection, perspective-correct scan
//! conversion, depth test, fragment shading.

mod pipeline;

pub use pipeline::Pipeline;
