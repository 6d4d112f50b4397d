/*!
# Nebula Soft Renderer

A CPU-only 3D rasterization pipeline: vertex transformation, backface
culling, perspective projection, perspective-correct triangle scan
conversion, and depth-buffered pixel write-back, parameterized over a
pluggable shading `Effect`.

## Architecture

- **Framebuffer / DepthBuffer**: owned per-pixel color and inverse-depth
  storage with bounds-checked writes
- **Interpolable / Vertex**: the algebra contract that makes generic
  attribute interpolation possible
- **Effect**: a bundle of three substitutable stages (vertex, geometry,
  fragment) selected at scene-construction time
- **Pipeline**: the per-frame draw algorithm, generic over one Effect

The pipeline is single-threaded and synchronous. There is no frustum
clipping: triangles are assumed to stay fully in front of the camera.
*/

// Internal modules
mod error;
pub mod log;
pub mod buffer;
pub mod geometry;
pub mod texture;
pub mod effect;
pub mod pipeline;

// Main nebula namespace module
pub mod nebula {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: nebula_* macros are NOT re-exported here - they are internal only
    }

    // Buffer sub-module
    pub mod buffer {
        pub use crate::buffer::*;
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Texture sampling
    pub use crate::texture::Texture;

    // Effect sub-module with all shading stage types
    pub mod effect {
        pub use crate::effect::*;
    }

    // The rasterization pipeline
    pub use crate::pipeline::Pipeline;
}

// Re-export math library at crate root
pub use glam;
