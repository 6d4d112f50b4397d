//! Per-pixel storage for the rasterizer
//!
//! Provides the destination color buffer and the parallel inverse-depth
//! buffer. Both are sized once at startup to the display resolution and
//! cleared every frame. All writes are bounds-checked; an out-of-range
//! write is a fatal precondition violation, not a recoverable error.

mod framebuffer;
mod depth_buffer;

pub use framebuffer::Framebuffer;
pub use depth_buffer::DepthBuffer;
