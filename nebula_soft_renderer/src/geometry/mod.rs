//! Vertex algebra and triangle data
//!
//! The `Interpolable` contract is what lets one pipeline implementation
//! serve arbitrarily different vertex shapes: the rasterizer only ever
//! adds, subtracts, and scales whole vertices, so it never needs to know
//! which attributes a shape carries.

mod vertex;
mod triangle;
mod indexed_triangle_list;

pub use vertex::{Interpolable, Vertex, CopyAttributes};
pub use triangle::Triangle;
pub use indexed_triangle_list::IndexedTriangleList;
