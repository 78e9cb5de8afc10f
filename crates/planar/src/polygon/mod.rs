//! Polygons built from ordered vertex lists.
//!
//! Purpose
//! - `SegmentedShape` is the general simple polygon: ray casting for interior
//!   containment, shoelace for area, segment sums for perimeter.
//! - `RectangleShape`, `SquareShape`, `TriangleShape` wrap it and add names,
//!   nothing else.
//! - `rand` draws reproducible star-shaped polygons for tests and benches.
//!
//! Conventions
//! - Vertex order is the boundary traversal; either winding is accepted.
//! - Indexed lookups take `usize`, so negative indices cannot be expressed.

pub mod rand;
mod segmented;
mod special;

pub use segmented::{SegmentedShape, Winding};
pub use special::{RectangleShape, SquareShape, TriangleShape};
