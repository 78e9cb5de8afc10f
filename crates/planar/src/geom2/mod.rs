//! 2D primitives and the kernels every shape is built on.
//!
//! Purpose
//! - `Point` and `Segment` are plain `Copy` values; shapes store copies.
//! - `kernels` holds ray casting, the shoelace sums, the area centroid, and the
//!   normalized ellipse equation as free functions over `&[Point]`.
//!
//! Code cross-refs: `polygon::SegmentedShape`, `ellipse::EllipseShape`

pub mod kernels;
mod types;

pub use types::{Point, Segment};

#[cfg(test)]
mod tests;
