//! Points, segments, and closed 2D shapes.
//!
//! Every shape answers four queries: area, perimeter, whether a point lies on
//! its boundary (within a tolerance), and whether a point lies strictly inside.
//!
//! Layout
//! - `geom2`: `Point`, `Segment`, and the shared kernels (ray casting, shoelace,
//!   normalized ellipse equation).
//! - `polygon`: `SegmentedShape` and the rectangle/square/triangle wrappers,
//!   plus a seeded sampler for random simple polygons.
//! - `ellipse`: `EllipseShape` and `CircleShape`.
//! - `shape`: the `Shape` trait and the `AnyShape` tagged union.
//! - `cfg`: the process-wide default boundary tolerance.
//!
//! Conventions
//! - Boundary tests come in pairs: `boundary_intersects(p)` reads the global
//!   tolerance, `boundary_intersects_eps(p, eps)` takes it explicitly.
//! - Failures are `ShapeError` values; nothing in the library panics on bad input.

pub mod cfg;
pub mod ellipse;
pub mod error;
pub mod geom2;
pub mod polygon;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{reset_tolerance, set_tolerance, tolerance, DEFAULT_TOLERANCE};
pub use ellipse::{CircleShape, EllipseShape};
pub use error::ShapeError;
pub use geom2::{Point, Segment};
pub use polygon::{RectangleShape, SegmentedShape, SquareShape, TriangleShape, Winding};
pub use shape::{AnyShape, Shape, ShapeKind};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{set_tolerance, tolerance, DEFAULT_TOLERANCE};
    pub use crate::ellipse::{CircleShape, EllipseShape};
    pub use crate::error::ShapeError;
    pub use crate::geom2::{Point, Segment};
    pub use crate::polygon::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::polygon::{
        RectangleShape, SegmentedShape, SquareShape, TriangleShape, Winding,
    };
    pub use crate::shape::{AnyShape, Shape, ShapeKind};
}
