//! `SegmentedShape`: simple polygon from an ordered vertex list.
//!
//! Invariants:
//! - At least 3 points; enforced by the constructors.
//! - `segments[i]` joins `points[i]` to `points[(i + 1) % n]`, so
//!   `segments.len() == points.len()`.
//! - Simplicity (no self-intersection) and non-degeneracy are assumed, not
//!   checked. Area and containment are meaningless for polygons that violate them.

use crate::error::ShapeError;
use crate::geom2::kernels::{
    polygon_area_centroid, ray_cast_contains, shoelace_area, shoelace_signed_area,
};
use crate::geom2::{Point, Segment};
use crate::shape::Shape;

/// Traversal direction of a polygon's vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Simple polygon with derived boundary segments.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentedShape {
    points: Vec<Point>,
    segments: Vec<Segment>,
}

impl SegmentedShape {
    /// Build from an ordered vertex list; insertion order defines the boundary.
    pub fn new(points: Vec<Point>) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::TooFewPoints { got: points.len() });
        }
        Ok(Self::from_points_unchecked(points))
    }

    /// Three mandatory vertices plus any number of extras, in traversal order.
    pub fn from_triple(a: Point, b: Point, c: Point, rest: impl IntoIterator<Item = Point>) -> Self {
        let mut points = vec![a, b, c];
        points.extend(rest);
        Self::from_points_unchecked(points)
    }

    fn from_points_unchecked(points: Vec<Point>) -> Self {
        let n = points.len();
        let segments = (0..n)
            .map(|i| Segment::new(points[i], points[(i + 1) % n]))
            .collect();
        tracing::trace!(vertices = n, "segmented shape built");
        Self { points, segments }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn point_at(&self, index: usize) -> Result<Point, ShapeError> {
        self.points
            .get(index)
            .copied()
            .ok_or(ShapeError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    pub fn segment_at(&self, index: usize) -> Result<Segment, ShapeError> {
        self.segments
            .get(index)
            .copied()
            .ok_or(ShapeError::IndexOutOfRange {
                index,
                len: self.segments.len(),
            })
    }

    /// Shoelace sum before the absolute value: positive for counterclockwise.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        shoelace_signed_area(&self.points)
    }

    /// `None` for a zero-area (colinear) vertex list.
    pub fn winding(&self) -> Option<Winding> {
        let s = self.signed_area();
        if s > 0.0 {
            Some(Winding::CounterClockwise)
        } else if s < 0.0 {
            Some(Winding::Clockwise)
        } else {
            None
        }
    }

    /// Area centroid; `None` when the area vanishes.
    #[inline]
    pub fn centroid(&self) -> Option<Point> {
        polygon_area_centroid(&self.points)
    }
}

impl Shape for SegmentedShape {
    #[inline]
    fn area(&self) -> f64 {
        shoelace_area(&self.points)
    }

    fn perimeter(&self) -> Result<f64, ShapeError> {
        Ok(self.segments.iter().map(Segment::length).sum())
    }

    fn boundary_intersects_eps(&self, p: &Point, eps: f64) -> bool {
        self.segments
            .iter()
            .any(|s| s.boundary_contains_eps(p, eps))
    }

    #[inline]
    fn contains(&self, p: &Point) -> bool {
        ray_cast_contains(&self.points, p)
    }
}
