//! Points and segments.
//!
//! - `Point`: value-semantics 2D coordinate, convertible to `nalgebra::Vector2`.
//! - `Segment`: ordered endpoint pair with a tolerance-based membership test.

use nalgebra::Vector2;

use crate::cfg;

/// 2D coordinate. Two points with equal coordinates are interchangeable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.to_vec() - other.to_vec()).norm()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Closed segment between `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        Point::from((self.a.to_vec() + self.b.to_vec()) * 0.5)
    }

    /// Membership under the global tolerance; see [`Segment::boundary_contains_eps`].
    #[inline]
    pub fn boundary_contains(&self, p: &Point) -> bool {
        self.boundary_contains_eps(p, cfg::tolerance())
    }

    /// True iff `|d(a,p) + d(p,b) - d(a,b)| < eps`.
    ///
    /// The detour through `p` equals the direct length only for points between
    /// the endpoints, so colinear points beyond either end are rejected.
    /// Strict: an excess of exactly `eps` is outside.
    #[inline]
    pub fn boundary_contains_eps(&self, p: &Point, eps: f64) -> bool {
        let excess = self.a.distance_to(p) + p.distance_to(&self.b) - self.length();
        excess.abs() < eps
    }
}
