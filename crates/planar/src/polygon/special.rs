//! Named polygons: rectangles, squares, triangles.
//!
//! Each wraps a `SegmentedShape` built from a reduced parameter set and only
//! adds named accessors at fixed vertex/segment indices. All geometry goes
//! through the wrapped polygon.
//!
//! Vertex layout
//! - Rectangle: `[top_left, top_right, bottom_right, bottom_left]`, clockwise
//!   when `bottom_right.y < top_left.y`.
//! - Triangle: `[a, b, c]`; sides are `a→b`, `b→c`, `c→a`.

use crate::error::ShapeError;
use crate::geom2::{Point, Segment};
use crate::shape::Shape;

use super::segmented::SegmentedShape;

/// Axis-aligned rectangle from two opposite corners.
///
/// Corners are not reordered: swapped inputs give negative `width`/`height`
/// while `area` stays non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct RectangleShape {
    poly: SegmentedShape,
}

impl RectangleShape {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        let top_right = Point::new(bottom_right.x, top_left.y);
        let bottom_left = Point::new(top_left.x, bottom_right.y);
        Self {
            poly: SegmentedShape::from_triple(top_left, top_right, bottom_right, [bottom_left]),
        }
    }

    #[inline]
    pub fn as_polygon(&self) -> &SegmentedShape {
        &self.poly
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        self.poly.points()[0]
    }

    #[inline]
    pub fn top_right(&self) -> Point {
        self.poly.points()[1]
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.poly.points()[2]
    }

    #[inline]
    pub fn bottom_left(&self) -> Point {
        self.poly.points()[3]
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.bottom_right().x - self.top_left().x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.top_left().y - self.bottom_right().y
    }
}

impl Shape for RectangleShape {
    fn area(&self) -> f64 {
        self.poly.area()
    }
    fn perimeter(&self) -> Result<f64, ShapeError> {
        self.poly.perimeter()
    }
    fn boundary_intersects_eps(&self, p: &Point, eps: f64) -> bool {
        self.poly.boundary_intersects_eps(p, eps)
    }
    fn contains(&self, p: &Point) -> bool {
        self.poly.contains(p)
    }
}

/// Square hanging right and down from `top_left`.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareShape {
    rect: RectangleShape,
}

impl SquareShape {
    pub fn new(top_left: Point, side: f64) -> Self {
        let bottom_right = Point::new(top_left.x + side, top_left.y - side);
        Self {
            rect: RectangleShape::new(top_left, bottom_right),
        }
    }

    #[inline]
    pub fn as_rectangle(&self) -> &RectangleShape {
        &self.rect
    }

    #[inline]
    pub fn as_polygon(&self) -> &SegmentedShape {
        self.rect.as_polygon()
    }

    #[inline]
    pub fn side(&self) -> f64 {
        self.rect.width()
    }
}

impl Shape for SquareShape {
    fn area(&self) -> f64 {
        self.rect.area()
    }
    fn perimeter(&self) -> Result<f64, ShapeError> {
        self.rect.perimeter()
    }
    fn boundary_intersects_eps(&self, p: &Point, eps: f64) -> bool {
        self.rect.boundary_intersects_eps(p, eps)
    }
    fn contains(&self, p: &Point) -> bool {
        self.rect.contains(p)
    }
}

/// Triangle with named vertices and sides.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleShape {
    poly: SegmentedShape,
}

impl TriangleShape {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            poly: SegmentedShape::from_triple(a, b, c, std::iter::empty()),
        }
    }

    #[inline]
    pub fn as_polygon(&self) -> &SegmentedShape {
        &self.poly
    }

    #[inline]
    pub fn a(&self) -> Point {
        self.poly.points()[0]
    }

    #[inline]
    pub fn b(&self) -> Point {
        self.poly.points()[1]
    }

    #[inline]
    pub fn c(&self) -> Point {
        self.poly.points()[2]
    }

    #[inline]
    pub fn side_ab(&self) -> Segment {
        self.poly.segments()[0]
    }

    #[inline]
    pub fn side_bc(&self) -> Segment {
        self.poly.segments()[1]
    }

    /// Stored as `c→a`, the closing edge of the traversal.
    #[inline]
    pub fn side_ac(&self) -> Segment {
        self.poly.segments()[2]
    }
}

impl Shape for TriangleShape {
    fn area(&self) -> f64 {
        self.poly.area()
    }
    fn perimeter(&self) -> Result<f64, ShapeError> {
        self.poly.perimeter()
    }
    fn boundary_intersects_eps(&self, p: &Point, eps: f64) -> bool {
        self.poly.boundary_intersects_eps(p, eps)
    }
    fn contains(&self, p: &Point) -> bool {
        self.poly.contains(p)
    }
}
