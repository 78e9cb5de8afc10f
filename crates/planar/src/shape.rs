//! The shape capability and the closed set of shape variants.
//!
//! - `Shape`: area, perimeter, boundary proximity, strict interior containment.
//! - `AnyShape`: tagged union over every concrete shape, dispatching by `match`
//!   so heterogeneous collections need no boxing.

use crate::cfg;
use crate::ellipse::{CircleShape, EllipseShape};
use crate::error::ShapeError;
use crate::geom2::Point;
use crate::polygon::{RectangleShape, SegmentedShape, SquareShape, TriangleShape};

/// Queries every closed shape answers.
pub trait Shape {
    /// Enclosed area, never negative.
    fn area(&self) -> f64;

    /// Boundary length, or `ShapeError::UnsupportedPerimeter` where no closed form exists.
    fn perimeter(&self) -> Result<f64, ShapeError>;

    /// Is `p` on the boundary within `eps`?
    fn boundary_intersects_eps(&self, p: &Point, eps: f64) -> bool;

    /// [`Shape::boundary_intersects_eps`] with the global tolerance.
    #[inline]
    fn boundary_intersects(&self, p: &Point) -> bool {
        self.boundary_intersects_eps(p, cfg::tolerance())
    }

    /// Is `p` strictly inside?
    fn contains(&self, p: &Point) -> bool;
}

/// Discriminant of [`AnyShape`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Polygon,
    Rectangle,
    Square,
    Triangle,
    Ellipse,
    Circle,
}

/// Every concrete shape, for heterogeneous collections.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyShape {
    Polygon(SegmentedShape),
    Rectangle(RectangleShape),
    Square(SquareShape),
    Triangle(TriangleShape),
    Ellipse(EllipseShape),
    Circle(CircleShape),
}

impl AnyShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            AnyShape::Polygon(_) => ShapeKind::Polygon,
            AnyShape::Rectangle(_) => ShapeKind::Rectangle,
            AnyShape::Square(_) => ShapeKind::Square,
            AnyShape::Triangle(_) => ShapeKind::Triangle,
            AnyShape::Ellipse(_) => ShapeKind::Ellipse,
            AnyShape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Underlying polygon for the segment-based variants.
    pub fn as_polygon(&self) -> Option<&SegmentedShape> {
        match self {
            AnyShape::Polygon(p) => Some(p),
            AnyShape::Rectangle(r) => Some(r.as_polygon()),
            AnyShape::Square(s) => Some(s.as_polygon()),
            AnyShape::Triangle(t) => Some(t.as_polygon()),
            AnyShape::Ellipse(_) | AnyShape::Circle(_) => None,
        }
    }

    fn as_dyn(&self) -> &dyn Shape {
        match self {
            AnyShape::Polygon(s) => s,
            AnyShape::Rectangle(s) => s,
            AnyShape::Square(s) => s,
            AnyShape::Triangle(s) => s,
            AnyShape::Ellipse(s) => s,
            AnyShape::Circle(s) => s,
        }
    }
}

impl Shape for AnyShape {
    fn area(&self) -> f64 {
        self.as_dyn().area()
    }

    fn perimeter(&self) -> Result<f64, ShapeError> {
        self.as_dyn().perimeter()
    }

    fn boundary_intersects_eps(&self, p: &Point, eps: f64) -> bool {
        self.as_dyn().boundary_intersects_eps(p, eps)
    }

    fn contains(&self, p: &Point) -> bool {
        self.as_dyn().contains(p)
    }
}

impl From<SegmentedShape> for AnyShape {
    fn from(s: SegmentedShape) -> Self {
        AnyShape::Polygon(s)
    }
}

impl From<RectangleShape> for AnyShape {
    fn from(s: RectangleShape) -> Self {
        AnyShape::Rectangle(s)
    }
}

impl From<SquareShape> for AnyShape {
    fn from(s: SquareShape) -> Self {
        AnyShape::Square(s)
    }
}

impl From<TriangleShape> for AnyShape {
    fn from(s: TriangleShape) -> Self {
        AnyShape::Triangle(s)
    }
}

impl From<EllipseShape> for AnyShape {
    fn from(s: EllipseShape) -> Self {
        AnyShape::Ellipse(s)
    }
}

impl From<CircleShape> for AnyShape {
    fn from(s: CircleShape) -> Self {
        AnyShape::Circle(s)
    }
}
