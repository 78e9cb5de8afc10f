//! Axis-aligned ellipses and circles via the normalized ellipse equation.
//!
//! Conventions
//! - `equation_for(p) = ((x−cx)/a)² + ((y−cy)/b)²`; exactly 1 on the boundary.
//! - Boundary test is non-strict (`|eq − 1| <= eps`), unlike `Segment`'s strict
//!   test. Interior test is strict (`eq < 1`).
//! - `EllipseShape::perimeter` always fails: there is no closed form.
//!   `perimeter_approx` is a separate, explicitly approximate extension.

use std::f64::consts::PI;

use crate::error::ShapeError;
use crate::geom2::kernels::ellipse_equation;
use crate::geom2::Point;
use crate::shape::Shape;

fn check_axis(name: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidAxis { name, value })
    }
}

/// Ellipse with semi-axis `a` along x and `b` along y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseShape {
    center: Point,
    a: f64,
    b: f64,
}

impl EllipseShape {
    pub fn new(center: Point, a: f64, b: f64) -> Result<Self, ShapeError> {
        let a = check_axis("a", a)?;
        let b = check_axis("b", b)?;
        tracing::trace!(cx = center.x, cy = center.y, a, b, "ellipse built");
        Ok(Self { center, a, b })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[inline]
    pub fn equation_for(&self, p: &Point) -> f64 {
        ellipse_equation(&self.center, self.a, self.b, p)
    }

    /// Ramanujan's second approximation, `π(a+b)(1 + 3h/(10 + √(4−3h)))` with
    /// `h = ((a−b)/(a+b))²`. Exact for circles; the relative error is about 5e-10
    /// at axis ratio 2 and grows with eccentricity.
    pub fn perimeter_approx(&self) -> f64 {
        let (a, b) = (self.a, self.b);
        let h = ((a - b) / (a + b)).powi(2);
        PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }
}

impl Shape for EllipseShape {
    #[inline]
    fn area(&self) -> f64 {
        PI * self.a * self.b
    }

    fn perimeter(&self) -> Result<f64, ShapeError> {
        Err(ShapeError::UnsupportedPerimeter)
    }

    #[inline]
    fn boundary_intersects_eps(&self, p: &Point, eps: f64) -> bool {
        (self.equation_for(p) - 1.0).abs() <= eps
    }

    #[inline]
    fn contains(&self, p: &Point) -> bool {
        self.equation_for(p) < 1.0
    }
}

/// Circle: an ellipse with equal semi-axes and a closed-form perimeter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleShape {
    ellipse: EllipseShape,
}

impl CircleShape {
    pub fn new(center: Point, radius: f64) -> Result<Self, ShapeError> {
        let radius = check_axis("radius", radius)?;
        Ok(Self {
            ellipse: EllipseShape::new(center, radius, radius)?,
        })
    }

    #[inline]
    pub fn as_ellipse(&self) -> &EllipseShape {
        &self.ellipse
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.ellipse.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.ellipse.a
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius()
    }
}

impl Shape for CircleShape {
    fn area(&self) -> f64 {
        self.ellipse.area()
    }

    fn perimeter(&self) -> Result<f64, ShapeError> {
        Ok(2.0 * PI * self.radius())
    }

    fn boundary_intersects_eps(&self, p: &Point, eps: f64) -> bool {
        self.ellipse.boundary_intersects_eps(p, eps)
    }

    fn contains(&self, p: &Point) -> bool {
        self.ellipse.contains(p)
    }
}
