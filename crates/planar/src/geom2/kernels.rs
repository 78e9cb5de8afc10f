//! Shared computation kernels over raw vertex slices.
//!
//! These are the only places where polygon and ellipse math lives; the shape
//! types call into them instead of carrying their own copies.

use nalgebra::Vector2;

use super::types::Point;

/// Signed area of the parallelogram spanned by `a` and `b` (z of the cross product).
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Even-odd ray casting: does the rightward horizontal ray from `p` cross the
/// boundary an odd number of times?
///
/// Exact parity with no tolerance, so points on the boundary may land either
/// way. A horizontal edge never passes the straddle test (`yi > py` and
/// `yj > py` agree), so the division only runs with `yj != yi`.
pub fn ray_cast_contains(points: &[Point], p: &Point) -> bool {
    let Some(mut j) = points.len().checked_sub(1) else {
        return false;
    };
    let mut inside = false;
    for (i, pi) in points.iter().enumerate() {
        let pj = &points[j];
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shoelace sum `Σ (x_i·y_{i+1} − y_i·x_{i+1}) / 2` with wraparound.
///
/// Positive for counterclockwise traversal, negative for clockwise.
pub fn shoelace_signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| cross(points[i].to_vec(), points[(i + 1) % n].to_vec()))
        .sum();
    twice * 0.5
}

/// Shoelace area; the absolute value is taken once, after the full sum.
#[inline]
pub fn shoelace_area(points: &[Point]) -> f64 {
    shoelace_signed_area(points).abs()
}

/// Area centroid of a simple polygon. `None` when the signed area vanishes.
pub fn polygon_area_centroid(points: &[Point]) -> Option<Point> {
    if points.len() < 3 {
        return None;
    }
    let n = points.len();
    let mut a = 0.0;
    let mut c = Vector2::zeros();
    for i in 0..n {
        let p = points[i].to_vec();
        let q = points[(i + 1) % n].to_vec();
        let w = cross(p, q);
        a += w;
        c += (p + q) * w;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Point::from(c / (6.0 * a)))
}

/// Normalized ellipse equation `((x−cx)/a)² + ((y−cy)/b)²`; exactly 1 on the boundary.
#[inline]
pub fn ellipse_equation(center: &Point, a: f64, b: f64, p: &Point) -> f64 {
    let d = p.to_vec() - center.to_vec();
    (d.x / a).powi(2) + (d.y / b).powi(2)
}
