use super::kernels::{ellipse_equation, polygon_area_centroid, ray_cast_contains, shoelace_area};
use super::*;
use proptest::prelude::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn distance_axis_and_diagonal() {
    assert!((pt(0.0, 0.0).distance_to(&pt(3.0, 4.0)) - 5.0).abs() < 1e-12);
    assert_eq!(pt(2.0, -1.0).distance_to(&pt(2.0, -1.0)), 0.0);
}

#[test]
fn segment_scenario_diagonal() {
    let s = Segment::new(pt(1.0, 1.0), pt(5.0, 5.0));
    assert!((s.length() - 32.0_f64.sqrt()).abs() < 1e-12);
    assert!((s.length() - 5.66).abs() < 0.01);
    assert!(s.boundary_contains_eps(&pt(3.0, 3.0), 0.01));
    assert!(!s.boundary_contains_eps(&pt(3.0, 4.0), 0.01));
}

#[test]
fn segment_rejects_colinear_points_past_the_ends() {
    let s = Segment::new(pt(0.0, 0.0), pt(4.0, 0.0));
    assert!(s.boundary_contains_eps(&pt(4.0, 0.0), 1e-9));
    assert!(!s.boundary_contains_eps(&pt(4.5, 0.0), 0.01));
    assert!(!s.boundary_contains_eps(&pt(-0.1, 0.0), 0.01));
}

#[test]
fn segment_tolerance_is_strict() {
    // Colinear, 1.0 past `b`: the detour excess is exactly 2.0.
    let s = Segment::new(pt(0.0, 0.0), pt(2.0, 0.0));
    let p = pt(3.0, 0.0);
    assert!(!s.boundary_contains_eps(&p, 2.0));
    assert!(s.boundary_contains_eps(&p, 2.0 + 1e-9));
}

#[test]
fn midpoint_is_average_of_endpoints() {
    let m = Segment::new(pt(-2.0, 1.0), pt(4.0, 7.0)).midpoint();
    assert_eq!(m, pt(1.0, 4.0));
}

#[test]
fn ray_cast_skips_horizontal_edges() {
    // Unit square has two horizontal edges; probing at their height must not
    // divide by zero or toggle.
    let sq = [pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)];
    assert!(ray_cast_contains(&sq, &pt(0.5, 0.5)));
    assert!(!ray_cast_contains(&sq, &pt(-0.5, 1.0)));
    assert!(!ray_cast_contains(&sq, &pt(2.0, 0.5)));
    assert!(!ray_cast_contains(&[], &pt(0.0, 0.0)));
}

#[test]
fn ray_cast_concave_notch() {
    // U shape: the notch between the prongs is outside.
    let u = [
        pt(0.0, 0.0),
        pt(3.0, 0.0),
        pt(3.0, 3.0),
        pt(2.0, 3.0),
        pt(2.0, 1.0),
        pt(1.0, 1.0),
        pt(1.0, 3.0),
        pt(0.0, 3.0),
    ];
    assert!(ray_cast_contains(&u, &pt(0.5, 2.0)));
    assert!(ray_cast_contains(&u, &pt(2.5, 2.0)));
    assert!(!ray_cast_contains(&u, &pt(1.5, 2.0)));
    assert!((shoelace_area(&u) - 7.0).abs() < 1e-12);
}

#[test]
fn centroid_of_square_and_degenerate() {
    let sq = [pt(0.0, 0.0), pt(2.0, 0.0), pt(2.0, 2.0), pt(0.0, 2.0)];
    let c = polygon_area_centroid(&sq).unwrap();
    assert!((c.x - 1.0).abs() < 1e-12 && (c.y - 1.0).abs() < 1e-12);
    let flat = [pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)];
    assert!(polygon_area_centroid(&flat).is_none());
}

#[test]
fn ellipse_equation_is_one_on_axes() {
    let c = pt(1.0, -1.0);
    assert!((ellipse_equation(&c, 2.0, 3.0, &pt(3.0, -1.0)) - 1.0).abs() < 1e-12);
    assert!((ellipse_equation(&c, 2.0, 3.0, &pt(1.0, 2.0)) - 1.0).abs() < 1e-12);
    assert_eq!(ellipse_equation(&c, 2.0, 3.0, &c), 0.0);
}

proptest! {
    #[test]
    fn distance_is_symmetric(
        x1 in -1e3..1e3f64, y1 in -1e3..1e3f64,
        x2 in -1e3..1e3f64, y2 in -1e3..1e3f64
    ) {
        let p = pt(x1, y1);
        let q = pt(x2, y2);
        prop_assert_eq!(p.distance_to(&q), q.distance_to(&p));
        prop_assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn midpoint_on_segment(
        x1 in -1e3..1e3f64, y1 in -1e3..1e3f64,
        x2 in -1e3..1e3f64, y2 in -1e3..1e3f64
    ) {
        let s = Segment::new(pt(x1, y1), pt(x2, y2));
        prop_assert!(s.boundary_contains_eps(&s.midpoint(), 0.01));
    }

    #[test]
    fn perpendicular_offset_leaves_segment(
        x1 in -1e2..1e2f64, y1 in -1e2..1e2f64,
        dx in 0.5..1e2f64, dy in -1e2..1e2f64
    ) {
        let eps = 0.01;
        let s = Segment::new(pt(x1, y1), pt(x1 + dx, y1 + dy));
        let len = s.length();
        // The detour excess reaches eps once the offset d satisfies
        // d² >= (2·len·eps + eps²) / 4; this offset clears that with margin.
        let d = (len * eps).sqrt() + eps;
        let normal = nalgebra::Vector2::new(-dy, dx) / len;
        let off = Point::from(s.midpoint().to_vec() + normal * d);
        prop_assert!(!s.boundary_contains_eps(&off, eps));
    }
}
