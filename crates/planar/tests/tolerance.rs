//! Global tolerance behavior.
//!
//! Lives in its own test binary so that mutating the process-wide default
//! cannot race with the library's unit tests. The checks run sequentially
//! inside a single test for the same reason.

use planar::prelude::*;

#[test]
fn global_tolerance_drives_default_boundary_tests() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    assert_eq!(tolerance(), DEFAULT_TOLERANCE);

    let seg = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    // Detour excess for this probe is 2·√(25 + 0.25) − 10 ≈ 0.0499.
    let probe = Point::new(5.0, 0.5);
    assert!(!seg.boundary_contains(&probe));

    set_tolerance(0.1).unwrap();
    assert_eq!(tolerance(), 0.1);
    assert!(seg.boundary_contains(&probe));

    let square = SquareShape::new(Point::new(0.0, 10.0), 10.0);
    assert!(square.boundary_intersects(&Point::new(5.0, 10.5)));
    // Explicit eps ignores the global.
    assert!(!square.boundary_intersects_eps(&Point::new(5.0, 10.5), 0.01));

    let circle = CircleShape::new(Point::origin(), 1.0).unwrap();
    // eq = 1.1025 misses even the non-strict bound; eq = 1.0816 is within it.
    assert!(!circle.boundary_intersects(&Point::new(1.05, 0.0)));
    assert!(circle.boundary_intersects(&Point::new(1.04, 0.0)));

    // Rejected values leave the current setting in place.
    assert_eq!(
        set_tolerance(-1.0),
        Err(ShapeError::InvalidTolerance { value: -1.0 })
    );
    assert!(set_tolerance(f64::NAN).is_err());
    assert_eq!(tolerance(), 0.1);

    planar::reset_tolerance();
    assert_eq!(tolerance(), DEFAULT_TOLERANCE);
    assert!(!seg.boundary_contains(&probe));
}
