//! Walk through the reference scenarios and print each shape's measurements.
//!
//! Usage:
//!   cargo run -p planar --example shape_tour

use planar::prelude::*;

fn describe(name: &str, shape: &AnyShape, probes: &[Point]) {
    let perimeter = match shape.perimeter() {
        Ok(p) => format!("{p:.2}"),
        Err(e) => format!("n/a ({e})"),
    };
    println!("{name}: area={:.2} perimeter={perimeter}", shape.area());
    for p in probes {
        println!(
            "  ({:>5.1}, {:>5.1}) inside={} on_boundary={}",
            p.x,
            p.y,
            shape.contains(p),
            shape.boundary_intersects(p)
        );
    }
}

fn main() -> Result<(), ShapeError> {
    let seg = Segment::new(Point::new(1.0, 1.0), Point::new(5.0, 5.0));
    println!(
        "segment: length={:.2} has(3,3)={} has(3,4)={}",
        seg.length(),
        seg.boundary_contains(&Point::new(3.0, 3.0)),
        seg.boundary_contains(&Point::new(3.0, 4.0))
    );

    let tri = TriangleShape::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(20.0, 5.0));
    describe("triangle", &tri.into(), &[Point::new(5.0, 6.0), Point::new(5.0, 2.0)]);

    let rect = RectangleShape::new(Point::new(0.0, 20.0), Point::new(30.0, 0.0));
    describe("rectangle", &rect.into(), &[Point::new(10.0, 10.0), Point::new(10.0, 21.0)]);

    let square = SquareShape::new(Point::new(0.0, 10.0), 10.0);
    describe("square", &square.into(), &[Point::new(5.0, 10.0), Point::new(5.0, 5.0)]);

    let ellipse = EllipseShape::new(Point::origin(), 1.0, 20.0)?;
    describe("ellipse", &ellipse.into(), &[Point::origin(), Point::new(10.0, 10.0)]);

    let circle = CircleShape::new(Point::origin(), 10.0)?;
    println!("circle diameter={:.1}", circle.diameter());
    describe("circle", &circle.into(), &[Point::new(1.0, 1.0), Point::new(10.0, 10.0)]);

    let poly = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed: 2025, index: 0 })?;
    println!(
        "random polygon: n={} winding={:?} centroid={:?}",
        poly.vertex_count(),
        poly.winding(),
        poly.centroid()
    );
    describe("random polygon", &poly.into(), &[Point::origin()]);
    Ok(())
}
