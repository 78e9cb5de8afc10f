//! Criterion benchmarks for point queries against polygons and ellipses.
//! Focus sizes: vertex counts n in {4, 16, 64, 256}.
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::polygon::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use planar::{EllipseShape, Point, SegmentedShape, Shape};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn radial_polygon(n: usize, seed: u64) -> SegmentedShape {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, ReplayToken { seed, index: 0 }).expect("n >= 3")
}

fn random_probe(rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5))
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[4usize, 16, 64, 256] {
        let poly = radial_polygon(n, 43);
        let mut rng = StdRng::seed_from_u64(7);

        group.bench_with_input(BenchmarkId::new("contains", n), &poly, |b, poly| {
            b.iter_batched(
                || random_probe(&mut rng),
                |p| poly.contains(&p),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("boundary_intersects", n), &poly, |b, poly| {
            b.iter_batched(
                || random_probe(&mut rng),
                |p| poly.boundary_intersects_eps(&p, 1e-3),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("area", n), &poly, |b, poly| {
            b.iter(|| poly.area())
        });
    }
    group.finish();
}

fn bench_ellipse(c: &mut Criterion) {
    let e = EllipseShape::new(Point::origin(), 1.0, 0.5).expect("positive axes");
    let mut rng = StdRng::seed_from_u64(11);
    c.bench_function("ellipse/contains", |b| {
        b.iter_batched(
            || random_probe(&mut rng),
            |p| e.contains(&p),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_polygon, bench_ellipse);
criterion_main!(benches);
