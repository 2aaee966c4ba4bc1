//! Criterion benchmarks for the intersection family.
//! Inputs come from the seeded sampler so runs are comparable.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use planar::sample::{draw_circle, draw_line, draw_rect, Bounds2, ReplayToken};
use planar::{Line, Point, Rect};

fn bench_intersections(c: &mut Criterion) {
    let bounds = Bounds2::centered(50.0);
    let mut group = c.benchmark_group("intersect");

    group.bench_function("line_line", |b| {
        let mut tok = ReplayToken::new(11, 0);
        b.iter_batched(
            || {
                tok = tok.next().next();
                (draw_line(tok, bounds), draw_line(tok.next(), bounds))
            },
            |(l1, l2)| l1.zip(l2).and_then(|(l1, l2)| l1.intersection(&l2)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("line_circle", |b| {
        let mut tok = ReplayToken::new(12, 0);
        b.iter_batched(
            || {
                tok = tok.next().next();
                (draw_circle(tok, bounds), draw_line(tok.next(), bounds))
            },
            |(circle, line)| line.map(|l| circle.intersection(&l)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("line_rect", |b| {
        let mut tok = ReplayToken::new(13, 0);
        b.iter_batched(
            || {
                tok = tok.next().next();
                (draw_rect(tok, bounds), draw_line(tok.next(), bounds))
            },
            |(rect, line)| rect.zip(line).map(|(r, l)| r.intersection(&l)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("rect_from_three", |b| {
        let tl = Point::new(-3.0, 1.0);
        let br = Point::new(4.0, -2.0);
        let center = tl.midpoint(&br);
        let r = center.distance(&tl);
        let third = Point::new(center.x + r * 0.3f64.cos(), center.y + r * 0.3f64.sin());
        b.iter(|| Rect::from_three(tl, br, third))
    });

    group.bench_function("x_at", |b| {
        let l = Line::through(Point::new(0.0, 0.0), Point::new(3.0, 7.0));
        b.iter(|| l.x_at(criterion::black_box(2.5)))
    });

    group.finish();
}

criterion_group!(benches, bench_intersections);
criterion_main!(benches);
