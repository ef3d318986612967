// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use cropstage_resize::{Constraints, Corner, DragMode, Edge, Resizer};
use cropstage_zoom::{ZoomSync, cover};
use kurbo::{Point, Rect};

/// Deterministic pointer path sweeping around a box.
fn pointer_path(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.37;
            Point::new(300.0 + 400.0 * t.cos(), 250.0 + 300.0 * (t * 1.3).sin())
        })
        .collect()
}

fn bench_resize_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize/modes");
    let resizer = Resizer::default();
    let prev = Rect::new(100.0, 100.0, 500.0, 400.0);
    let inner = Rect::new(150.0, 150.0, 450.0, 350.0);
    let path = pointer_path(1_024);
    group.throughput(Throughput::Elements(path.len() as u64));

    let cases = [
        ("move", DragMode::Move, Constraints::NONE.with_inner(inner)),
        (
            "corner_free",
            DragMode::Corner(Corner::TopLeft),
            Constraints::NONE,
        ),
        (
            "corner_aspect",
            DragMode::Corner(Corner::BottomRight),
            Constraints::NONE.with_aspect(16.0 / 9.0).with_inner(inner),
        ),
        (
            "edge_aspect",
            DragMode::Edge(Edge::Left),
            Constraints::NONE.with_aspect(16.0 / 9.0),
        ),
    ];
    for (name, mode, constraints) in cases {
        group.bench_with_input(BenchmarkId::new(name, path.len()), &path, |b, path| {
            b.iter(|| {
                for &point in path {
                    black_box(resizer.apply(mode, black_box(prev), point, &constraints));
                }
            });
        });
    }
    group.finish();
}

fn bench_zoom_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/sync_edge");
    let crop = Rect::new(100.0, 100.0, 500.0, 400.0);
    let base = cover(crop, 5120.0 / 2880.0);

    for steps in [16usize, 256] {
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_function(BenchmarkId::new("right_edge_out", steps), |b| {
            b.iter(|| {
                let mut zoom = ZoomSync::new();
                zoom.begin_gesture(zoom.displayed(base));
                for i in 0..steps {
                    let right = 500.0 + 4.0 * (i + 1) as f64;
                    let next = Rect::new(crop.x0, crop.y0, right, crop.y1);
                    black_box(zoom.sync_edge(base, next, Edge::Right));
                }
                black_box(zoom.commit(base))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resize_modes, bench_zoom_sync);
criterion_main!(benches);
