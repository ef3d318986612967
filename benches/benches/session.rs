// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end cost of processing pointer samples through an editor session.

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use cropstage_editor::{EditorConfig, EditorSession};
use kurbo::Point;

fn bench_crop_edge_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/crop_edge_gesture");
    for samples in [64usize, 512] {
        group.throughput(Throughput::Elements(samples as u64));
        group.bench_function(BenchmarkId::from_parameter(samples), |b| {
            b.iter_batched(
                || EditorSession::new(EditorConfig::default()).ok(),
                |session| {
                    let Some(mut session) = session else {
                        return;
                    };
                    let grab = Point::new(499.0, 250.0);
                    let zone = session.zone_at(grab);
                    session.press(grab, zone);
                    for i in 0..samples {
                        session.pointer_move(Point::new(499.0 + i as f64, 250.0));
                    }
                    session.release();
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_image_drag_and_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/image_drag");
    let samples = 256usize;
    group.throughput(Throughput::Elements(samples as u64));
    group.bench_function("move_with_containment", |b| {
        b.iter_batched(
            || {
                let mut session = EditorSession::new(EditorConfig::default()).ok()?;
                session.toggle_active();
                Some(session)
            },
            |session| {
                let Some(mut session) = session else {
                    return;
                };
                let center = session.displayed_image().center();
                session.press(center, session.zone_at(center));
                for i in 0..samples {
                    let t = i as f64 * 0.1;
                    session.pointer_move(Point::new(center.x + 80.0 * t.sin(), center.y));
                }
                session.release();
                session.toggle_active();
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_crop_edge_gesture, bench_image_drag_and_toggle);
criterion_main!(benches);
