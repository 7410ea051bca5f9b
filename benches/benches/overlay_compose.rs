// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use keyhole_model::{Registry, hit_test};
use keyhole_overlay::{Rgba, compose};
use kurbo::{Point, Rect};

/// An n×n grid of holes: rects, rounded rects, and foreign content mixed.
fn grid_registry(n: usize, cell: f64) -> Registry<u32> {
    let mut registry = Registry::new();
    for y in 0..n {
        for x in 0..n {
            let i = y * n + x;
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            let rect = Rect::new(x0, y0, x0 + cell * 0.8, y0 + cell * 0.8);
            match i % 4 {
                0 => {
                    registry.add_foreign(i as u32, rect);
                }
                1 => {
                    registry.add_rounded_rect(rect, cell * 0.2);
                }
                _ => {
                    registry.add_rect(rect);
                }
            }
        }
    }
    registry
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    for n in [8_usize, 32, 64] {
        let registry = grid_registry(n, 16.0);
        let side = n as f64 * 16.0;
        // Bounds cover half the grid so clamping work is exercised too.
        let bounds = Rect::new(0.0, 0.0, side / 2.0, side);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_{n}x{n}"), |b| {
            b.iter(|| compose(black_box(&registry), black_box(bounds), Rgba::DIM));
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    for n in [8_usize, 32, 64] {
        let registry = grid_registry(n, 16.0);
        let side = n as f64 * 16.0;
        let points = [
            Point::new(4.0, 4.0),
            Point::new(side / 2.0, side / 2.0),
            Point::new(side - 4.0, side - 4.0),
            Point::new(side + 50.0, side + 50.0), // guaranteed miss
        ];
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_{n}x{n}"), |b| {
            b.iter(|| {
                for p in points {
                    black_box(hit_test(black_box(&registry), p));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compose, bench_hit_test);
criterion_main!(benches);
