// Copyright 2025 the Storm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use storm_grid::{CanvasEngine, GridConfig};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self, span: f64) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        let unit = (self.0 >> 11) as f64 / (1_u64 << 53) as f64;
        (unit * 2.0 - 1.0) * span
    }
}

fn pointer_samples(len: usize) -> Vec<(f64, f64)> {
    let mut rng = Lcg::new(0x5eed);
    (0..len)
        .map(|_| (rng.next_f64(4_000.0), rng.next_f64(4_000.0)))
        .collect()
}

fn bench_snap_to_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/snap_to_grid");

    for cell in [1_u32, 25, 50, 800] {
        let config = GridConfig::with_cell_size(cell);
        let samples = pointer_samples(4_096);
        group.throughput(Throughput::Elements(samples.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(cell), &samples, |b, samples| {
            let snapper = config.snapper();
            b.iter(|| {
                for &(x, y) in samples {
                    black_box(snapper.snap_to_grid(black_box(x), black_box(y)).ok());
                }
            });
        });
    }

    group.finish();
}

fn bench_engine_interaction(c: &mut Criterion) {
    let mut engine = CanvasEngine::new();
    engine.init();
    let samples = pointer_samples(1_024);

    c.bench_function("grid/engine_stroke", |b| {
        b.iter(|| {
            for &(x, y) in &samples {
                black_box(engine.snap_to_grid(x, y).ok());
            }
        });
    });

    c.bench_function("grid/snap_rect_center", |b| {
        b.iter(|| {
            for &(x, y) in &samples {
                let note = Rect::new(x, y, x + 100.0, y + 50.0);
                black_box(engine.snap_rect_center(black_box(note)).ok());
            }
        });
    });

    c.bench_function("grid/grid_lines_4k", |b| {
        b.iter(|| black_box(engine.grid_lines(3_840).map(Iterator::count).ok()));
    });
}

criterion_group!(benches, bench_snap_to_grid, bench_engine_interaction);
criterion_main!(benches);
