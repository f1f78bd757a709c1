// ─────────────────────────────────────────────────────────────────────
// Reactor Thermal — Conduction Solver Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use reactor_core::sweep::sweep_wall_temperature;
use reactor_core::{ConductionSolver, ParameterSet};
use reactor_types::config::SlabConfig;
use std::hint::black_box;

/// 1 m slab at dx = 1 cm (101 nodes), sigma ~= 0.32.
fn fine_slab() -> SlabConfig {
    SlabConfig {
        wall_temperature: 120.0,
        time_step: 400.0,
        total_time: 400.0 * 1000.0,
        ..SlabConfig::default()
    }
}

fn bench_conduction_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("conduction_step");
    let params = ParameterSet::new(&fine_slab()).expect("valid parameters");

    group.bench_function("single_step_101_nodes", |b| {
        b.iter_batched(
            || ConductionSolver::new(params.clone()),
            |mut solver| {
                let record = solver.step().expect("step should succeed");
                black_box(record.delivered_heat);
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("solve_1000_steps", |b| {
        b.iter_batched(
            || ConductionSolver::new(params.clone()),
            |mut solver| {
                let result = solver.solve().expect("solve should succeed");
                black_box(result.delivered_heat);
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_wall_sweep(c: &mut Criterion) {
    let walls: Vec<f64> = (0..16).map(|i| 40.0 + 10.0 * i as f64).collect();
    c.bench_function("wall_sweep_16_runs", |b| {
        b.iter(|| {
            let results = sweep_wall_temperature(&fine_slab(), &walls);
            black_box(results.len());
        })
    });
}

criterion_group!(benches, bench_conduction_step, bench_wall_sweep);
criterion_main!(benches);
