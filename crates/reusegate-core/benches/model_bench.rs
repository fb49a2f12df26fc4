//! # Model Benchmarks
//!
//! Run with: `cargo bench -p reusegate-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use reusegate_core::{
    BreakEvenInputs, CadenceInputs, ChartFrame, ReferenceScenario, SweepRange, compute_break_even,
    compute_cadence, compute_n_eff, sweep_range,
};
use std::hint::black_box;

fn bench_n_eff(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_eff");

    for n in [1_i64, 10, 1_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| compute_n_eff(black_box(0.95), black_box(n)));
        });
    }

    group.finish();
}

fn bench_gates(c: &mut Criterion) {
    let break_even = BreakEvenInputs::reference();
    let cadence = CadenceInputs::reference();

    c.bench_function("break_even", |b| {
        b.iter(|| compute_break_even(black_box(&break_even)));
    });
    c.bench_function("cadence", |b| {
        b.iter(|| compute_cadence(black_box(&cadence)));
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let inputs = BreakEvenInputs::reference();

    for step in [0.05, 0.01, 0.001].iter() {
        let Ok(range) = SweepRange::new(0.5, 1.0, *step) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(step), &range, |b, range| {
            b.iter(|| {
                let points = sweep_range(black_box(&inputs), range);
                black_box(ChartFrame::fit(&points))
            });
        });
    }

    group.finish();
}

fn bench_scenario(c: &mut Criterion) {
    let scenario = ReferenceScenario::default();
    c.bench_function("scenario_evaluate", |b| {
        b.iter(|| black_box(&scenario).evaluate());
    });
}

criterion_group!(benches, bench_n_eff, bench_gates, bench_sweep, bench_scenario);
criterion_main!(benches);
