//! Criterion benchmarks for complete solver runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ripple_bench::{random_profile, reference_profile, stress_profile};
use ripple_engine::{ExecutionMode, Solver};

fn bench_solve_reference(c: &mut Criterion) {
    let p = reference_profile();
    let solver = Solver::new(p.config()).unwrap();
    c.bench_function("solve_1k_sequential", |b| {
        b.iter(|| {
            let report = solver.solve(&p.graph, p.source, p.destination).unwrap();
            black_box(report);
        });
    });
}

fn bench_solve_reference_parallel(c: &mut Criterion) {
    let p = reference_profile();
    let config = p
        .config()
        .with_execution(ExecutionMode::Parallel { workers: None });
    let solver = Solver::new(config).unwrap();
    c.bench_function("solve_1k_parallel", |b| {
        b.iter(|| {
            let report = solver.solve(&p.graph, p.source, p.destination).unwrap();
            black_box(report);
        });
    });
}

fn bench_solve_stress(c: &mut Criterion) {
    let p = stress_profile();
    let solver = Solver::new(
        p.config()
            .with_execution(ExecutionMode::Parallel { workers: None }),
    )
    .unwrap();
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("solve_9k_parallel", |b| {
        b.iter(|| {
            let report = solver.solve(&p.graph, p.source, p.destination).unwrap();
            black_box(report);
        });
    });
    group.finish();
}

fn bench_solve_random(c: &mut Criterion) {
    let profiles: Vec<_> = (0..8).map(random_profile).collect();
    c.bench_function("solve_random_64x8", |b| {
        b.iter(|| {
            for p in &profiles {
                let solver = Solver::new(p.config()).unwrap();
                black_box(solver.solve(&p.graph, p.source, p.destination).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_solve_reference,
    bench_solve_reference_parallel,
    bench_solve_stress,
    bench_solve_random
);
criterion_main!(benches);
