//! Criterion benchmarks for the 2D LP engine.
//! Focus sizes: m in {4, 10, 20, 50}.
//! Results: by default under target/criterion; to store elsewhere, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p lptrace

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lptrace::prelude::*;

fn instance(m: usize, seed: u64) -> (Vec<Constraint>, Objective) {
    draw_instance(
        InstanceCfg {
            constraint_count: m,
            ..InstanceCfg::default()
        },
        ReplayToken {
            seed,
            index: m as u64,
        },
    )
}

fn bench_lp2(c: &mut Criterion) {
    let mut group = c.benchmark_group("lp2");
    for &m in &[4usize, 10, 20, 50] {
        group.bench_with_input(BenchmarkId::new("feasible_vertices", m), &m, |b, &m| {
            b.iter_batched(
                || instance(m, 43),
                |(cons, _)| {
                    let _verts = feasible_vertices(&cons, LpCfg::default());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("solve_simplex", m), &m, |b, &m| {
            b.iter_batched(
                || instance(m, 44),
                |(cons, objective)| {
                    let _trace = solve_simplex(&cons, &objective, LpCfg::default());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lp2);
criterion_main!(benches);
