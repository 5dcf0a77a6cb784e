//! Criterion benchmarks for complete searches and single steps.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gridwalk_bench::{first_solvable_seed, open_profile, reference_profile, stress_profile};
use gridwalk_engine::SearchEngine;

fn bench_search_open_10k(c: &mut Criterion) {
    let mut engine = SearchEngine::new(open_profile(42));

    c.bench_function("search_open_10k", |b| {
        b.iter(|| {
            engine.regenerate().unwrap();
            let result = engine.run_to_completion().unwrap();
            black_box(&result);
        });
    });
}

fn bench_search_reference_10k(c: &mut Criterion) {
    let base = reference_profile(0);
    let seed = first_solvable_seed(&base, 0, 1000).expect("no solvable seed in range");
    let mut engine = SearchEngine::new(reference_profile(seed));

    c.bench_function("search_reference_10k", |b| {
        b.iter(|| {
            engine.regenerate().unwrap();
            let result = engine.run_to_completion().unwrap();
            black_box(&result);
        });
    });
}

fn bench_search_stress_100k(c: &mut Criterion) {
    let base = stress_profile(0);
    let seed = first_solvable_seed(&base, 0, 1000).expect("no solvable seed in range");
    let mut engine = SearchEngine::new(stress_profile(seed));

    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("search_stress_100k", |b| {
        b.iter(|| {
            engine.regenerate().unwrap();
            let result = engine.run_to_completion().unwrap();
            black_box(&result);
        });
    });
    group.finish();
}

/// Benchmark: one step taken 500 expansions into an open 100x100 search,
/// where the frontier is wide and every step rescans it.
fn bench_step_wide_frontier(c: &mut Criterion) {
    c.bench_function("step_wide_frontier_10k", |b| {
        b.iter_batched(
            || {
                let mut engine = SearchEngine::new(open_profile(7));
                engine.regenerate().unwrap();
                for _ in 0..500 {
                    engine.step().unwrap();
                }
                engine
            },
            |mut engine| {
                let result = engine.step().unwrap();
                black_box(&result);
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_search_open_10k,
    bench_search_reference_10k,
    bench_search_stress_100k,
    bench_step_wide_frontier
);
criterion_main!(benches);
