//! Performance benchmarks for dca-risk
//!
//! Run with: `cargo bench`
//! View results: `open target/criterion/report/index.html`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dca_risk::engine;
use dca_risk::StrategyParams;

fn benchmark_run(c: &mut Criterion) {
    let small = StrategyParams::default();
    let large = StrategyParams {
        pip_step: 5.0,
        first_volume: 0.1,
        volume_exponent: 1.2,
        max_positions: 50,
        max_drawdown_pips: 10_000.0,
        pip_value: 10.0,
    };

    c.bench_function("run_default", |b| {
        b.iter(|| engine::run(black_box(&small)).unwrap())
    });
    c.bench_function("run_max_ladder", |b| {
        b.iter(|| engine::run(black_box(&large)).unwrap())
    });
}

criterion_group!(benches, benchmark_run);
criterion_main!(benches);
