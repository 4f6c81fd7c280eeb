//! Benchmarks for Black-Scholes price and Greeks

use bs_pricer::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_price(c: &mut Criterion) {
    let params = OptionParams::new(100.0, 105.0, 0.5, 0.05, 0.25);

    c.bench_function("bs_price_call", |b| {
        b.iter(|| bs_price(black_box(&params), OptionType::Call))
    });
}

fn benchmark_greeks(c: &mut Criterion) {
    let params = OptionParams::new(100.0, 105.0, 0.5, 0.05, 0.25);

    c.bench_function("bs_greeks_call", |b| {
        b.iter(|| bs_greeks(black_box(&params), OptionType::Call))
    });
}

fn benchmark_spot_sweep(c: &mut Criterion) {
    c.bench_function("bs_greeks_spot_sweep_100", |b| {
        b.iter(|| {
            for i in 0..100 {
                let spot = 50.0 + i as f64;
                let params = OptionParams::new(spot, 100.0, 1.0, 0.05, 0.20);
                let _ = bs_greeks(black_box(&params), OptionType::Put);
            }
        })
    });
}

criterion_group!(benches, benchmark_price, benchmark_greeks, benchmark_spot_sweep);
criterion_main!(benches);
