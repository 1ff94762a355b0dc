//! Benchmarks comparing the Padé approximants with the std functions.

use std::hint::black_box;

use criterion::Criterion;
use idsp::trig::{exact, fast};

pub fn bench_trig(c: &mut Criterion) {
    let mut group = c.benchmark_group("trig");
    let xs: Vec<f64> = (0..256).map(|i| -1.5 + 3.0 * i as f64 / 255.0).collect();

    group.bench_function("fast_sin", |b| {
        b.iter(|| xs.iter().map(|&x| fast::sin(black_box(x))).sum::<f64>())
    });
    group.bench_function("exact_sin", |b| {
        b.iter(|| xs.iter().map(|&x| exact::sin(black_box(x))).sum::<f64>())
    });
    group.bench_function("fast_tanh", |b| {
        b.iter(|| xs.iter().map(|&x| fast::tanh(black_box(x))).sum::<f64>())
    });
    group.bench_function("exact_tanh", |b| {
        b.iter(|| xs.iter().map(|&x| exact::tanh(black_box(x))).sum::<f64>())
    });

    group.finish();
}
