//! Benchmarks for the Euler and state-variable filters.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use idsp::dsp::{EulerFilter, StateVariableFilter};

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_euler(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/euler");

    for &size in BLOCK_SIZES {
        let input = test_signal(size);

        let mut filter = EulerFilter::<f64>::new();
        filter.set_cutoff(0.02);
        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in &input {
                    filter.process(black_box(x));
                    acc += filter.lowpass();
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

pub fn bench_svf(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/svf");

    for &size in BLOCK_SIZES {
        let input = test_signal(size);

        let mut filter = StateVariableFilter::<f64>::with_params(0.02, 0.7);
        group.bench_with_input(BenchmarkId::new("all_outputs", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in &input {
                    filter.process(black_box(x));
                    acc += filter.notch() + filter.bandpass();
                }
                black_box(acc)
            })
        });

        let mut filter = StateVariableFilter::<f32>::with_params(0.02, 0.7);
        let input32: Vec<f32> = input.iter().map(|&x| x as f32).collect();
        group.bench_with_input(BenchmarkId::new("f32", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for &x in &input32 {
                    filter.process(black_box(x));
                    acc += filter.lowpass();
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}
