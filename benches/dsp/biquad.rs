//! Benchmarks for the biquad core and its response evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use idsp::dsp::{BiquadFilter, RbjBiquad, RbjKind};

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_biquad(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/biquad");

    for &size in BLOCK_SIZES {
        let input = test_signal(size);

        for kind in [RbjKind::LowPass, RbjKind::Peaking] {
            let param = if kind.uses_gain() { 6.0 } else { 0.707 };
            let mut filter = RbjBiquad::<f64>::with_params(kind, 0.02, param);
            let mut buffer = input.clone();
            group.bench_with_input(BenchmarkId::new(kind.to_string(), size), &size, |b, _| {
                b.iter(|| {
                    buffer.copy_from_slice(&input);
                    for sample in buffer.iter_mut() {
                        *sample = filter.process(black_box(*sample));
                    }
                })
            });
        }
    }

    let mut filter = RbjBiquad::<f64>::new(RbjKind::HighShelf);
    group.bench_function("set_params", |b| {
        b.iter(|| filter.set_params(black_box(0.1), black_box(-3.0)))
    });

    let filter = RbjBiquad::<f64>::lowpass(0.1, 0.707);
    group.bench_function("frequency_response", |b| {
        b.iter(|| filter.frequency_response(black_box(0.2)))
    });

    group.finish();
}
