//! Benchmarks for the filter primitives.
//!
//! Run with: cargo bench
//!
//! Every filter processes one sample at a time; the benches push whole blocks
//! through to show the per-block cost against real-time deadlines.
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - dsp/*   Per-sample filter processing
//!   - trig/*  Fast vs exact trig

use criterion::{criterion_group, criterion_main};

mod dsp;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

/// Sawtooth-like ramp used as input by every filter bench.
pub fn test_signal(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| (i as f64 / size as f64) * 2.0 - 1.0)
        .collect()
}

criterion_group!(
    benches,
    dsp::bench_euler,
    dsp::bench_svf,
    dsp::bench_biquad,
    dsp::bench_trig,
);
criterion_main!(benches);
