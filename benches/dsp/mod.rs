//! Benchmarks for the filter primitives.

mod biquad;
mod filter;
mod trig;

pub use biquad::bench_biquad;
pub use filter::{bench_euler, bench_svf};
pub use trig::bench_trig;
