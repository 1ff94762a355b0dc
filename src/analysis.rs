//! Measuring what a filter actually does.
//!
//! `BiquadFilter::frequency_response` evaluates the transfer function on
//! paper. The helpers here measure the same thing from the outside: feed an
//! impulse through any per-sample process function, take the FFT of what
//! comes out, and read off the magnitude per bin. For a stable filter whose
//! impulse response has decayed within the captured length both views agree.
//!
//! Not realtime code: everything here allocates.

use rustfft::{num_complex::Complex, FftNum, FftPlanner};

use crate::types::Real;

/// Magnitude of a filter at one normalised frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsePoint<T> {
    pub freq: T,
    pub magnitude: T,
}

/// Runs a unit impulse followed by `len - 1` zeros through `process`.
pub fn impulse_response<T, F>(len: usize, mut process: F) -> Vec<T>
where
    T: Real,
    F: FnMut(T) -> T,
{
    (0..len)
        .map(|n| process(if n == 0 { T::one() } else { T::zero() }))
        .collect()
}

/// FFT magnitude of `impulse`, zero-padded to the next power of two.
///
/// Returns the bins from DC up to and including Nyquist, each tagged with its
/// normalised frequency k / N.
pub fn magnitude_response<T>(impulse: &[T]) -> Vec<ResponsePoint<T>>
where
    T: Real + FftNum,
{
    let fft_len = impulse.len().max(2).next_power_of_two();

    let mut buffer: Vec<Complex<T>> = impulse
        .iter()
        .map(|&x| Complex::new(x, T::zero()))
        .collect();
    buffer.resize(fft_len, Complex::new(T::zero(), T::zero()));

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_len);
    fft.process(&mut buffer);

    let len = T::lit(fft_len as f64);
    buffer
        .iter()
        .take(fft_len / 2 + 1)
        .enumerate()
        .map(|(k, bin)| ResponsePoint {
            freq: T::lit(k as f64) / len,
            magnitude: bin.norm(),
        })
        .collect()
}

/// Amplitude ratio in decibels, floored at -240 dB so silence stays finite.
#[inline]
pub fn decibels<T: Real>(magnitude: T) -> T {
    T::lit(20.0) * magnitude.max(T::lit(1e-12)).log10()
}
