//! Scalar helpers: comparisons, range mapping, interpolation, integer maths.
//!
//! Everything here is pure and allocation-free. The filters themselves only
//! rely on the trig module, but host code converting UI parameters into
//! normalised frequencies tends to need exactly these pieces.

use std::ops::{Mul, Sub};

use num_traits::{Float, One, PrimInt, Zero};

use crate::error::{MathError, Result};
use crate::types::Real;

/// Smaller of `a` and `b`. Returns `a` when the two compare equal.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        b
    } else {
        a
    }
}

/// Larger of `a` and `b`.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Limits `x` to `[low, high]`.
///
/// `high` wins when the bounds are inverted, so `clamp(1.0, 1.5, 0.5)` is
/// `0.5` rather than a panic as with `f64::clamp`.
#[inline]
pub fn clamp<T: PartialOrd>(x: T, low: T, high: T) -> T {
    min(max(x, low), high)
}

/// Signum: 1 for positive, -1 for negative, 0 for zero (and NaN).
#[inline]
pub fn sgn<T: PartialOrd + Zero>(x: T) -> i32 {
    let zero = T::zero();
    (x > zero) as i32 - (x < zero) as i32
}

/// Maps `x` from `[x_min, x_max]` onto `[y_min, y_max]` linearly.
///
/// No clamping: values outside the source range extrapolate.
#[inline]
pub fn scale<T: Float>(x: T, x_min: T, x_max: T, y_min: T, y_max: T) -> T {
    y_min + (x - x_min) / (x_max - x_min) * (y_max - y_min)
}

/// `x` raised to the `n`th power by repeated multiplication.
///
/// Cheap for the small exponents it is meant for; cost grows linearly in `n`.
#[inline]
pub fn power<T>(x: T, n: u32) -> T
where
    T: Copy + One + Mul<Output = T>,
{
    let mut result = T::one();
    for _ in 0..n {
        result = result * x;
    }
    result
}

/// `x!` for any primitive integer.
///
/// Negative inputs have no factorial. The product is checked, so an input
/// too large for the type reports overflow instead of wrapping.
pub fn factorial<T: PrimInt>(x: T) -> Result<T> {
    if x < T::zero() {
        return Err(MathError::NegativeFactorial);
    }

    let mut result = T::one();
    let mut n = x;
    while n > T::one() {
        result = result
            .checked_mul(&n)
            .ok_or(MathError::FactorialOverflow)?;
        n = n - T::one();
    }

    Ok(result)
}

/// Floating-point remainder with the sign of the dividend, `x - y·trunc(x/y)`.
#[inline]
pub fn modulo<T: Float>(x: T, y: T) -> T {
    x - y * (x / y).trunc()
}

/// True when `a` and `b` differ by at most `delta`.
///
/// Works for unsigned integers too, the difference is taken larger minus
/// smaller.
#[inline]
pub fn near<T>(a: T, b: T, delta: T) -> bool
where
    T: Copy + PartialOrd + Sub<Output = T>,
{
    let diff = if a > b { a - b } else { b - a };
    diff <= delta
}

/// [`near`] with the default tolerance of 1e-6.
#[inline]
pub fn near_default<T: Real>(a: T, b: T) -> bool {
    near(a, b, T::lit(1e-6))
}

/// Two-point linear interpolation from `a` (x = 0) to `b` (x = 1).
#[inline]
pub fn interpolate<T: Float>(x: T, a: T, b: T) -> T {
    a + (b - a) * x
}

/// Four-point cubic interpolation between `b` (x = 0) and `c` (x = 1).
///
/// `a` precedes `b` and `d` follows `c` in the sequence.
#[inline]
pub fn interpolate4<T: Real>(x: T, a: T, b: T, c: T, d: T) -> T {
    let sixth = T::lit(0.1666667);
    let two = T::lit(2.0);
    let three = T::lit(3.0);
    b + x
        * ((c - b)
            - sixth
                * (T::one() - x)
                * ((d - a - three * (c - b)) * x + (d + two * a - three * b)))
}
