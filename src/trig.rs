//! Trigonometric functions, exact and approximated.

/*
Padé Approximants
=================

A Padé approximant replaces a transcendental function with a ratio of two
polynomials, num(x) / den(x), chosen so its Taylor expansion matches the
function's up to a high order around x = 0. Compared with a truncated
Taylor series of the same cost it stays accurate much further from the
expansion point, which is what makes it useful for per-sample coefficient
math.

All six functions here only ever see x², so each one costs a handful of
multiply-adds and a single division.

Accuracy (against the exact functions, double precision)
-----------------------------------------------------

    function          |x| <= 1      |x| <= π/2     |x| <= π
    sin / sinh        ~1e-12        ~1e-9          ~1e-5
    cos / cosh        ~1e-11        ~1e-8          ~1e-4
    tan               ~1e-11        (pole)         (pole)
    tanh              ~1e-12        ~1e-9          ~1e-6

Callers that need the full unit circle should evaluate at half the angle and
square the resulting phasor, see `dsp::biquad`.
*/

/// Exact trig functions, forwarding to the platform implementation.
pub mod exact {
    use num_traits::Float;

    #[inline]
    pub fn sin<T: Float>(x: T) -> T {
        x.sin()
    }

    #[inline]
    pub fn cos<T: Float>(x: T) -> T {
        x.cos()
    }

    #[inline]
    pub fn tan<T: Float>(x: T) -> T {
        x.tan()
    }

    #[inline]
    pub fn sinh<T: Float>(x: T) -> T {
        x.sinh()
    }

    #[inline]
    pub fn cosh<T: Float>(x: T) -> T {
        x.cosh()
    }

    #[inline]
    pub fn tanh<T: Float>(x: T) -> T {
        x.tanh()
    }
}

/// Fast Padé approximations of the trig functions.
pub mod fast {
    use crate::types::Real;

    /// Padé approximant of the sine function.
    #[inline]
    pub fn sin<T: Real>(x: T) -> T {
        let x2 = x * x;
        let num = -x
            * (T::lit(-11511339840.0)
                + x2 * (T::lit(1640635920.0) + x2 * (T::lit(-52785432.0) + x2 * T::lit(479249.0))));
        let den = T::lit(11511339840.0)
            + x2 * (T::lit(277920720.0) + x2 * (T::lit(3177720.0) + x2 * T::lit(18361.0)));
        num / den
    }

    /// Padé approximant of the cosine function.
    #[inline]
    pub fn cos<T: Real>(x: T) -> T {
        let x2 = x * x;
        let num = -(T::lit(-39251520.0)
            + x2 * (T::lit(18471600.0) + x2 * (T::lit(-1075032.0) + T::lit(14615.0) * x2)));
        let den = T::lit(39251520.0)
            + x2 * (T::lit(1154160.0) + x2 * (T::lit(16632.0) + x2 * T::lit(127.0)));
        num / den
    }

    /// Padé approximant of the tangent function.
    #[inline]
    pub fn tan<T: Real>(x: T) -> T {
        let x2 = x * x;
        let num = x * (T::lit(-135135.0) + x2 * (T::lit(17325.0) + x2 * (T::lit(-378.0) + x2)));
        let den = T::lit(-135135.0)
            + x2 * (T::lit(62370.0) + x2 * (T::lit(-3150.0) + T::lit(28.0) * x2));
        num / den
    }

    /// Padé approximant of the hyperbolic sine function.
    #[inline]
    pub fn sinh<T: Real>(x: T) -> T {
        let x2 = x * x;
        let num = -x
            * (T::lit(11511339840.0)
                + x2 * (T::lit(1640635920.0) + x2 * (T::lit(52785432.0) + x2 * T::lit(479249.0))));
        let den = T::lit(-11511339840.0)
            + x2 * (T::lit(277920720.0) + x2 * (T::lit(-3177720.0) + x2 * T::lit(18361.0)));
        num / den
    }

    /// Padé approximant of the hyperbolic cosine function.
    #[inline]
    pub fn cosh<T: Real>(x: T) -> T {
        let x2 = x * x;
        let num = -(T::lit(39251520.0)
            + x2 * (T::lit(18471600.0) + x2 * (T::lit(1075032.0) + T::lit(14615.0) * x2)));
        let den = T::lit(-39251520.0)
            + x2 * (T::lit(1154160.0) + x2 * (T::lit(-16632.0) + T::lit(127.0) * x2));
        num / den
    }

    /// Padé approximant of the hyperbolic tangent function.
    #[inline]
    pub fn tanh<T: Real>(x: T) -> T {
        let x2 = x * x;
        let num = x * (T::lit(135135.0) + x2 * (T::lit(17325.0) + x2 * (T::lit(378.0) + x2)));
        let den = T::lit(135135.0)
            + x2 * (T::lit(62370.0) + x2 * (T::lit(3150.0) + T::lit(28.0) * x2));
        num / den
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TEST_VAL: f64 = 0.5;
    const ERR_DELTA: f64 = 1e-6;

    fn sweep(limit: f64) -> impl Iterator<Item = f64> {
        (0..=2000).map(move |i| -limit + 2.0 * limit * i as f64 / 2000.0)
    }

    #[test]
    fn test_exact_matches_std() {
        assert_eq!(exact::sin(TEST_VAL), TEST_VAL.sin());
        assert_eq!(exact::cos(TEST_VAL), TEST_VAL.cos());
        assert_eq!(exact::tan(TEST_VAL), TEST_VAL.tan());
        assert_eq!(exact::sinh(TEST_VAL), TEST_VAL.sinh());
        assert_eq!(exact::cosh(TEST_VAL), TEST_VAL.cosh());
        assert_eq!(exact::tanh(TEST_VAL), TEST_VAL.tanh());
    }

    #[test]
    fn test_fast_at_half() {
        assert!((fast::sin(TEST_VAL) - 0.479_425_538_604_203).abs() < ERR_DELTA);
        assert!((fast::cos(TEST_VAL) - TEST_VAL.cos()).abs() < ERR_DELTA);
        assert!((fast::tan(TEST_VAL) - TEST_VAL.tan()).abs() < ERR_DELTA);
        assert!((fast::sinh(TEST_VAL) - TEST_VAL.sinh()).abs() < ERR_DELTA);
        assert!((fast::cosh(TEST_VAL) - TEST_VAL.cosh()).abs() < ERR_DELTA);
        assert!((fast::tanh(TEST_VAL) - TEST_VAL.tanh()).abs() < ERR_DELTA);
    }

    #[test]
    fn test_fast_accurate_over_half_circle() {
        for x in sweep(FRAC_PI_2) {
            assert!((fast::sin(x) - x.sin()).abs() < ERR_DELTA, "sin({x})");
            assert!((fast::cos(x) - x.cos()).abs() < ERR_DELTA, "cos({x})");
            assert!((fast::sinh(x) - x.sinh()).abs() < ERR_DELTA, "sinh({x})");
            assert!((fast::cosh(x) - x.cosh()).abs() < ERR_DELTA, "cosh({x})");
            assert!((fast::tanh(x) - x.tanh()).abs() < ERR_DELTA, "tanh({x})");
        }
        for x in sweep(1.0) {
            assert!((fast::tan(x) - x.tan()).abs() < ERR_DELTA, "tan({x})");
        }
    }

    #[test]
    fn test_fast_degrades_gracefully_to_pi() {
        for x in sweep(PI) {
            assert!((fast::sin(x) - x.sin()).abs() < 1e-4, "sin({x})");
            assert!((fast::cos(x) - x.cos()).abs() < 1e-3, "cos({x})");
        }
    }

    #[test]
    fn test_fast_single_precision() {
        let x = 0.5f32;
        assert!((fast::sin(x) - x.sin()).abs() < 1e-6);
        assert!((fast::cos(x) - x.cos()).abs() < 1e-6);
    }

    #[quickcheck]
    fn prop_fast_sin_is_odd(x: f64) -> TestResult {
        if !x.is_finite() || x.abs() > 10.0 {
            return TestResult::discard();
        }
        TestResult::from_bool(fast::sin(-x) == -fast::sin(x))
    }
}
