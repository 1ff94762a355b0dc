//! Element types shared by every filter and helper in the crate.

use std::fmt::Debug;

use num_traits::{Float, FloatConst};

/// Default floating-point element type.
///
/// Double precision unless the `f32` feature is enabled. Every filter takes
/// its element type as a parameter defaulting to this alias, so both
/// precisions can be instantiated side by side.
#[cfg(not(feature = "f32"))]
pub type FloatT = f64;

/// Default floating-point element type.
#[cfg(feature = "f32")]
pub type FloatT = f32;

/// Floating-point sample type the filters are generic over.
///
/// Implemented for `f32` and `f64`. `lit` converts an `f64` literal into the
/// element type, which keeps coefficient formulas readable without fallible
/// `NumCast` conversions.
pub trait Real: Float + FloatConst + Default + Debug + Send + Sync + 'static {
    fn lit(value: f64) -> Self;
}

impl Real for f32 {
    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn lit(value: f64) -> Self {
        value
    }
}
