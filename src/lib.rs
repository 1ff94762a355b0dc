//! Realtime-safe filter primitives with fast trig and numeric helpers.
//!
//! All filters are generic over the sample type (`f32` or `f64`, see
//! [`Real`]) and default to [`FloatT`]. Frequencies are normalised to the
//! sample rate, so 0.5 is Nyquist.

pub mod analysis;
pub mod dsp;
pub mod error;
pub mod maths;
pub mod trig;
pub mod types;

pub use error::{MathError, Result};
pub use types::{FloatT, Real};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        dsp::{
            Biquad, BiquadFilter, EulerFilter, RbjBiquad, RbjKind, StateVariableFilter,
        },
        trig::{exact, fast},
        types::{FloatT, Real},
    };
}
