//! Filter primitives.
//!
//! Every filter here is a small `Copy` value holding a few scalars of state.
//! Nothing allocates and nothing locks, so they can live directly inside a
//! voice or channel struct on the audio thread. Use one instance per channel.

/// Second-order IIR core and the `BiquadFilter` extension point.
pub mod biquad;
/// Single-pole Euler filter and the Chamberlin state-variable filter.
pub mod filter;
/// Cookbook EQ shapes built on the biquad core.
pub mod rbj;

pub use biquad::{Biquad, BiquadFilter, Coefficients};
pub use filter::{EulerFilter, StateVariableFilter};
pub use rbj::{RbjBiquad, RbjKind};
