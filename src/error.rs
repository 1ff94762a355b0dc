//! Error types for the numeric helpers.
//!
//! Filters never return errors: degenerate parameters are preconditions and
//! show up as inf/NaN samples. Only the integer helpers can fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("cannot take the factorial of a negative number")]
    NegativeFactorial,

    #[error("factorial overflows the integer type")]
    FactorialOverflow,
}

/// Result type for fallible numeric helpers.
pub type Result<T> = std::result::Result<T, MathError>;
