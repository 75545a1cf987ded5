//! Error type shared by every module.
//!
//! A single flat enumeration: each variant names the input that was
//! rejected. Nothing in this crate returns partial results alongside an
//! error.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[must_use]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A sieve limit was negative, non-finite, or fractional.
    #[error("invalid sieve limit: {reason}")]
    InvalidLimit { reason: String },

    /// More elements were requested than the population holds.
    #[error("cannot sample {requested} elements from a population of {available}")]
    InvalidSampleSize { requested: usize, available: usize },

    /// A sample size was negative, non-finite, or fractional.
    #[error("invalid sample size: {reason}")]
    InvalidSampleSizeValue { reason: String },

    /// An arithmetic operand was NaN or infinite.
    #[error("invalid input to {operation}: {value}")]
    InvalidInput { operation: &'static str, value: f64 },

    /// Options failed to parse or validate.
    #[error("invalid pool options: {reason}")]
    Config { reason: String },
}
