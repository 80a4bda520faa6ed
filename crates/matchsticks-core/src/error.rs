//! Error types for rate parsing.
//!
//! The tick and withdraw operations never fail: invalid numeric inputs
//! are normalized (see [`crate::normalize`]). Only textual rate specs,
//! which have no sensible default for garbage input, report errors.

use thiserror::Error;

/// Errors from parsing a [`RateSpec`](crate::RateSpec) from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRateError {
    /// The input was empty (or only a `+` sign).
    #[error("rate spec is empty")]
    Empty,
    /// A component was not an unsigned integer.
    #[error("invalid rate value '{value}'")]
    InvalidNumber {
        /// The offending component, trimmed.
        value: String,
    },
    /// A component was zero; rates must be positive.
    #[error("rate must be positive")]
    NotPositive,
    /// A range had its lower bound above its upper bound.
    #[error("rate range {min}-{max} is inverted")]
    InvertedRange {
        /// Parsed lower bound.
        min: u64,
        /// Parsed upper bound.
        max: u64,
    },
}
