// ============================================================================
// Numeric Errors
// Failure kinds for fixed-point arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point arithmetic operations.
///
/// A result that is nonzero but smaller than one unit (10^-18) is not an
/// error: `exp2` and `exp` report it as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathError {
    /// A precondition was violated (e.g. logarithm of a non-positive number)
    InvalidArgument,
    /// Result or a required intermediate does not fit in 256 bits
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Input string or value is invalid
    InvalidInput,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidArgument => {
                write!(f, "invalid argument: operation precondition violated")
            },
            MathError::Overflow => {
                write!(f, "arithmetic overflow: result outside the representable range")
            },
            MathError::DivisionByZero => write!(f, "division by zero"),
            MathError::InvalidInput => write!(f, "invalid input: could not parse value"),
            MathError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for MathError {}

/// Result type alias for numeric operations
pub type MathResult<T> = Result<T, MathError>;

/// Record a rejected operation and hand the error back for propagation.
#[inline]
pub(crate) fn reject(op: &'static str, error: MathError) -> MathError {
    tracing::debug!(op, %error, "fixed-point operation rejected");
    error
}
