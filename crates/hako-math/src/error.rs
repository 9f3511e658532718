//! Domain errors for the fallible math operations.

use thiserror::Error;

/// Error type for the few vector operations that are not total.
///
/// Most of the math surface is total and infallible; only scalar division
/// and the length-dependent operations (normalization, angles) can fail,
/// and they fail loudly instead of letting `NaN`/`inf` leak downstream.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A zero-length (or sub-[`EPSILON`](crate::EPSILON)) vector was passed
    /// to an operation that requires a measurable direction.
    #[error("degenerate zero-length vector")]
    DegenerateVector,
    /// Componentwise division by a zero scalar.
    #[error("division by zero scalar")]
    DivisionByZero,
}
