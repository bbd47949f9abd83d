//! Error type shared by input parsing and the run entry points.
//!
//! All errors are precondition violations detected before recursion begins:
//! a failed run aborts cleanly with no partial trace in the caller-visible
//! result. There is no fatal/recoverable distinction and no retry.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Token count does not match the expected input shape
    /// (odd coordinate count, or not exactly two integer operands).
    #[error("invalid input shape: {0}")]
    InvalidInputShape(String),

    /// A whitespace-separated token failed to parse as a number.
    #[error("invalid numeric literal '{0}'")]
    InvalidNumericLiteral(String),

    /// Closest pair is undefined for fewer than two points.
    #[error("closest pair needs at least 2 points, got {0}")]
    InsufficientPoints(usize),

    /// A point coordinate was NaN or infinite.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
}
