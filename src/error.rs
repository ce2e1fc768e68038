//! Error types for the percolation model and experiment driver.

use std::fmt;

/// Errors raised by precondition violations.
///
/// Both kinds signal a caller bug rather than a transient condition, so
/// nothing in the crate retries on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// A size or count parameter is outside its permitted domain
    /// (grid size `n < 1`, trial count `< 1`, or `n² + 1` overflowing `usize`).
    InvalidArgument(String),

    /// An index or coordinate lies outside the valid range.
    OutOfRange {
        /// What was being indexed (`"row"`, `"col"`, `"element"`).
        what: &'static str,
        value: usize,
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },
}

impl PercolationError {
    pub(crate) fn out_of_range(what: &'static str, value: usize, min: usize, max: usize) -> Self {
        PercolationError::OutOfRange {
            what,
            value,
            min,
            max,
        }
    }
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercolationError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            PercolationError::OutOfRange {
                what,
                value,
                min,
                max,
            } => write!(
                f,
                "{} {} out of range: expected {}..={}",
                what, value, min, max
            ),
        }
    }
}

impl std::error::Error for PercolationError {}
