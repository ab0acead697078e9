//! Error types for non-uniform binning
//!
//! Provides a unified error type for all fastbin crates. Construction
//! failures are reported as [`ValidationError`], out-of-range lookups as
//! [`IndexError`]; both convert into [`Error`].

use thiserror::Error;

/// Rejection of a boundary sequence at construction time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Fewer boundaries than needed to delimit a single bin
    #[error("Too few boundaries: expected at least {expected}, got {actual}")]
    TooFewBoundaries { expected: usize, actual: usize },

    /// Adjacent pair that is not strictly increasing
    #[error("Boundaries must be strictly increasing: found {previous} >= {current} at index {index}")]
    NotStrictlyIncreasing {
        /// Index of the second value of the offending pair
        index: usize,
        previous: f64,
        current: f64,
    },

    /// NaN or infinite boundary
    #[error("Boundary {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    /// The uniform cell width is not a positive finite number
    #[error("Degenerate boundary range [{first}, {last}]: uniform bin width {width} is unusable")]
    DegenerateRange { first: f64, last: f64, width: f64 },
}

/// Out-of-range boundary or bin lookup
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Index {index} out of range for length {len}")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// Core error type for binning operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Boundary sequence rejected
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Index outside the valid range
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a bin count of zero
    pub fn zero_bins() -> Self {
        Self::InvalidParameter("number of bins must be at least 1".to_string())
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }
}
