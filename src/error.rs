//! Error types for benchmark configuration and verification.
//!
//! Kernel preconditions (equal slice lengths) are not represented here: they
//! are programming errors and panic at the call site.

use thiserror::Error;

/// Result type alias for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Vector length was zero
    #[error("vector length must be positive")]
    ZeroLength,

    /// Trial count was zero
    #[error("trial count must be positive")]
    ZeroTrials,

    /// Ramp starting at `start` would not fit in i16 for `length` elements
    #[error("ramp starting at {start} with {length} elements exceeds the i16 range")]
    RampOverflow { start: i16, length: usize },

    /// A flag value could not be parsed
    #[error("invalid value '{value}' for {flag}")]
    InvalidArgument { flag: &'static str, value: String },

    /// A flag that expects a value was last on the command line
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Kernel filter named a variant that does not exist
    #[error("unknown kernel '{0}'")]
    UnknownKernel(String),

    /// A kernel disagreed with the scalar reference
    #[error("kernel '{label}' failed verification at length {length}: expected {expected}, got {actual}")]
    Mismatch {
        label: &'static str,
        length: usize,
        expected: i32,
        actual: i32,
    },
}
