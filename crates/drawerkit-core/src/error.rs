//! Error types for DrawerKit core validation and parsing.
//!
//! All validation failures are raised at the point of construction or
//! parsing, never deferred into the generation phase, so a caller can
//! reject an entire request before any rendering work begins.

use thiserror::Error;

/// Errors produced by unit parsing and input validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The textual dimension could not be parsed.
    #[error("invalid dimension format: '{input}'")]
    InvalidDimension {
        /// The rejected input string.
        input: String,
    },

    /// A value that must be strictly positive was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// The name of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// A physical dimension is below the domain minimum.
    #[error("{field} must be at least {minimum_mm}mm, got {value}mm")]
    TooSmall {
        /// The name of the offending field.
        field: String,
        /// The minimum acceptable value in millimeters.
        minimum_mm: f64,
        /// The rejected value in millimeters.
        value: f64,
    },

    /// A unit count is below one.
    #[error("{field} must be at least 1 unit, got {value}")]
    TooFewUnits {
        /// The name of the offending field.
        field: String,
        /// The rejected unit count.
        value: u32,
    },

    /// A value exceeds its sanity ceiling.
    #[error("{field} must be no more than {maximum_mm}mm, got {value}mm")]
    OutOfRange {
        /// The name of the offending field.
        field: String,
        /// The maximum acceptable value in millimeters.
        maximum_mm: f64,
        /// The rejected value in millimeters.
        value: f64,
    },

    /// The requested file format is not supported.
    #[error("unsupported file format '{format}', must be one of: {valid}")]
    UnsupportedFormat {
        /// The rejected format string.
        format: String,
        /// Comma-separated list of supported formats.
        valid: String,
    },
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
