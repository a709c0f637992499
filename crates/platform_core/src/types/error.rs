//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction, parsing and shifting
//! - `DayCountError`: Unknown day count convention names
//! - `PeriodError`: Malformed tenor strings
//! - `CurrencyError`: Errors from currency parsing
//! - `InterpolationError`: Errors from interpolation operations
//! - `ShapeError`: Incompatible batch lengths

use thiserror::Error;

/// Date-related errors.
///
/// # Examples
/// ```
/// use platform_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Shifting a date left the representable range.
    #[error("Date overflow: {date} shifted by {shift}")]
    Overflow {
        /// Date being shifted
        date: String,
        /// Requested shift
        shift: String,
    },
}

/// Day count convention errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DayCountError {
    /// Unrecognised convention name.
    #[error("Unknown day count convention: {0}")]
    Unknown(String),
}

/// Tenor / period parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// String is not of the form `<amount><D|W|M|Y>`.
    #[error("Invalid period: {0:?} (expected e.g. 1D, 2W, 3M, 1Y)")]
    Parse(String),
}

/// Currency-related errors.
///
/// # Examples
/// ```
/// use platform_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Interpolation-related errors.
///
/// # Examples
/// ```
/// use platform_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Abscissae are not strictly increasing.
    #[error("Data is not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Batch shape errors.
///
/// Batches are one-dimensional; two batches are compatible when their
/// lengths are equal or one of them has length 1.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Lengths cannot be broadcast against each other.
    #[error("Cannot broadcast batch of length {left} against batch of length {right}")]
    Incompatible {
        /// Length of the left batch
        left: usize,
        /// Length of the right batch
        right: usize,
    },
}
