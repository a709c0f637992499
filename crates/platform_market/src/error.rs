//! Market data error types.
//!
//! Every failure of a curve or snapshot query surfaces immediately as a
//! [`MarketDataError`]. Variants fall into four kinds, reported by
//! [`MarketDataError::kind`]:
//!
//! - [`ErrorKind::Lookup`]: an identifier the snapshot does not know
//! - [`ErrorKind::Validation`]: malformed input (shapes, ranges, node values)
//! - [`ErrorKind::Temporal`]: an observation the snapshot cannot know yet
//! - [`ErrorKind::NotImplemented`]: an operation a provider does not offer

use crate::curves::CurveType;
use crate::observations::FixingKey;
use platform_core::types::{Currency, Date, InterpolationError, ShapeError};
use thiserror::Error;

/// Broad classification of a [`MarketDataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown curve type, asset, currency or fixing series.
    Lookup,
    /// Malformed input or market data content.
    Validation,
    /// Query for an observation dated after the snapshot.
    Temporal,
    /// Operation not offered by the provider.
    NotImplemented,
}

/// Market data operation errors.
///
/// # Examples
///
/// ```
/// use platform_market::{ErrorKind, MarketDataError};
///
/// let err = MarketDataError::UnknownAsset { asset: "EUR".to_string() };
/// assert_eq!(err.kind(), ErrorKind::Lookup);
/// assert_eq!(err.to_string(), "Unknown asset: EUR");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// No curve of the requested type is registered.
    #[error("No curve of type {curve_type} in this snapshot")]
    CurveNotFound {
        /// Requested curve type
        curve_type: CurveType,
    },

    /// The query context names a different curve than the one queried.
    #[error("Curve type mismatch: context requested {requested}, curve is {actual}")]
    CurveTypeMismatch {
        /// Curve type carried by the context
        requested: CurveType,
        /// Curve type of the queried curve
        actual: CurveType,
    },

    /// Asset outside the snapshot's supported assets.
    #[error("Unknown asset: {asset}")]
    UnknownAsset {
        /// Requested asset identifier
        asset: String,
    },

    /// Currency outside the snapshot's supported currencies.
    #[error("Unsupported currency: {currency}")]
    UnsupportedCurrency {
        /// Requested currency
        currency: Currency,
    },

    /// No fixing series for the (fixing type, tenor) pair.
    #[error("Unknown fixing series: {key}")]
    UnknownFixingSeries {
        /// Requested series
        key: FixingKey,
    },

    /// Supported asset without spot history.
    #[error("No spot history for asset {asset}")]
    NoSpotHistory {
        /// Asset identifier
        asset: String,
    },

    /// Supported asset without a forward curve.
    #[error("No forward curve for asset {asset}")]
    NoForwardCurve {
        /// Asset identifier
        asset: String,
    },

    /// Supported asset without a volatility surface.
    #[error("No volatility surface for asset {asset}")]
    NoVolatilitySurface {
        /// Asset identifier
        asset: String,
    },

    /// Array argument has the wrong length.
    #[error("Shape mismatch in `{argument}`: got length {got}, expected {expected}")]
    ShapeMismatch {
        /// Name of the offending argument
        argument: &'static str,
        /// Length supplied
        got: usize,
        /// Length required
        expected: usize,
    },

    /// Date outside the range a curve can answer for.
    #[error("Date {date} in `{argument}` outside curve range [{min}, {max}]")]
    DateOutOfRange {
        /// Name of the offending argument
        argument: &'static str,
        /// Offending date
        date: Date,
        /// First supported date (valuation date)
        min: Date,
        /// Last supported date (last node)
        max: Date,
    },

    /// Accrual period with a non-positive year fraction.
    #[error("Invalid accrual period: end {end} is not after start {start}")]
    InvalidAccrualPeriod {
        /// Start of the period
        start: Date,
        /// End of the period
        end: Date,
    },

    /// Curve node data violates curve invariants.
    #[error("Invalid curve nodes: {0}")]
    InvalidNodes(String),

    /// Observation history violates series invariants.
    #[error("Invalid observations for {series}: {reason}")]
    InvalidObservations {
        /// Series name
        series: String,
        /// What is wrong
        reason: String,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (non-positive or non-finite).
    #[error("Invalid volatility: {vol}")]
    InvalidVolatility {
        /// The invalid volatility value
        vol: f64,
    },

    /// Query point outside valid domain.
    #[error("Out of bounds: {x} not in [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(InterpolationError),

    /// Snapshot content contradicts itself.
    #[error("Inconsistent market data: {0}")]
    Inconsistent(String),

    /// Snapshot description could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Observation requested after the snapshot's valuation date.
    #[error("Observation of {series} on {date} is after the valuation date {valuation_date}")]
    FutureObservation {
        /// Series name
        series: String,
        /// Requested date
        date: Date,
        /// Snapshot valuation date
        valuation_date: Date,
    },

    /// No observation on or before the requested date.
    #[error("No observation of {series} on or before {date}")]
    MissingObservation {
        /// Series name
        series: String,
        /// Requested date
        date: Date,
    },

    /// Operation not offered by this provider.
    #[error("{operation} is not implemented by this market data provider")]
    NotImplemented {
        /// Name of the operation
        operation: &'static str,
    },
}

impl MarketDataError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        use MarketDataError::*;
        match self {
            CurveNotFound { .. }
            | CurveTypeMismatch { .. }
            | UnknownAsset { .. }
            | UnsupportedCurrency { .. }
            | UnknownFixingSeries { .. }
            | NoSpotHistory { .. }
            | NoForwardCurve { .. }
            | NoVolatilitySurface { .. } => ErrorKind::Lookup,
            FutureObservation { .. } | MissingObservation { .. } => ErrorKind::Temporal,
            NotImplemented { .. } => ErrorKind::NotImplemented,
            ShapeMismatch { .. }
            | DateOutOfRange { .. }
            | InvalidAccrualPeriod { .. }
            | InvalidNodes(_)
            | InvalidObservations { .. }
            | InvalidStrike { .. }
            | InvalidExpiry { .. }
            | InvalidVolatility { .. }
            | OutOfBounds { .. }
            | InsufficientData { .. }
            | Interpolation(_)
            | Inconsistent(_)
            | Config(_) => ErrorKind::Validation,
        }
    }

    /// Converts a broadcast failure between two named arguments.
    pub(crate) fn from_shape(argument: &'static str, err: ShapeError) -> Self {
        match err {
            ShapeError::Incompatible { left, right } => MarketDataError::ShapeMismatch {
                argument,
                got: right,
                expected: left,
            },
        }
    }
}

impl From<InterpolationError> for MarketDataError {
    fn from(err: InterpolationError) -> Self {
        match err {
            InterpolationError::OutOfBounds { x, min, max } => {
                MarketDataError::OutOfBounds { x, min, max }
            }
            InterpolationError::InsufficientData { got, need } => {
                MarketDataError::InsufficientData { got, need }
            }
            other => MarketDataError::Interpolation(other),
        }
    }
}
