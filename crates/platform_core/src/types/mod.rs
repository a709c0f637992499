//! Core time, tenor, currency and precision types.
//!
//! This module provides:
//! - `time`: `Date`, `DayCountConvention`, `DayCountFn`
//! - `period`: tenor descriptors (`Period`, `PeriodUnit`)
//! - `currency`: ISO 4217 currency codes
//! - `dtype`: numeric precision tags (`Dtype`, `FloatDtype`)
//! - `error`: structured error types for the above and for interpolation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod currency;
pub mod dtype;
pub mod error;
pub mod period;
pub mod time;

// Re-export commonly used types at module level
pub use currency::Currency;
pub use dtype::{Dtype, FloatDtype};
pub use error::{
    CurrencyError, DateError, DayCountError, InterpolationError, PeriodError, ShapeError,
};
pub use period::{Period, PeriodUnit};
pub use time::{Date, DayCountConvention, DayCountFn};
