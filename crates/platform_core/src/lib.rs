//! # platform_core: Foundation Types for the Pricing Platform
//!
//! ## Layer 1 (Foundation) Role
//!
//! platform_core is the bottom layer of the workspace, providing:
//! - Time types: `Date`, `DayCountConvention`, `DayCountFn` (`types::time`)
//! - Tenors: `Period` (`types::period`)
//! - Currency types: `Currency` (`types::currency`)
//! - Numeric precision tags: `Dtype`, `FloatDtype` (`types::dtype`)
//! - Error types: `DateError`, `CurrencyError`, `InterpolationError`, `ShapeError` (`types::error`)
//! - Interpolators and 1D batch broadcasting (`math`)
//!
//! Market data contracts (`RateCurve`, `ProcessedMarketData`) live one layer
//! up in `platform_market` and use these types as opaque keys.
//!
//! ## Usage Examples
//!
//! ```rust
//! use platform_core::types::{Currency, Date, DayCountConvention, Period};
//!
//! let valuation = Date::from_ymd(2021, 1, 4).unwrap();
//! let maturity = valuation.add_period("6M".parse::<Period>().unwrap()).unwrap();
//!
//! let yf = DayCountConvention::Actual360.year_fraction(valuation, maturity);
//! assert!((yf - 181.0 / 360.0).abs() < 1e-12);
//!
//! assert_eq!(Currency::USD.code(), "USD");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, Currency, Period, DayCountConvention, Dtype

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
