//! # platform_market: Market Data Contracts for the Pricing Platform
//!
//! ## Layer 2 (Market Data) Role
//!
//! platform_market sits on top of `platform_core` and defines how pricing
//! code sees market data:
//! - Rate curves: `RateCurve`, `InterpolatedRateCurve`, `CurveType` (`curves`)
//! - Market data views: `ProcessedMarketData`, `MarketDataSnapshot` (`snapshot`)
//! - Spot and fixing histories: `ObservationSeries`, `FixingKey` (`observations`)
//! - Volatility surfaces: `VolatilitySurface`, `FlatVol`, `InterpolatedVolSurface` (`surfaces`)
//! - TOML snapshot descriptions: `SnapshotConfig` (`config`)
//! - Error types: `MarketDataError`, `ErrorKind` (`error`)
//!
//! All queries are batched over dates and fail as a whole on the first
//! invalid input. Nothing is clamped or extrapolated silently.
//!
//! ## Usage Examples
//!
//! ```rust
//! use platform_core::types::{Currency, Date, Period};
//! use platform_market::config::SnapshotConfig;
//! use platform_market::curves::{CurveContext, CurveType, RateCurve};
//! use platform_market::snapshot::ProcessedMarketData;
//!
//! let config = SnapshotConfig::from_toml_str(r#"
//!     date = "2021-01-04"
//!     currencies = ["USD"]
//!
//!     [[curves]]
//!     curve_type = "USD"
//!     dates = ["2021-06-04", "2022-01-04"]
//!     discount_factors = [0.999, 0.995]
//!
//!     [[fixings]]
//!     fixing_type = "LIBOR"
//!     tenor = "3M"
//!     history = [{ date = "2020-12-31", value = 0.0024 }]
//! "#).unwrap();
//! let market = config.build::<f64>().unwrap();
//!
//! let curve = market.yield_curve(&CurveType::RiskFree(Currency::USD)).unwrap();
//! let node = Date::from_ymd(2021, 6, 4).unwrap();
//! assert_eq!(curve.discount_factor(&[node], &CurveContext::none()).unwrap(), vec![0.999]);
//!
//! let later = Date::from_ymd(2021, 1, 5).unwrap();
//! assert!(market.fixings(&[later], "LIBOR", "3M".parse::<Period>().unwrap()).is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Evaluate date batches of at least [`PARALLEL_THRESHOLD`] elements with rayon

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod batch;
pub mod config;
pub mod curves;
pub mod error;
pub mod observations;
pub mod snapshot;
pub mod surfaces;

pub use batch::PARALLEL_THRESHOLD;
pub use error::{ErrorKind, MarketDataError};
