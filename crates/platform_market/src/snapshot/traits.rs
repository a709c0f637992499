//! Processed market data trait definition.

use crate::curves::{CurveType, SharedRateCurve};
use crate::error::MarketDataError;
use crate::surfaces::SharedVolSurface;
use chrono::NaiveTime;
use platform_core::types::{Currency, Date, Dtype, FloatDtype, Period};

/// Market data as seen by pricing code at one point in time.
///
/// Implementations are read-only views: queries never change what later
/// queries return, and every value is as of [`date`](Self::date) and
/// [`time`](Self::time). Observations dated after [`date`](Self::date) are
/// never served.
///
/// Live feeds, historical snapshots and calibration scratch data are all
/// providers of this trait and are interchangeable behind
/// `&dyn ProcessedMarketData<T>`.
///
/// Providers without volatility surfaces or asset forward curves keep the
/// default methods, which fail with `NotImplemented`.
pub trait ProcessedMarketData<T: FloatDtype>: Send + Sync {
    /// Valuation date of the market data.
    fn date(&self) -> Date;

    /// Valuation time of the market data.
    fn time(&self) -> NaiveTime;

    /// Rate curve of the given type.
    ///
    /// # Errors
    ///
    /// * `UnsupportedCurrency` - The curve type's currency is not supported
    /// * `UnknownAsset` - An asset forward curve type for an unsupported asset
    /// * `CurveNotFound` - No curve of that type
    fn yield_curve(&self, curve_type: &CurveType) -> Result<SharedRateCurve<T>, MarketDataError>;

    /// Published fixings of `fixing_type` at `tenor`, as of each date.
    ///
    /// # Errors
    ///
    /// * `UnknownFixingSeries` - No series for `(fixing_type, tenor)`
    /// * `FutureObservation` - A date after [`date`](Self::date)
    /// * `MissingObservation` - A date before the first fixing
    fn fixings(
        &self,
        dates: &[Date],
        fixing_type: &str,
        tenor: Period,
    ) -> Result<Vec<T>, MarketDataError>;

    /// Spot prices of `asset`, as of each date.
    ///
    /// # Errors
    ///
    /// * `UnknownAsset` - `asset` is not supported
    /// * `NoSpotHistory` - Supported asset without recorded spots
    /// * `FutureObservation` - A date after [`date`](Self::date)
    /// * `MissingObservation` - A date before the first recorded spot
    fn spot(&self, asset: &str, dates: &[Date]) -> Result<Vec<T>, MarketDataError>;

    /// Volatility surface of `asset`.
    fn volatility_surface(&self, asset: &str) -> Result<SharedVolSurface<T>, MarketDataError> {
        let _ = asset;
        Err(MarketDataError::NotImplemented {
            operation: "volatility_surface",
        })
    }

    /// Forward curve of `asset`.
    fn forward_curve(&self, asset: &str) -> Result<SharedRateCurve<T>, MarketDataError> {
        let _ = asset;
        Err(MarketDataError::NotImplemented {
            operation: "forward_curve",
        })
    }

    /// Currencies with market data.
    fn supported_currencies(&self) -> &[Currency];

    /// Assets with market data.
    fn supported_assets(&self) -> &[String];

    /// Numeric precision of returned values.
    fn dtype(&self) -> Dtype {
        T::DTYPE
    }
}
