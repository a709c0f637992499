//! In-memory market data snapshot.

use super::ProcessedMarketData;
use crate::curves::{CurveSet, CurveType, RateCurve, SharedRateCurve};
use crate::error::MarketDataError;
use crate::observations::{FixingKey, ObservationSeries};
use crate::surfaces::{SharedVolSurface, VolatilitySurface};
use chrono::NaiveTime;
use platform_core::types::{Currency, Date, FloatDtype, Period};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Immutable market data captured at one valuation date and time.
///
/// Built with [`MarketDataSnapshot::builder`], which checks that every
/// curve, spot history, forward curve and surface belongs to a supported
/// currency or asset and is consistent with the snapshot date.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use platform_core::types::{Currency, Date, DayCountConvention};
/// use platform_market::curves::{CurveContext, CurveType, InterpolatedRateCurve, InterpolationMethod};
/// use platform_market::snapshot::{MarketDataSnapshot, ProcessedMarketData};
///
/// let date = Date::from_ymd(2021, 1, 4).unwrap();
/// let usd = CurveType::RiskFree(Currency::USD);
/// let curve = InterpolatedRateCurve::new(
///     usd.clone(),
///     date,
///     &[Date::from_ymd(2021, 6, 4).unwrap(), Date::from_ymd(2022, 1, 4).unwrap()],
///     &[0.999_f64, 0.995],
///     DayCountConvention::Actual365Fixed,
///     InterpolationMethod::ConstantForward,
/// )
/// .unwrap();
///
/// let snapshot = MarketDataSnapshot::builder(date, NaiveTime::from_hms_opt(17, 0, 0).unwrap())
///     .currencies([Currency::USD])
///     .with_yield_curve(curve)
///     .build()
///     .unwrap();
///
/// let curve = snapshot.yield_curve(&usd).unwrap();
/// let df = curve
///     .discount_factor(&[Date::from_ymd(2021, 6, 4).unwrap()], &CurveContext::none())
///     .unwrap();
/// assert_eq!(df, vec![0.999]);
/// assert!(snapshot.spot("EUR", &[date]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MarketDataSnapshot<T: FloatDtype> {
    date: Date,
    time: NaiveTime,
    currencies: Vec<Currency>,
    assets: Vec<String>,
    curves: CurveSet<T>,
    forward_curves: BTreeMap<String, SharedRateCurve<T>>,
    spots: BTreeMap<String, ObservationSeries<T>>,
    fixings: BTreeMap<FixingKey, ObservationSeries<T>>,
    surfaces: BTreeMap<String, SharedVolSurface<T>>,
}

impl<T: FloatDtype> MarketDataSnapshot<T> {
    /// Start building a snapshot for the given valuation date and time.
    pub fn builder(date: Date, time: NaiveTime) -> MarketDataSnapshotBuilder<T> {
        MarketDataSnapshotBuilder::new(date, time)
    }

    /// Registered yield curves.
    #[inline]
    pub fn curves(&self) -> &CurveSet<T> {
        &self.curves
    }

    /// Registered fixing series keys in order.
    pub fn fixing_keys(&self) -> impl Iterator<Item = &FixingKey> {
        self.fixings.keys()
    }

    /// Fixing series by key.
    pub fn fixing_series(&self, key: &FixingKey) -> Option<&ObservationSeries<T>> {
        self.fixings.get(key)
    }

    /// Spot history of an asset.
    pub fn spot_series(&self, asset: &str) -> Option<&ObservationSeries<T>> {
        self.spots.get(asset)
    }

    /// Assets with a forward curve, in order.
    pub fn forward_curve_assets(&self) -> impl Iterator<Item = &str> {
        self.forward_curves.keys().map(String::as_str)
    }

    /// Assets with a volatility surface, in order.
    pub fn volatility_surface_assets(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }

    fn check_asset(&self, asset: &str) -> Result<(), MarketDataError> {
        if self.assets.iter().any(|a| a == asset) {
            Ok(())
        } else {
            Err(MarketDataError::UnknownAsset {
                asset: asset.to_string(),
            })
        }
    }

    /// As-of lookup that refuses dates after the snapshot date.
    fn as_of(&self, series: &ObservationSeries<T>, dates: &[Date]) -> Result<Vec<T>, MarketDataError> {
        if let Some(&date) = dates.iter().find(|&&d| d > self.date) {
            return Err(MarketDataError::FutureObservation {
                series: series.name().to_string(),
                date,
                valuation_date: self.date,
            });
        }
        series.values_at(dates)
    }
}

impl<T: FloatDtype> ProcessedMarketData<T> for MarketDataSnapshot<T> {
    #[inline]
    fn date(&self) -> Date {
        self.date
    }

    #[inline]
    fn time(&self) -> NaiveTime {
        self.time
    }

    fn yield_curve(&self, curve_type: &CurveType) -> Result<SharedRateCurve<T>, MarketDataError> {
        if let Some(currency) = curve_type.currency() {
            if !self.currencies.contains(&currency) {
                return Err(MarketDataError::UnsupportedCurrency { currency });
            }
        }
        if let CurveType::AssetForward(asset) = curve_type {
            self.check_asset(asset)?;
            return self
                .forward_curves
                .get(asset)
                .cloned()
                .ok_or_else(|| MarketDataError::CurveNotFound {
                    curve_type: curve_type.clone(),
                });
        }
        self.curves.get_or_err(curve_type)
    }

    fn fixings(
        &self,
        dates: &[Date],
        fixing_type: &str,
        tenor: Period,
    ) -> Result<Vec<T>, MarketDataError> {
        let key = FixingKey::new(fixing_type, tenor);
        let series = self
            .fixings
            .get(&key)
            .ok_or(MarketDataError::UnknownFixingSeries { key })?;
        self.as_of(series, dates)
    }

    fn spot(&self, asset: &str, dates: &[Date]) -> Result<Vec<T>, MarketDataError> {
        self.check_asset(asset)?;
        let series = self
            .spots
            .get(asset)
            .ok_or_else(|| MarketDataError::NoSpotHistory {
                asset: asset.to_string(),
            })?;
        self.as_of(series, dates)
    }

    fn volatility_surface(&self, asset: &str) -> Result<SharedVolSurface<T>, MarketDataError> {
        self.check_asset(asset)?;
        self.surfaces
            .get(asset)
            .cloned()
            .ok_or_else(|| MarketDataError::NoVolatilitySurface {
                asset: asset.to_string(),
            })
    }

    fn forward_curve(&self, asset: &str) -> Result<SharedRateCurve<T>, MarketDataError> {
        self.check_asset(asset)?;
        self.forward_curves
            .get(asset)
            .cloned()
            .ok_or_else(|| MarketDataError::NoForwardCurve {
                asset: asset.to_string(),
            })
    }

    #[inline]
    fn supported_currencies(&self) -> &[Currency] {
        &self.currencies
    }

    #[inline]
    fn supported_assets(&self) -> &[String] {
        &self.assets
    }
}

/// Builder for [`MarketDataSnapshot`].
///
/// Content is collected as given; all validation happens in
/// [`build`](Self::build).
#[derive(Debug)]
pub struct MarketDataSnapshotBuilder<T: FloatDtype> {
    date: Date,
    time: NaiveTime,
    currencies: Vec<Currency>,
    assets: Vec<String>,
    curves: Vec<SharedRateCurve<T>>,
    forward_curves: Vec<(String, SharedRateCurve<T>)>,
    spots: Vec<(String, Vec<(Date, T)>)>,
    fixings: Vec<(FixingKey, Vec<(Date, T)>)>,
    surfaces: Vec<(String, SharedVolSurface<T>)>,
}

impl<T: FloatDtype> MarketDataSnapshotBuilder<T> {
    fn new(date: Date, time: NaiveTime) -> Self {
        Self {
            date,
            time,
            currencies: Vec::new(),
            assets: Vec::new(),
            curves: Vec::new(),
            forward_curves: Vec::new(),
            spots: Vec::new(),
            fixings: Vec::new(),
            surfaces: Vec::new(),
        }
    }

    /// Add supported currencies.
    pub fn currencies(mut self, currencies: impl IntoIterator<Item = Currency>) -> Self {
        self.currencies.extend(currencies);
        self
    }

    /// Add supported assets.
    pub fn assets<S: Into<String>>(mut self, assets: impl IntoIterator<Item = S>) -> Self {
        self.assets.extend(assets.into_iter().map(Into::into));
        self
    }

    /// Register a yield curve under its own curve type.
    ///
    /// An [`CurveType::AssetForward`] curve is registered as the forward
    /// curve of its asset, as if added with
    /// [`with_forward_curve`](Self::with_forward_curve).
    pub fn with_yield_curve<C: RateCurve<T> + 'static>(self, curve: C) -> Self {
        self.with_shared_yield_curve(Arc::new(curve))
    }

    /// Register an already shared yield curve.
    pub fn with_shared_yield_curve(mut self, curve: SharedRateCurve<T>) -> Self {
        self.curves.push(curve);
        self
    }

    /// Register the forward curve of an asset.
    ///
    /// The curve type must be [`CurveType::AssetForward`] of the same asset.
    pub fn with_forward_curve<C: RateCurve<T> + 'static>(
        mut self,
        asset: impl Into<String>,
        curve: C,
    ) -> Self {
        self.forward_curves.push((asset.into(), Arc::new(curve)));
        self
    }

    /// Register the spot history of an asset.
    pub fn with_spot_history(mut self, asset: impl Into<String>, points: Vec<(Date, T)>) -> Self {
        self.spots.push((asset.into(), points));
        self
    }

    /// Register a fixing series.
    pub fn with_fixings(
        mut self,
        fixing_type: impl Into<String>,
        tenor: Period,
        points: Vec<(Date, T)>,
    ) -> Self {
        self.fixings.push((FixingKey::new(fixing_type, tenor), points));
        self
    }

    /// Register the volatility surface of an asset.
    pub fn with_volatility_surface<S: VolatilitySurface<T> + 'static>(
        mut self,
        asset: impl Into<String>,
        surface: S,
    ) -> Self {
        self.surfaces.push((asset.into(), Arc::new(surface)));
        self
    }

    /// Validate the collected content and build the snapshot.
    ///
    /// # Returns
    ///
    /// * `Err(MarketDataError::UnsupportedCurrency)` - A curve in an unsupported currency
    /// * `Err(MarketDataError::UnknownAsset)` - Asset data for an unsupported asset
    /// * `Err(MarketDataError::Inconsistent)` - Duplicate entries, a curve valued on
    ///   another date, or a forward curve registered under the wrong asset
    /// * `Err(MarketDataError::InvalidObservations)` - Malformed spot or fixing history
    /// * `Err(MarketDataError::FutureObservation)` - An observation after the snapshot date
    pub fn build(self) -> Result<MarketDataSnapshot<T>, MarketDataError> {
        let date = self.date;

        let mut currencies: Vec<Currency> = Vec::with_capacity(self.currencies.len());
        for currency in self.currencies {
            if !currencies.contains(&currency) {
                currencies.push(currency);
            }
        }
        let mut assets: Vec<String> = Vec::with_capacity(self.assets.len());
        for asset in self.assets {
            if asset.trim().is_empty() {
                return Err(rejected(MarketDataError::Inconsistent(
                    "empty asset identifier".to_string(),
                )));
            }
            if !assets.contains(&asset) {
                assets.push(asset);
            }
        }
        let check_asset = |asset: &str| {
            if assets.iter().any(|a| a == asset) {
                Ok(())
            } else {
                Err(rejected(MarketDataError::UnknownAsset {
                    asset: asset.to_string(),
                }))
            }
        };

        let mut curves = CurveSet::new();
        let mut forward_entries = Vec::with_capacity(self.forward_curves.len());
        for curve in self.curves {
            let curve_type = curve.curve_type().clone();
            // Asset forward curves live in one place whichever way they were added
            if let CurveType::AssetForward(asset) = &curve_type {
                forward_entries.push((asset.clone(), curve));
                continue;
            }
            if let Some(currency) = curve_type.currency() {
                if !currencies.contains(&currency) {
                    return Err(rejected(MarketDataError::UnsupportedCurrency { currency }));
                }
            }
            check_valuation_date(curve.as_ref(), date)?;
            if curves.insert_shared(curve).is_some() {
                return Err(rejected(MarketDataError::Inconsistent(format!(
                    "duplicate curve {}",
                    curve_type
                ))));
            }
        }

        let mut forward_curves = BTreeMap::new();
        forward_entries.extend(self.forward_curves);
        for (asset, curve) in forward_entries {
            check_asset(&asset)?;
            let expected = CurveType::AssetForward(asset.clone());
            if curve.curve_type() != &expected {
                return Err(rejected(MarketDataError::Inconsistent(format!(
                    "forward curve for {} has curve type {}, expected {}",
                    asset,
                    curve.curve_type(),
                    expected
                ))));
            }
            check_valuation_date(curve.as_ref(), date)?;
            if forward_curves.insert(asset.clone(), curve).is_some() {
                return Err(rejected(MarketDataError::Inconsistent(format!(
                    "duplicate forward curve for {}",
                    asset
                ))));
            }
        }

        let mut spots = BTreeMap::new();
        for (asset, points) in self.spots {
            check_asset(&asset)?;
            let series = observed_series(asset.clone(), points, date)?;
            if spots.insert(asset.clone(), series).is_some() {
                return Err(rejected(MarketDataError::Inconsistent(format!(
                    "duplicate spot history for {}",
                    asset
                ))));
            }
        }

        let mut fixings = BTreeMap::new();
        for (key, points) in self.fixings {
            let series = observed_series(key.to_string(), points, date)?;
            if fixings.insert(key.clone(), series).is_some() {
                return Err(rejected(MarketDataError::Inconsistent(format!(
                    "duplicate fixing series {}",
                    key
                ))));
            }
        }

        let mut surfaces = BTreeMap::new();
        for (asset, surface) in self.surfaces {
            check_asset(&asset)?;
            if surfaces.insert(asset.clone(), surface).is_some() {
                return Err(rejected(MarketDataError::Inconsistent(format!(
                    "duplicate volatility surface for {}",
                    asset
                ))));
            }
        }

        info!(
            date = %date,
            time = %self.time,
            currencies = currencies.len(),
            assets = assets.len(),
            curves = curves.len(),
            forward_curves = forward_curves.len(),
            fixings = fixings.len(),
            surfaces = surfaces.len(),
            "market data snapshot built"
        );

        Ok(MarketDataSnapshot {
            date,
            time: self.time,
            currencies,
            assets,
            curves,
            forward_curves,
            spots,
            fixings,
            surfaces,
        })
    }
}

fn rejected(err: MarketDataError) -> MarketDataError {
    warn!(error = %err, "market data snapshot rejected");
    err
}

fn check_valuation_date<T: FloatDtype>(
    curve: &dyn RateCurve<T>,
    date: Date,
) -> Result<(), MarketDataError> {
    if curve.valuation_date() != date {
        return Err(rejected(MarketDataError::Inconsistent(format!(
            "curve {} is valued on {}, snapshot date is {}",
            curve.curve_type(),
            curve.valuation_date(),
            date
        ))));
    }
    Ok(())
}

/// Observation series that holds nothing dated after `date`.
fn observed_series<T: FloatDtype>(
    name: String,
    points: Vec<(Date, T)>,
    date: Date,
) -> Result<ObservationSeries<T>, MarketDataError> {
    let series = ObservationSeries::new(name, points).map_err(rejected)?;
    if series.last_date() > date {
        return Err(rejected(MarketDataError::FutureObservation {
            series: series.name().to_string(),
            date: series.last_date(),
            valuation_date: date,
        }));
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{CurveContext, InterpolatedRateCurve, InterpolationMethod, RateIndexType};
    use crate::error::ErrorKind;
    use crate::surfaces::FlatVol;
    use platform_core::types::{DayCountConvention, Dtype};

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn valuation() -> Date {
        d(2021, 1, 4)
    }

    fn curve(curve_type: CurveType, on: Date) -> InterpolatedRateCurve<f64> {
        InterpolatedRateCurve::new(
            curve_type,
            on,
            &[d(2021, 6, 4), d(2022, 1, 4)],
            &[0.999, 0.995],
            DayCountConvention::Actual365Fixed,
            InterpolationMethod::Linear,
        )
        .unwrap()
    }

    fn builder() -> MarketDataSnapshotBuilder<f64> {
        MarketDataSnapshot::builder(valuation(), NaiveTime::from_hms_opt(17, 30, 0).unwrap())
            .currencies([Currency::USD])
            .assets(["AAPL"])
    }

    fn snapshot() -> MarketDataSnapshot<f64> {
        builder()
            .with_yield_curve(curve(CurveType::RiskFree(Currency::USD), valuation()))
            .with_yield_curve(curve(
                CurveType::RateIndex {
                    currency: Currency::USD,
                    index: RateIndexType::Libor,
                },
                valuation(),
            ))
            .with_forward_curve(
                "AAPL",
                curve(CurveType::AssetForward("AAPL".to_string()), valuation()),
            )
            .with_spot_history(
                "AAPL",
                vec![(d(2020, 12, 31), 132.69), (d(2021, 1, 4), 129.41)],
            )
            .with_fixings(
                "LIBOR",
                Period::months(3),
                vec![(d(2020, 12, 31), 0.0024), (d(2021, 1, 4), 0.0022)],
            )
            .with_volatility_surface("AAPL", FlatVol::new(0.3).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_scenario_node_hit_and_unknown_asset() {
        let s = snapshot();
        assert_eq!(s.date(), valuation());
        assert_eq!(s.time(), NaiveTime::from_hms_opt(17, 30, 0).unwrap());
        assert_eq!(s.dtype(), Dtype::Float64);

        let usd = s.yield_curve(&CurveType::RiskFree(Currency::USD)).unwrap();
        let df = usd
            .discount_factor(&[d(2021, 6, 4)], &CurveContext::none())
            .unwrap();
        assert_eq!(df, vec![0.999]);

        let err = s.spot("EUR", &[valuation()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn test_yield_curve_lookup_errors() {
        let s = snapshot();
        assert!(matches!(
            s.yield_curve(&CurveType::RiskFree(Currency::EUR)),
            Err(MarketDataError::UnsupportedCurrency {
                currency: Currency::EUR
            })
        ));
        assert!(matches!(
            s.yield_curve(&CurveType::RateIndex {
                currency: Currency::USD,
                index: RateIndexType::Sofr
            }),
            Err(MarketDataError::CurveNotFound { .. })
        ));
        assert!(matches!(
            s.yield_curve(&CurveType::AssetForward("MSFT".to_string())),
            Err(MarketDataError::UnknownAsset { .. })
        ));
    }

    #[test]
    fn test_fixings_as_of_and_temporal() {
        let s = snapshot();
        let values = s
            .fixings(&[d(2021, 1, 1), d(2021, 1, 4)], "LIBOR", Period::months(3))
            .unwrap();
        assert_eq!(values, vec![0.0024, 0.0022]);

        let err = s
            .fixings(&[d(2021, 1, 5)], "LIBOR", Period::months(3))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Temporal);
        assert!(matches!(err, MarketDataError::FutureObservation { .. }));

        let err = s
            .fixings(&[d(2020, 12, 1)], "LIBOR", Period::months(3))
            .unwrap_err();
        assert!(matches!(err, MarketDataError::MissingObservation { .. }));

        let err = s
            .fixings(&[valuation()], "LIBOR", Period::months(6))
            .unwrap_err();
        assert!(matches!(err, MarketDataError::UnknownFixingSeries { .. }));
    }

    #[test]
    fn test_spot_lookup() {
        let s = snapshot();
        assert_eq!(
            s.spot("AAPL", &[d(2021, 1, 2), valuation()]).unwrap(),
            vec![132.69, 129.41]
        );
        assert!(matches!(
            s.spot("AAPL", &[d(2021, 2, 1)]),
            Err(MarketDataError::FutureObservation { .. })
        ));
    }

    #[test]
    fn test_surface_and_forward_curve() {
        let s = snapshot();
        let surface = s.volatility_surface("AAPL").unwrap();
        assert_eq!(surface.volatility(150.0, 1.0).unwrap(), 0.3);
        let fwd = s.forward_curve("AAPL").unwrap();
        assert_eq!(fwd.curve_type(), &CurveType::AssetForward("AAPL".to_string()));

        assert!(matches!(
            s.volatility_surface("MSFT"),
            Err(MarketDataError::UnknownAsset { .. })
        ));
    }

    #[test]
    fn test_supported_asset_without_data() {
        let s = builder().assets(["MSFT"]).build().unwrap();
        assert_eq!(s.supported_assets(), &["AAPL".to_string(), "MSFT".to_string()]);
        assert!(matches!(
            s.spot("MSFT", &[valuation()]),
            Err(MarketDataError::NoSpotHistory { .. })
        ));
        assert!(matches!(
            s.forward_curve("MSFT"),
            Err(MarketDataError::NoForwardCurve { .. })
        ));
        assert!(matches!(
            s.volatility_surface("MSFT"),
            Err(MarketDataError::NoVolatilitySurface { .. })
        ));
    }

    #[test]
    fn test_build_rejects_unsupported_currency() {
        let result = builder()
            .with_yield_curve(curve(CurveType::RiskFree(Currency::EUR), valuation()))
            .build();
        assert!(matches!(
            result,
            Err(MarketDataError::UnsupportedCurrency {
                currency: Currency::EUR
            })
        ));
    }

    #[test]
    fn test_build_rejects_stale_curve() {
        let result = builder()
            .with_yield_curve(curve(CurveType::RiskFree(Currency::USD), d(2020, 12, 31)))
            .build();
        assert!(matches!(result, Err(MarketDataError::Inconsistent(_))));
    }

    #[test]
    fn test_build_rejects_duplicates_and_mislabelled_forward() {
        let usd = CurveType::RiskFree(Currency::USD);
        let result = builder()
            .with_yield_curve(curve(usd.clone(), valuation()))
            .with_yield_curve(curve(usd.clone(), valuation()))
            .build();
        assert!(matches!(result, Err(MarketDataError::Inconsistent(_))));

        let result = builder()
            .with_forward_curve("AAPL", curve(usd, valuation()))
            .build();
        assert!(matches!(result, Err(MarketDataError::Inconsistent(_))));
    }

    #[test]
    fn test_build_rejects_future_observations() {
        let result = builder()
            .with_spot_history("AAPL", vec![(d(2021, 1, 5), 131.0)])
            .build();
        assert!(matches!(
            result,
            Err(MarketDataError::FutureObservation { .. })
        ));
    }

    #[test]
    fn test_build_rejects_unknown_asset_data() {
        let result = builder()
            .with_volatility_surface("TSLA", FlatVol::new(0.6).unwrap())
            .build();
        assert!(matches!(result, Err(MarketDataError::UnknownAsset { .. })));
    }

    #[test]
    fn test_supported_lists_deduplicated() {
        let s = builder()
            .currencies([Currency::USD, Currency::EUR, Currency::USD])
            .assets(["AAPL"])
            .build()
            .unwrap();
        assert_eq!(s.supported_currencies(), &[Currency::USD, Currency::EUR]);
        assert_eq!(s.supported_assets().len(), 1);
    }

    #[test]
    fn test_forward_curve_reachable_both_ways() {
        let aapl = CurveType::AssetForward("AAPL".to_string());
        let s = builder()
            .with_forward_curve("AAPL", curve(aapl.clone(), valuation()))
            .build()
            .unwrap();
        let via_yield = s.yield_curve(&aapl).unwrap();
        let via_forward = s.forward_curve("AAPL").unwrap();
        assert!(Arc::ptr_eq(&via_yield, &via_forward));

        let s = builder()
            .with_yield_curve(curve(aapl.clone(), valuation()))
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(
            &s.yield_curve(&aapl).unwrap(),
            &s.forward_curve("AAPL").unwrap()
        ));
        assert!(s.curves().is_empty());
        assert_eq!(s.forward_curve_assets().collect::<Vec<_>>(), vec!["AAPL"]);
    }

    #[test]
    fn test_forward_curve_registered_twice_rejected() {
        let aapl = CurveType::AssetForward("AAPL".to_string());
        let result = builder()
            .with_yield_curve(curve(aapl.clone(), valuation()))
            .with_forward_curve("AAPL", curve(aapl, valuation()))
            .build();
        assert!(matches!(result, Err(MarketDataError::Inconsistent(_))));
    }

    #[test]
    fn test_missing_forward_curve_via_yield_curve() {
        let s = builder().build().unwrap();
        assert!(matches!(
            s.yield_curve(&CurveType::AssetForward("AAPL".to_string())),
            Err(MarketDataError::CurveNotFound { .. })
        ));
    }

    #[test]
    fn test_snapshot_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<MarketDataSnapshot<f64>>();
        assert_send_sync::<MarketDataSnapshot<f32>>();
    }
}
