//! Snapshot descriptions loaded from TOML.
//!
//! A description lists the valuation date and time, the supported
//! currencies and assets, and the curves, histories and surfaces of the
//! snapshot. Dates are quoted ISO strings.
//!
//! ```toml
//! date = "2021-01-04"
//! time = "17:00:00"
//! currencies = ["USD"]
//! assets = ["AAPL"]
//!
//! [[curves]]
//! curve_type = "USD"
//! daycount = "ACT/365F"
//! interpolation = "constant_forward"
//! dates = ["2021-06-04", "2022-01-04"]
//! discount_factors = [0.999, 0.995]
//!
//! [[spots]]
//! asset = "AAPL"
//! history = [{ date = "2021-01-04", value = 129.41 }]
//!
//! [[fixings]]
//! fixing_type = "LIBOR"
//! tenor = "3M"
//! history = [{ date = "2020-12-31", value = 0.0024 }]
//!
//! [[volatility_surfaces]]
//! kind = "flat"
//! asset = "AAPL"
//! volatility = 0.3
//! ```

use crate::curves::{CurveType, InterpolatedRateCurve, InterpolationMethod};
use crate::error::MarketDataError;
use crate::snapshot::MarketDataSnapshot;
use crate::surfaces::{FlatVol, InterpolatedVolSurface};
use chrono::NaiveTime;
use platform_core::types::{Currency, Date, DayCountConvention, FloatDtype, Period};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

fn default_daycount() -> DayCountConvention {
    DayCountConvention::Actual365Fixed
}

/// Description of a full market data snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotConfig {
    /// Valuation date
    pub date: Date,
    /// Valuation time, midnight when omitted
    #[serde(default)]
    pub time: NaiveTime,
    /// Supported currencies
    #[serde(default)]
    pub currencies: Vec<Currency>,
    /// Supported assets
    #[serde(default)]
    pub assets: Vec<String>,
    /// Yield curves
    #[serde(default)]
    pub curves: Vec<CurveConfig>,
    /// Asset forward curves
    #[serde(default)]
    pub forward_curves: Vec<ForwardCurveConfig>,
    /// Spot price histories
    #[serde(default)]
    pub spots: Vec<SpotConfig>,
    /// Rate fixing histories
    #[serde(default)]
    pub fixings: Vec<FixingConfig>,
    /// Volatility surfaces
    #[serde(default)]
    pub volatility_surfaces: Vec<VolSurfaceConfig>,
}

/// Yield curve nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurveConfig {
    /// Curve identifier, e.g. `USD` or `USD-SOFR`
    pub curve_type: CurveType,
    /// Day count convention, ACT/365F when omitted
    #[serde(default = "default_daycount")]
    pub daycount: DayCountConvention,
    /// Interpolation method, linear when omitted
    #[serde(default)]
    pub interpolation: InterpolationMethod,
    /// Node dates
    pub dates: Vec<Date>,
    /// Node discount factors
    pub discount_factors: Vec<f64>,
}

/// Forward curve nodes of an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForwardCurveConfig {
    /// Asset identifier
    pub asset: String,
    /// Day count convention, ACT/365F when omitted
    #[serde(default = "default_daycount")]
    pub daycount: DayCountConvention,
    /// Interpolation method, linear when omitted
    #[serde(default)]
    pub interpolation: InterpolationMethod,
    /// Node dates
    pub dates: Vec<Date>,
    /// Node discount factors
    pub discount_factors: Vec<f64>,
}

/// One dated observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObservationConfig {
    /// Observation date
    pub date: Date,
    /// Observed value
    pub value: f64,
}

/// Spot price history of an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpotConfig {
    /// Asset identifier
    pub asset: String,
    /// Observations in any order
    pub history: Vec<ObservationConfig>,
}

/// Fixing history of a rate index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixingConfig {
    /// Published index name, e.g. `LIBOR`
    pub fixing_type: String,
    /// Fixing tenor, e.g. `3M`
    pub tenor: Period,
    /// Observations in any order
    pub history: Vec<ObservationConfig>,
}

/// Volatility surface of an asset, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VolSurfaceConfig {
    /// Constant volatility.
    Flat {
        /// Asset identifier
        asset: String,
        /// Volatility
        volatility: f64,
    },
    /// Expiry × strike grid.
    Grid {
        /// Asset identifier
        asset: String,
        /// Strike axis
        strikes: Vec<f64>,
        /// Expiry axis in years
        expiries: Vec<f64>,
        /// One row per expiry, one column per strike
        vols: Vec<Vec<f64>>,
    },
}

impl VolSurfaceConfig {
    /// Asset the surface belongs to.
    pub fn asset(&self) -> &str {
        match self {
            VolSurfaceConfig::Flat { asset, .. } | VolSurfaceConfig::Grid { asset, .. } => asset,
        }
    }
}

impl SnapshotConfig {
    /// Parse and validate a TOML description.
    pub fn from_toml_str(content: &str) -> Result<Self, MarketDataError> {
        let config: SnapshotConfig =
            toml::from_str(content).map_err(|e| MarketDataError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML description file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MarketDataError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MarketDataError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "loading snapshot description");
        Self::from_toml_str(&content)
    }

    /// Check the structure of the description.
    ///
    /// Content checks that need the built objects (node ordering, asset
    /// membership, dates relative to the snapshot) happen in
    /// [`build`](Self::build).
    pub fn validate(&self) -> Result<(), MarketDataError> {
        for curve in &self.curves {
            check_nodes(
                &curve.curve_type.to_string(),
                &curve.dates,
                &curve.discount_factors,
            )?;
        }
        for curve in &self.forward_curves {
            check_nodes(
                &format!("forward curve of {}", curve.asset),
                &curve.dates,
                &curve.discount_factors,
            )?;
        }
        for spot in &self.spots {
            if spot.history.is_empty() {
                return Err(MarketDataError::Config(format!(
                    "spot history of {} is empty",
                    spot.asset
                )));
            }
        }
        for fixing in &self.fixings {
            if fixing.history.is_empty() {
                return Err(MarketDataError::Config(format!(
                    "fixing history of {} {} is empty",
                    fixing.fixing_type, fixing.tenor
                )));
            }
        }
        for surface in &self.volatility_surfaces {
            if let VolSurfaceConfig::Grid {
                asset,
                strikes,
                expiries,
                vols,
            } = surface
            {
                if vols.len() != expiries.len() || vols.iter().any(|row| row.len() != strikes.len()) {
                    return Err(MarketDataError::Config(format!(
                        "volatility grid of {} must be {} expiries by {} strikes",
                        asset,
                        expiries.len(),
                        strikes.len()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Build the described snapshot with values of type `T`.
    pub fn build<T: FloatDtype>(&self) -> Result<MarketDataSnapshot<T>, MarketDataError> {
        let mut builder = MarketDataSnapshot::builder(self.date, self.time)
            .currencies(self.currencies.iter().copied())
            .assets(self.assets.iter().cloned());

        for curve in &self.curves {
            builder = builder.with_yield_curve(InterpolatedRateCurve::new(
                curve.curve_type.clone(),
                self.date,
                &curve.dates,
                &convert(&curve.discount_factors)?,
                curve.daycount,
                curve.interpolation,
            )?);
        }
        for curve in &self.forward_curves {
            let forward = InterpolatedRateCurve::new(
                CurveType::AssetForward(curve.asset.clone()),
                self.date,
                &curve.dates,
                &convert(&curve.discount_factors)?,
                curve.daycount,
                curve.interpolation,
            )?;
            builder = builder.with_forward_curve(curve.asset.clone(), forward);
        }
        for spot in &self.spots {
            builder = builder.with_spot_history(spot.asset.clone(), observations(&spot.history)?);
        }
        for fixing in &self.fixings {
            builder = builder.with_fixings(
                fixing.fixing_type.clone(),
                fixing.tenor,
                observations(&fixing.history)?,
            );
        }
        for surface in &self.volatility_surfaces {
            builder = match surface {
                VolSurfaceConfig::Flat { asset, volatility } => builder
                    .with_volatility_surface(asset.clone(), FlatVol::new(to_float::<T>(*volatility)?)?),
                VolSurfaceConfig::Grid {
                    asset,
                    strikes,
                    expiries,
                    vols,
                } => {
                    let rows = vols
                        .iter()
                        .map(|row| convert::<T>(row))
                        .collect::<Result<Vec<_>, _>>()?;
                    let grid = InterpolatedVolSurface::new(&convert(strikes)?, &convert(expiries)?, &rows)?;
                    builder.with_volatility_surface(asset.clone(), grid)
                }
            };
        }

        builder.build()
    }
}

fn check_nodes(name: &str, dates: &[Date], discount_factors: &[f64]) -> Result<(), MarketDataError> {
    if dates.len() != discount_factors.len() {
        return Err(MarketDataError::Config(format!(
            "curve {}: {} dates but {} discount factors",
            name,
            dates.len(),
            discount_factors.len()
        )));
    }
    if dates.is_empty() {
        return Err(MarketDataError::Config(format!("curve {} has no nodes", name)));
    }
    Ok(())
}

fn to_float<T: FloatDtype>(value: f64) -> Result<T, MarketDataError> {
    num_traits::cast(value).ok_or_else(|| {
        MarketDataError::Config(format!("{} is not representable as {}", value, T::DTYPE))
    })
}

fn convert<T: FloatDtype>(values: &[f64]) -> Result<Vec<T>, MarketDataError> {
    values.iter().map(|&v| to_float(v)).collect()
}

fn observations<T: FloatDtype>(
    history: &[ObservationConfig],
) -> Result<Vec<(Date, T)>, MarketDataError> {
    history
        .iter()
        .map(|obs| to_float(obs.value).map(|value| (obs.date, value)))
        .collect()
}
