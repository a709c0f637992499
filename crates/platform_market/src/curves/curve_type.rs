//! Curve identifiers.
//!
//! This module provides:
//! - [`CurveType`]: Key under which a rate curve is registered in a snapshot
//! - [`RateIndexType`]: Floating rate index families

use crate::error::MarketDataError;
use platform_core::types::Currency;
use std::fmt;
use std::str::FromStr;

/// Floating rate index family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RateIndexType {
    /// London Interbank Offered Rate
    Libor,
    /// Euro Interbank Offered Rate
    Euribor,
    /// Secured Overnight Financing Rate
    Sofr,
    /// Sterling Overnight Index Average
    Sonia,
    /// Euro Short-Term Rate
    Estr,
    /// Tokyo Overnight Average Rate
    Tonar,
    /// Swap rate index
    Swap,
}

impl RateIndexType {
    /// All supported index families.
    pub const ALL: [RateIndexType; 7] = [
        RateIndexType::Libor,
        RateIndexType::Euribor,
        RateIndexType::Sofr,
        RateIndexType::Sonia,
        RateIndexType::Estr,
        RateIndexType::Tonar,
        RateIndexType::Swap,
    ];

    /// Upper-case index name.
    pub fn name(&self) -> &'static str {
        match self {
            RateIndexType::Libor => "LIBOR",
            RateIndexType::Euribor => "EURIBOR",
            RateIndexType::Sofr => "SOFR",
            RateIndexType::Sonia => "SONIA",
            RateIndexType::Estr => "ESTR",
            RateIndexType::Tonar => "TONAR",
            RateIndexType::Swap => "SWAP",
        }
    }
}

impl fmt::Display for RateIndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RateIndexType {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|index| index.name() == upper)
            .ok_or_else(|| MarketDataError::Config(format!("unknown rate index: {:?}", s)))
    }
}

/// Identifier of a rate curve within a market data snapshot.
///
/// The text form is used in configuration files and on the command line:
///
/// | Variant | Text |
/// |---------|------|
/// | `RiskFree(USD)` | `USD` |
/// | `RateIndex { currency: USD, index: Sofr }` | `USD-SOFR` |
/// | `AssetForward("AAPL")` | `FWD:AAPL` |
///
/// # Example
///
/// ```
/// use platform_core::types::Currency;
/// use platform_market::curves::{CurveType, RateIndexType};
///
/// let ct: CurveType = "usd-sofr".parse().unwrap();
/// assert_eq!(ct, CurveType::RateIndex { currency: Currency::USD, index: RateIndexType::Sofr });
/// assert_eq!(ct.currency(), Some(Currency::USD));
/// assert_eq!(ct.to_string(), "USD-SOFR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurveType {
    /// Risk-free discounting curve of a currency.
    RiskFree(Currency),
    /// Projection curve of a floating rate index.
    RateIndex {
        /// Currency of the index
        currency: Currency,
        /// Index family
        index: RateIndexType,
    },
    /// Forward curve of an asset.
    AssetForward(String),
}

impl CurveType {
    /// Currency the curve is denominated in, if any.
    ///
    /// Asset forward curves carry no currency of their own.
    pub fn currency(&self) -> Option<Currency> {
        match self {
            CurveType::RiskFree(ccy) => Some(*ccy),
            CurveType::RateIndex { currency, .. } => Some(*currency),
            CurveType::AssetForward(_) => None,
        }
    }

    /// Asset of a forward curve, if any.
    pub fn asset(&self) -> Option<&str> {
        match self {
            CurveType::AssetForward(asset) => Some(asset),
            _ => None,
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveType::RiskFree(ccy) => write!(f, "{}", ccy),
            CurveType::RateIndex { currency, index } => write!(f, "{}-{}", currency, index),
            CurveType::AssetForward(asset) => write!(f, "FWD:{}", asset),
        }
    }
}

impl FromStr for CurveType {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let currency = |code: &str| {
            code.parse::<Currency>()
                .map_err(|e| MarketDataError::Config(format!("curve type {:?}: {}", s, e)))
        };

        let prefix = s.get(..4).filter(|p| p.eq_ignore_ascii_case("FWD:"));
        if prefix.is_some() {
            let asset = s[4..].trim();
            if asset.is_empty() {
                return Err(MarketDataError::Config(format!(
                    "curve type {:?}: missing asset",
                    s
                )));
            }
            return Ok(CurveType::AssetForward(asset.to_string()));
        }

        match s.split_once('-') {
            Some((ccy, index)) => Ok(CurveType::RateIndex {
                currency: currency(ccy)?,
                index: index.parse()?,
            }),
            None => Ok(CurveType::RiskFree(currency(s)?)),
        }
    }
}

mod serde_impl {
    use super::CurveType;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for CurveType {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for CurveType {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(D::Error::custom)
        }
    }
}
