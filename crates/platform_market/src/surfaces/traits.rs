//! Volatility surface trait definition.

use crate::error::MarketDataError;
use platform_core::types::{Date, DayCountConvention, FloatDtype};
use std::fmt;
use std::sync::Arc;

/// Shared handle to a volatility surface held by a market data snapshot.
pub type SharedVolSurface<T> = Arc<dyn VolatilitySurface<T>>;

/// Implied volatility queryable by strike and expiry.
///
/// Expiry is a year fraction from the valuation date. Surfaces never
/// extrapolate: queries outside the domain fail.
///
/// # Example
///
/// ```
/// use platform_market::surfaces::{FlatVol, VolatilitySurface};
///
/// let surface = FlatVol::new(0.2_f64).unwrap();
/// assert_eq!(surface.volatility(100.0, 1.0).unwrap(), 0.2);
/// assert!(surface.volatility(-1.0, 1.0).is_err());
/// ```
pub trait VolatilitySurface<T: FloatDtype>: fmt::Debug + Send + Sync {
    /// Implied volatility at `strike` and `expiry`.
    ///
    /// # Errors
    ///
    /// * `InvalidStrike` - `strike <= 0`
    /// * `InvalidExpiry` - `expiry <= 0`
    /// * `OutOfBounds` - Point outside the surface domain
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError>;

    /// Valid strike range `(min, max)`.
    fn strike_domain(&self) -> (T, T);

    /// Valid expiry range `(min, max)` in years.
    fn expiry_domain(&self) -> (T, T);

    /// Implied volatility for an expiry date.
    ///
    /// The expiry is converted to a year fraction from `valuation_date`
    /// with `daycount`.
    fn volatility_at_date(
        &self,
        strike: T,
        valuation_date: Date,
        expiry_date: Date,
        daycount: DayCountConvention,
    ) -> Result<T, MarketDataError> {
        let expiry: T = num_traits::cast(daycount.year_fraction(valuation_date, expiry_date))
            .unwrap_or_else(T::nan);
        self.volatility(strike, expiry)
    }
}

/// Rejects non-positive strikes and expiries.
pub(crate) fn check_strike_expiry<T: FloatDtype>(strike: T, expiry: T) -> Result<(), MarketDataError> {
    if !(strike > T::zero()) {
        return Err(MarketDataError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
        });
    }
    if !(expiry > T::zero()) {
        return Err(MarketDataError::InvalidExpiry {
            expiry: expiry.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockVolSurface {
        sigma: f64,
    }

    impl VolatilitySurface<f64> for MockVolSurface {
        fn volatility(&self, strike: f64, expiry: f64) -> Result<f64, MarketDataError> {
            check_strike_expiry(strike, expiry)?;
            Ok(self.sigma * (1.0 + 0.1 * expiry))
        }

        fn strike_domain(&self) -> (f64, f64) {
            (0.0, f64::INFINITY)
        }

        fn expiry_domain(&self) -> (f64, f64) {
            (0.0, f64::INFINITY)
        }
    }

    #[test]
    fn test_volatility_at_date_uses_daycount() {
        let surface = MockVolSurface { sigma: 0.2 };
        let valuation = Date::from_ymd(2021, 1, 4).unwrap();
        let expiry = Date::from_ymd(2022, 1, 4).unwrap();
        let vol = surface
            .volatility_at_date(100.0, valuation, expiry, DayCountConvention::Actual365Fixed)
            .unwrap();
        assert!((vol - 0.22).abs() < 1e-12);
    }

    #[test]
    fn test_expiry_on_valuation_date_rejected() {
        let surface = MockVolSurface { sigma: 0.2 };
        let d = Date::from_ymd(2021, 1, 4).unwrap();
        let result = surface.volatility_at_date(100.0, d, d, DayCountConvention::Actual360);
        assert!(matches!(result, Err(MarketDataError::InvalidExpiry { .. })));
    }

    #[test]
    fn test_invalid_strike() {
        let surface = MockVolSurface { sigma: 0.2 };
        assert!(matches!(
            surface.volatility(0.0, 1.0),
            Err(MarketDataError::InvalidStrike { .. })
        ));
    }
}
