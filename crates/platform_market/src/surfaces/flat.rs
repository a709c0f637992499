//! Flat volatility surface.

use super::traits::check_strike_expiry;
use super::VolatilitySurface;
use crate::error::MarketDataError;
use platform_core::types::FloatDtype;

/// Constant volatility across all strikes and expiries.
///
/// # Example
///
/// ```
/// use platform_market::surfaces::{FlatVol, VolatilitySurface};
///
/// let vol = FlatVol::new(0.25_f64).unwrap();
/// assert_eq!(vol.sigma(), 0.25);
/// assert_eq!(vol.volatility(90.0, 0.5).unwrap(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVol<T: FloatDtype> {
    sigma: T,
}

impl<T: FloatDtype> FlatVol<T> {
    /// Create a flat surface.
    ///
    /// # Returns
    ///
    /// * `Err(MarketDataError::InvalidVolatility)` - `sigma` not positive and finite
    pub fn new(sigma: T) -> Result<Self, MarketDataError> {
        if !(sigma > T::zero()) || !sigma.is_finite() {
            return Err(MarketDataError::InvalidVolatility {
                vol: sigma.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { sigma })
    }

    /// The constant volatility.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }
}

impl<T: FloatDtype> VolatilitySurface<T> for FlatVol<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        check_strike_expiry(strike, expiry)?;
        Ok(self.sigma)
    }

    #[inline]
    fn strike_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    #[inline]
    fn expiry_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}
