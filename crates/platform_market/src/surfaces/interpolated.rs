//! Grid volatility surface with bilinear interpolation.

use super::traits::check_strike_expiry;
use super::VolatilitySurface;
use crate::error::MarketDataError;
use platform_core::math::interpolators::BilinearInterpolator;
use platform_core::types::FloatDtype;

/// Volatility surface on an expiry × strike grid.
///
/// Grid values are `vols[i][j] = sigma(expiries[i], strikes[j])`. Queries
/// inside the grid are bilinear in expiry and strike; queries outside fail
/// with `OutOfBounds`.
///
/// # Example
///
/// ```
/// use platform_market::surfaces::{InterpolatedVolSurface, VolatilitySurface};
///
/// let strikes: [f64; 3] = [90.0, 100.0, 110.0];
/// let expiries = [0.5, 1.0];
/// let vols = [vec![0.22, 0.20, 0.21], vec![0.21, 0.19, 0.20]];
/// let surface = InterpolatedVolSurface::new(&strikes, &expiries, &vols).unwrap();
///
/// assert_eq!(surface.volatility(100.0, 0.5).unwrap(), 0.20);
/// assert!((surface.volatility(100.0, 0.75).unwrap() - 0.195).abs() < 1e-12);
/// assert!(surface.volatility(120.0, 0.75).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedVolSurface<T: FloatDtype> {
    strikes: Vec<T>,
    expiries: Vec<T>,
    grid: BilinearInterpolator<T>,
}

impl<T: FloatDtype> InterpolatedVolSurface<T> {
    /// Create a surface from a grid.
    ///
    /// # Returns
    ///
    /// * `Err(MarketDataError::InvalidStrike)` - A non-positive strike
    /// * `Err(MarketDataError::InvalidExpiry)` - A non-positive expiry
    /// * `Err(MarketDataError::InvalidVolatility)` - A grid value not positive and finite
    /// * `Err(MarketDataError::InsufficientData)` - Fewer than 2 points on an axis
    /// * `Err(MarketDataError::Interpolation)` - Unsorted axes or mismatched grid shape
    pub fn new(strikes: &[T], expiries: &[T], vols: &[Vec<T>]) -> Result<Self, MarketDataError> {
        if let Some(&strike) = strikes.iter().find(|&&k| !(k > T::zero())) {
            return Err(MarketDataError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if let Some(&expiry) = expiries.iter().find(|&&t| !(t > T::zero())) {
            return Err(MarketDataError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        if let Some(&vol) = vols
            .iter()
            .flatten()
            .find(|&&v| !(v > T::zero()) || !v.is_finite())
        {
            return Err(MarketDataError::InvalidVolatility {
                vol: vol.to_f64().unwrap_or(f64::NAN),
            });
        }

        let rows: Vec<&[T]> = vols.iter().map(Vec::as_slice).collect();
        let grid = BilinearInterpolator::new(expiries, strikes, &rows)?;
        Ok(Self {
            strikes: strikes.to_vec(),
            expiries: expiries.to_vec(),
            grid,
        })
    }

    /// Strike axis.
    #[inline]
    pub fn strikes(&self) -> &[T] {
        &self.strikes
    }

    /// Expiry axis in years.
    #[inline]
    pub fn expiries(&self) -> &[T] {
        &self.expiries
    }

    /// Grid values, one row per expiry.
    #[inline]
    pub fn vols(&self) -> &[Vec<T>] {
        self.grid.zs()
    }
}

impl<T: FloatDtype> VolatilitySurface<T> for InterpolatedVolSurface<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        check_strike_expiry(strike, expiry)?;
        Ok(self.grid.interpolate(expiry, strike)?)
    }

    #[inline]
    fn strike_domain(&self) -> (T, T) {
        self.grid.domain_y()
    }

    #[inline]
    fn expiry_domain(&self) -> (T, T) {
        self.grid.domain_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn surface() -> InterpolatedVolSurface<f64> {
        InterpolatedVolSurface::new(
            &[80.0, 100.0, 120.0],
            &[0.25, 1.0, 2.0],
            &[
                vec![0.30, 0.25, 0.28],
                vec![0.27, 0.22, 0.24],
                vec![0.25, 0.21, 0.22],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_grid_points_exact() {
        let s = surface();
        assert_eq!(s.volatility(80.0, 0.25).unwrap(), 0.30);
        assert_eq!(s.volatility(120.0, 2.0).unwrap(), 0.22);
        assert_eq!(s.volatility(100.0, 1.0).unwrap(), 0.22);
    }

    #[test]
    fn test_bilinear_between_points() {
        let s = surface();
        // Midway in strike between 100 and 120, at the 1y expiry.
        assert_relative_eq!(s.volatility(110.0, 1.0).unwrap(), 0.23, epsilon = 1e-12);
        // Cell centre averages the four corners.
        assert_relative_eq!(
            s.volatility(110.0, 1.5).unwrap(),
            (0.22 + 0.24 + 0.21 + 0.22) / 4.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_no_extrapolation() {
        let s = surface();
        match s.volatility(130.0, 1.0) {
            Err(MarketDataError::OutOfBounds { x, min, max }) => {
                assert_eq!((x, min, max), (130.0, 80.0, 120.0));
            }
            other => panic!("Expected OutOfBounds, got {:?}", other),
        }
        assert!(matches!(
            s.volatility(100.0, 3.0),
            Err(MarketDataError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_domains() {
        let s = surface();
        assert_eq!(s.strike_domain(), (80.0, 120.0));
        assert_eq!(s.expiry_domain(), (0.25, 2.0));
        assert_eq!(s.vols().len(), 3);
    }

    #[test]
    fn test_construction_errors() {
        let ok_vols = [vec![0.2, 0.2], vec![0.2, 0.2]];
        assert!(matches!(
            InterpolatedVolSurface::new(&[0.0, 100.0], &[0.5, 1.0], &ok_vols),
            Err(MarketDataError::InvalidStrike { .. })
        ));
        assert!(matches!(
            InterpolatedVolSurface::new(&[90.0, 100.0], &[0.0, 1.0], &ok_vols),
            Err(MarketDataError::InvalidExpiry { .. })
        ));
        assert!(matches!(
            InterpolatedVolSurface::new(&[90.0, 100.0], &[0.5, 1.0], &[vec![0.2, -0.1], vec![0.2, 0.2]]),
            Err(MarketDataError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            InterpolatedVolSurface::new(&[100.0], &[0.5, 1.0], &[vec![0.2], vec![0.2]]),
            Err(MarketDataError::InsufficientData { got: 1, need: 2 })
        ));
        assert!(matches!(
            InterpolatedVolSurface::new(&[90.0, 100.0], &[0.5, 1.0], &[vec![0.2, 0.2]]),
            Err(MarketDataError::Interpolation(_))
        ));
    }
}
