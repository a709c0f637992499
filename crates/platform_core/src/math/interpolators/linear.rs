//! Linear interpolation implementation.

use super::traits::{check_domain, find_segment, validate_knots};
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use platform_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
/// assert_eq!(interp.domain(), (0.0, 2.0));
///
/// let y = interp.interpolate(0.5).unwrap();
/// assert!((y - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from knots.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    /// * `Err(InterpolationError::NonMonotonicData)` - `xs` not strictly increasing
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        validate_knots(xs, ys, 2)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Knot abscissae.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Knot values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// ```text
    /// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (min, max) = self.domain();
        check_domain(x, min, max)?;

        let i = find_segment(&self.xs, x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + (y1 - y0) * t)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_insufficient_data() {
        match LinearInterpolator::new(&[1.0_f64], &[1.0]) {
            Err(InterpolationError::InsufficientData { got, need }) => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            other => panic!("Expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn test_new_mismatched_lengths() {
        let result = LinearInterpolator::new(&[0.0_f64, 1.0], &[0.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_new_rejects_unsorted() {
        let result = LinearInterpolator::new(&[0.0_f64, 2.0, 1.0], &[0.0, 1.0, 2.0]);
        assert!(matches!(
            result,
            Err(InterpolationError::NonMonotonicData { index: 2 })
        ));
    }

    #[test]
    fn test_interpolate_at_knots_and_between() {
        let interp = LinearInterpolator::new(&[0.0_f64, 1.0, 3.0], &[1.0, 3.0, 7.0]).unwrap();
        assert_eq!(interp.interpolate(0.0).unwrap(), 1.0);
        assert_eq!(interp.interpolate(1.0).unwrap(), 3.0);
        assert_eq!(interp.interpolate(3.0).unwrap(), 7.0);
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_out_of_bounds() {
        let interp = LinearInterpolator::new(&[0.0_f64, 1.0], &[0.0, 1.0]).unwrap();
        match interp.interpolate(1.5) {
            Err(InterpolationError::OutOfBounds { x, min, max }) => {
                assert_eq!((x, min, max), (1.5, 0.0, 1.0));
            }
            other => panic!("Expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_with_f32() {
        let interp = LinearInterpolator::new(&[0.0_f32, 2.0], &[0.0, 4.0]).unwrap();
        assert!((interp.interpolate(1.0).unwrap() - 2.0).abs() < 1e-6);
    }
}
