//! Natural cubic spline interpolation.

use super::traits::{check_domain, find_segment, validate_knots};
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Polynomial coefficients of one spline segment:
/// `S(x) = a + b*dx + c*dx^2 + d*dx^3` with `dx = x - x_i`.
#[derive(Debug, Clone, Copy)]
struct SplineCoeffs<T: Float> {
    a: T,
    b: T,
    c: T,
    d: T,
}

/// Natural cubic spline interpolator (zero second derivative at both ends).
///
/// Requires at least 3 knots. Coefficients are computed once at
/// construction by solving the tridiagonal system for the second
/// derivatives with the Thomas algorithm.
///
/// # Example
///
/// ```
/// use platform_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
/// let spline = CubicSplineInterpolator::new(&xs, &ys).unwrap();
///
/// assert!((spline.interpolate(2.0).unwrap() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    xs: Vec<T>,
    coeffs: Vec<SplineCoeffs<T>>,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Construct a natural cubic spline through the knots.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 3 data points
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    /// * `Err(InterpolationError::NonMonotonicData)` - `xs` not strictly increasing
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        validate_knots(xs, ys, 3)?;
        Ok(Self {
            xs: xs.to_vec(),
            coeffs: Self::compute_coefficients(xs, ys),
        })
    }

    fn compute_coefficients(xs: &[T], ys: &[T]) -> Vec<SplineCoeffs<T>> {
        let n = xs.len();
        let two = T::one() + T::one();
        let six = two * (two + T::one());

        let h: Vec<T> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();
        let slope: Vec<T> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

        // Interior second derivatives M[1..n-1]; M[0] = M[n-1] = 0.
        let m = n - 2;
        let mut c_prime = vec![T::zero(); m];
        let mut d_prime = vec![T::zero(); m];
        for j in 0..m {
            let sub = if j > 0 { h[j] } else { T::zero() };
            let sup = if j + 1 < m { h[j + 1] } else { T::zero() };
            let diag = two * (h[j] + h[j + 1]);
            let rhs = six * (slope[j + 1] - slope[j]);

            let (prev_c, prev_d) = if j > 0 {
                (c_prime[j - 1], d_prime[j - 1])
            } else {
                (T::zero(), T::zero())
            };
            let denom = diag - sub * prev_c;
            c_prime[j] = sup / denom;
            d_prime[j] = (rhs - sub * prev_d) / denom;
        }

        let mut second = vec![T::zero(); n];
        for j in (0..m).rev() {
            second[j + 1] = d_prime[j] - c_prime[j] * second[j + 2];
        }

        (0..n - 1)
            .map(|i| SplineCoeffs {
                a: ys[i],
                b: slope[i] - h[i] * (two * second[i] + second[i + 1]) / six,
                c: second[i] / two,
                d: (second[i + 1] - second[i]) / (six * h[i]),
            })
            .collect()
    }
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (min, max) = self.domain();
        check_domain(x, min, max)?;

        let i = find_segment(&self.xs, x);
        let SplineCoeffs { a, b, c, d } = self.coeffs[i];
        let dx = x - self.xs[i];
        Ok(a + dx * (b + dx * (c + dx * d)))
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
    fn test_requires_three_points() {
        let result = CubicSplineInterpolator::new(&[0.0_f64, 1.0], &[0.0, 1.0]);
        assert!(matches!(
            result,
            Err(InterpolationError::InsufficientData { got: 2, need: 3 })
        ));
    }

    #[test]
    fn test_passes_through_knots() {
        let xs = [0.5_f64, 1.0, 2.0, 5.0, 10.0];
        let ys = [0.010, 0.012, 0.015, 0.020, 0.022];
        let spline = CubicSplineInterpolator::new(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.interpolate(x).unwrap(), y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reproduces_linear_data() {
        // A natural spline through collinear points is the line itself.
        let xs = [0.0_f64, 1.0, 2.5, 4.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x + 1.0).collect();
        let spline = CubicSplineInterpolator::new(&xs, &ys).unwrap();
        assert_relative_eq!(spline.interpolate(1.7).unwrap(), 4.4, epsilon = 1e-12);
        assert_relative_eq!(spline.interpolate(3.2).unwrap(), 7.4, epsilon = 1e-12);
    }

    #[test]
    fn test_three_point_symmetric_midpoint() {
        // Symmetric data: spline value at the centre knot is exact and the
        // curve is symmetric around it.
        let spline = CubicSplineInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        let left = spline.interpolate(0.5).unwrap();
        let right = spline.interpolate(1.5).unwrap();
        assert_relative_eq!(left, right, epsilon = 1e-12);
        assert!(left > 0.5);
    }

    #[test]
    fn test_out_of_bounds() {
        let spline = CubicSplineInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        assert!(matches!(
            spline.interpolate(-0.1),
            Err(InterpolationError::OutOfBounds { .. })
        ));
    }
}
