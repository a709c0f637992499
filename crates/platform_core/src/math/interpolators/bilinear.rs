//! Bilinear 2D interpolation for surfaces.

use super::traits::{check_domain, find_segment};
use crate::types::InterpolationError;
use num_traits::Float;

/// Bilinear interpolator for 2D grid data.
///
/// The grid is stored as `zs[i][j] = z(xs[i], ys[j])`. Both axes must be
/// strictly increasing with at least 2 points; queries outside the grid fail.
///
/// # Example
///
/// ```
/// use platform_core::math::interpolators::BilinearInterpolator;
///
/// let xs = [0.0_f64, 1.0, 2.0];
/// let ys = [0.0, 1.0];
/// let zs = [
///     &[0.0_f64, 1.0][..],
///     &[2.0, 3.0][..],
///     &[4.0, 5.0][..],
/// ];
///
/// let interp = BilinearInterpolator::new(&xs, &ys, &zs).unwrap();
/// let z = interp.interpolate(0.5, 0.5).unwrap();
/// assert!((z - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BilinearInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
    zs: Vec<Vec<T>>,
}

impl<T: Float> BilinearInterpolator<T> {
    /// Construct a bilinear interpolator from grid data.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points on an axis
    /// * `Err(InterpolationError::NonMonotonicData)` - An axis is not strictly increasing
    /// * `Err(InterpolationError::InvalidInput)` - Grid dimensions do not match the axes
    pub fn new(xs: &[T], ys: &[T], zs: &[&[T]]) -> Result<Self, InterpolationError> {
        for axis in [xs, ys] {
            if axis.len() < 2 {
                return Err(InterpolationError::InsufficientData {
                    got: axis.len(),
                    need: 2,
                });
            }
            if let Some(index) = (1..axis.len()).find(|&i| axis[i] <= axis[i - 1]) {
                return Err(InterpolationError::NonMonotonicData { index });
            }
        }

        if zs.len() != xs.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "grid has {} rows, expected {}",
                zs.len(),
                xs.len()
            )));
        }
        if let Some((i, row)) = zs.iter().enumerate().find(|(_, row)| row.len() != ys.len()) {
            return Err(InterpolationError::InvalidInput(format!(
                "grid row {} has {} columns, expected {}",
                i,
                row.len(),
                ys.len()
            )));
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            zs: zs.iter().map(|row| row.to_vec()).collect(),
        })
    }

    /// Interpolated value at `(x, y)`.
    pub fn interpolate(&self, x: T, y: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain_x();
        let (y_min, y_max) = self.domain_y();
        check_domain(x, x_min, x_max)?;
        check_domain(y, y_min, y_max)?;

        let i = find_segment(&self.xs, x);
        let j = find_segment(&self.ys, y);

        let tx = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        let ty = (y - self.ys[j]) / (self.ys[j + 1] - self.ys[j]);

        let one = T::one();
        let z00 = self.zs[i][j];
        let z01 = self.zs[i][j + 1];
        let z10 = self.zs[i + 1][j];
        let z11 = self.zs[i + 1][j + 1];

        Ok((one - tx) * (one - ty) * z00
            + (one - tx) * ty * z01
            + tx * (one - ty) * z10
            + tx * ty * z11)
    }

    /// Valid x range.
    #[inline]
    pub fn domain_x(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Valid y range.
    #[inline]
    pub fn domain_y(&self) -> (T, T) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    /// Grid values.
    #[inline]
    pub fn zs(&self) -> &[Vec<T>] {
        &self.zs
    }
}
