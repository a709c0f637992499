//! Interpolator trait definition.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolator over a fixed set of knots.
///
/// Implementations never extrapolate: queries outside [`domain`](Self::domain)
/// fail with [`InterpolationError::OutOfBounds`].
pub trait Interpolator<T: Float> {
    /// Interpolated value at `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Valid interpolation range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}

/// Validates knot data shared by all 1D interpolators.
///
/// Requires equal lengths, at least `need` points and strictly increasing
/// abscissae.
pub(crate) fn validate_knots<T: Float>(
    xs: &[T],
    ys: &[T],
    need: usize,
) -> Result<(), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "xs and ys must have same length: got {} and {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < need {
        return Err(InterpolationError::InsufficientData {
            got: xs.len(),
            need,
        });
    }
    if let Some(index) = (1..xs.len()).find(|&i| xs[i] <= xs[i - 1]) {
        return Err(InterpolationError::NonMonotonicData { index });
    }
    Ok(())
}

/// Fails with `OutOfBounds` if `x` lies outside `[min, max]`.
pub(crate) fn check_domain<T: Float>(x: T, min: T, max: T) -> Result<(), InterpolationError> {
    if x < min || x > max {
        return Err(InterpolationError::OutOfBounds {
            x: x.to_f64().unwrap_or(f64::NAN),
            min: min.to_f64().unwrap_or(f64::NAN),
            max: max.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

/// Index `i` of the segment `[xs[i], xs[i+1]]` containing `x`, clamped to
/// `[0, n-2]`.
#[inline]
pub(crate) fn find_segment<T: Float>(xs: &[T], x: T) -> usize {
    let pos = xs.partition_point(|&xi| xi <= x);
    if pos == 0 {
        0
    } else if pos >= xs.len() {
        xs.len() - 2
    } else {
        pos - 1
    }
}
