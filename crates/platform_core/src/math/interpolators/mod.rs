//! Interpolation methods for curve and surface construction.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between knots
//! - [`CubicSplineInterpolator`]: Natural cubic spline with C² continuity
//! - [`BilinearInterpolator`]: 2D grid interpolation for surfaces
//!
//! All 1D interpolators implement [`Interpolator`]. None of them
//! extrapolate; callers decide how to treat queries outside the knots.
//!
//! ## Example
//!
//! ```
//! use platform_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! let y = interp.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//! ```

mod bilinear;
mod cubic_spline;
mod linear;
mod traits;

pub use bilinear::BilinearInterpolator;
pub use cubic_spline::CubicSplineInterpolator;
pub use linear::LinearInterpolator;
pub use traits::Interpolator;
