//! Volatility surfaces.
//!
//! This module provides:
//! - [`VolatilitySurface`]: Volatility queryable by strike and expiry
//! - [`FlatVol`]: Constant volatility
//! - [`InterpolatedVolSurface`]: Bilinear interpolation on a grid

mod flat;
mod interpolated;
mod traits;

pub use flat::FlatVol;
pub use interpolated::InterpolatedVolSurface;
pub use traits::{SharedVolSurface, VolatilitySurface};
