//! Rate curves.
//!
//! This module provides:
//! - [`RateCurve`]: Date-based discount curve trait
//! - [`InterpolatedRateCurve`]: Curve fitted through dated discount factor nodes
//! - [`CurveType`], [`RateIndexType`]: Curve identifiers
//! - [`InterpolationMethod`]: Interpolation scheme between nodes
//! - [`CurveContext`]: Per-query context
//! - [`CurveSet`]: Registry of shared curves keyed by curve type

mod context;
mod curve_set;
mod curve_type;
mod interpolated;
mod interpolation;
mod traits;

pub use context::CurveContext;
pub use curve_set::CurveSet;
pub use curve_type::{CurveType, RateIndexType};
pub use interpolated::InterpolatedRateCurve;
pub use interpolation::InterpolationMethod;
pub use traits::{RateCurve, SharedRateCurve};
