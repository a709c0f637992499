//! Numeric precision tags.
//!
//! Market data snapshots are generic over their floating-point element type.
//! [`FloatDtype`] ties each element type to the [`Dtype`] tag reported to
//! callers, so every value a snapshot returns shares one precision.

use num_traits::Float;
use std::fmt;

/// Floating-point precision of values returned by market data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dtype {
    /// IEEE 754 single precision
    Float32,
    /// IEEE 754 double precision
    Float64,
}

impl Dtype {
    /// Conventional lowercase name (`float32`, `float64`).
    pub fn name(&self) -> &'static str {
        match self {
            Dtype::Float32 => "float32",
            Dtype::Float64 => "float64",
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Floating-point element type with a known [`Dtype`].
///
/// ```
/// use platform_core::types::{Dtype, FloatDtype};
///
/// fn precision_of<T: FloatDtype>() -> Dtype {
///     T::DTYPE
/// }
///
/// assert_eq!(precision_of::<f32>(), Dtype::Float32);
/// assert_eq!(precision_of::<f64>(), Dtype::Float64);
/// ```
pub trait FloatDtype: Float + fmt::Debug + Send + Sync + 'static {
    /// Precision tag of this element type.
    const DTYPE: Dtype;
}

impl FloatDtype for f32 {
    const DTYPE: Dtype = Dtype::Float32;
}

impl FloatDtype for f64 {
    const DTYPE: Dtype = Dtype::Float64;
}
