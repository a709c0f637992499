//! Registry of rate curves keyed by curve type.

use super::{CurveType, RateCurve, SharedRateCurve};
use crate::error::MarketDataError;
use platform_core::types::FloatDtype;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Container of shared rate curves keyed by [`CurveType`].
///
/// Iteration follows the ordering of [`CurveType`], so listings are stable.
///
/// # Example
///
/// ```
/// use platform_core::types::{Currency, Date, DayCountConvention};
/// use platform_market::curves::{CurveSet, CurveType, InterpolatedRateCurve, InterpolationMethod};
///
/// let curve = InterpolatedRateCurve::new(
///     CurveType::RiskFree(Currency::USD),
///     Date::from_ymd(2021, 1, 4).unwrap(),
///     &[Date::from_ymd(2022, 1, 4).unwrap()],
///     &[0.99_f64],
///     DayCountConvention::Actual365Fixed,
///     InterpolationMethod::Linear,
/// )
/// .unwrap();
///
/// let mut curves = CurveSet::new();
/// assert!(curves.insert(curve).is_none());
/// assert!(curves.contains(&CurveType::RiskFree(Currency::USD)));
/// assert!(curves.get_or_err(&CurveType::RiskFree(Currency::EUR)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CurveSet<T: FloatDtype> {
    curves: BTreeMap<CurveType, SharedRateCurve<T>>,
}

impl<T: FloatDtype> Default for CurveSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatDtype> CurveSet<T> {
    /// Create an empty curve set.
    #[inline]
    pub fn new() -> Self {
        Self {
            curves: BTreeMap::new(),
        }
    }

    /// Insert a curve under its own curve type.
    ///
    /// Returns the curve previously registered under that type, if any.
    pub fn insert<C: RateCurve<T> + 'static>(&mut self, curve: C) -> Option<SharedRateCurve<T>> {
        self.insert_shared(Arc::new(curve))
    }

    /// Insert an already shared curve under its own curve type.
    pub fn insert_shared(&mut self, curve: SharedRateCurve<T>) -> Option<SharedRateCurve<T>> {
        self.curves.insert(curve.curve_type().clone(), curve)
    }

    /// Get a curve by type.
    #[inline]
    pub fn get(&self, curve_type: &CurveType) -> Option<&SharedRateCurve<T>> {
        self.curves.get(curve_type)
    }

    /// Get a shared handle to a curve, failing with `CurveNotFound`.
    pub fn get_or_err(&self, curve_type: &CurveType) -> Result<SharedRateCurve<T>, MarketDataError> {
        self.curves
            .get(curve_type)
            .cloned()
            .ok_or_else(|| MarketDataError::CurveNotFound {
                curve_type: curve_type.clone(),
            })
    }

    /// Check whether a curve of the given type is registered.
    #[inline]
    pub fn contains(&self, curve_type: &CurveType) -> bool {
        self.curves.contains_key(curve_type)
    }

    /// Registered curve types in order.
    pub fn curve_types(&self) -> impl Iterator<Item = &CurveType> {
        self.curves.keys()
    }

    /// Registered curves in curve type order.
    pub fn iter(&self) -> impl Iterator<Item = (&CurveType, &SharedRateCurve<T>)> {
        self.curves.iter()
    }

    /// Number of registered curves.
    #[inline]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Check whether no curves are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
