//! Per-query curve context.

use super::CurveType;
use crate::error::MarketDataError;

/// Optional context attached to a curve query.
///
/// A context carrying a curve type asserts which curve the caller believes
/// it is querying. Curves reject a context naming a different curve type,
/// which catches a discount curve being used where an index curve was meant.
///
/// # Example
///
/// ```
/// use platform_core::types::Currency;
/// use platform_market::curves::{CurveContext, CurveType};
///
/// let usd = CurveType::RiskFree(Currency::USD);
/// assert!(CurveContext::none().check(&usd).is_ok());
/// assert!(CurveContext::for_curve(usd.clone()).check(&usd).is_ok());
/// assert!(CurveContext::for_curve(CurveType::RiskFree(Currency::EUR)).check(&usd).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurveContext {
    /// Curve type the caller expects, if any.
    pub curve_type: Option<CurveType>,
}

impl CurveContext {
    /// Context with no expectations.
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    /// Context expecting the given curve type.
    #[inline]
    pub fn for_curve(curve_type: CurveType) -> Self {
        Self {
            curve_type: Some(curve_type),
        }
    }

    /// Verifies the context against the curve actually queried.
    pub fn check(&self, actual: &CurveType) -> Result<(), MarketDataError> {
        match &self.curve_type {
            Some(requested) if requested != actual => Err(MarketDataError::CurveTypeMismatch {
                requested: requested.clone(),
                actual: actual.clone(),
            }),
            _ => Ok(()),
        }
    }
}
