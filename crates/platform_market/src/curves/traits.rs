//! Rate curve trait definition.

use super::{CurveContext, CurveType, InterpolationMethod};
use crate::error::MarketDataError;
use platform_core::types::{Date, DayCountConvention, DayCountFn, FloatDtype};
use std::fmt;
use std::sync::Arc;

/// Shared handle to a rate curve held by a market data snapshot.
pub type SharedRateCurve<T> = Arc<dyn RateCurve<T>>;

/// Date-based interest rate curve.
///
/// A rate curve is anchored at its valuation date and defined by a set of
/// node dates with associated discount factors. All queries take batches of
/// dates and return one value per date, or fail as a whole.
///
/// # Contract
///
/// - `discount_factor(valuation_date) == 1`
/// - `discount_factor(node_dates[i]) == discount_factor_nodes[i]`
/// - `forward_rate(s, e) == (DF(s) / DF(e) - 1) / yf(s, e)`
/// - `DF(d) == exp(-discount_rate(d) * yf(valuation_date, d))` for `d` after
///   the valuation date
///
/// where `yf` is [`daycount_fn`](Self::daycount_fn). Dates before the
/// valuation date or after the last node are rejected, never clamped.
///
/// The trait is object safe; snapshots hand curves out as
/// [`SharedRateCurve`].
///
/// # Example
///
/// ```
/// use platform_core::types::{Currency, Date, DayCountConvention};
/// use platform_market::curves::{
///     CurveContext, CurveType, InterpolatedRateCurve, InterpolationMethod, RateCurve,
/// };
///
/// let valuation = Date::from_ymd(2021, 1, 4).unwrap();
/// let nodes = [Date::from_ymd(2021, 7, 4).unwrap(), Date::from_ymd(2022, 1, 4).unwrap()];
/// let curve = InterpolatedRateCurve::new(
///     CurveType::RiskFree(Currency::USD),
///     valuation,
///     &nodes,
///     &[0.99_f64, 0.98],
///     DayCountConvention::Actual365Fixed,
///     InterpolationMethod::ConstantForward,
/// )
/// .unwrap();
///
/// let ctx = CurveContext::none();
/// let df = curve.discount_factor(&[valuation, nodes[1]], &ctx).unwrap();
/// assert_eq!(df, vec![1.0, 0.98]);
/// ```
pub trait RateCurve<T: FloatDtype>: fmt::Debug + Send + Sync {
    /// Discount factors for the given dates.
    ///
    /// # Errors
    ///
    /// * `DateOutOfRange` - A date lies before the valuation date or after
    ///   the last node
    /// * `CurveTypeMismatch` - The context names a different curve
    fn discount_factor(&self, dates: &[Date], context: &CurveContext)
        -> Result<Vec<T>, MarketDataError>;

    /// Simply compounded forward rates over `[start, end]` periods.
    ///
    /// `start_dates` and `end_dates` are broadcast against each other:
    /// their lengths must match, or one of them must hold a single date.
    ///
    /// # Errors
    ///
    /// * `ShapeMismatch` - Lengths cannot be broadcast
    /// * `InvalidAccrualPeriod` - An end date does not accrue after its start
    /// * `DateOutOfRange` - A date lies outside the curve range
    fn forward_rate(
        &self,
        start_dates: &[Date],
        end_dates: &[Date],
        context: &CurveContext,
    ) -> Result<Vec<T>, MarketDataError>;

    /// Continuously compounded zero rates for the given dates.
    ///
    /// At the valuation date this is the short rate, i.e. the zero rate of
    /// the first node.
    fn discount_rate(&self, dates: &[Date], context: &CurveContext)
        -> Result<Vec<T>, MarketDataError>;

    /// Identifier of this curve.
    fn curve_type(&self) -> &CurveType;

    /// Interpolation scheme between nodes.
    fn interpolation_method(&self) -> InterpolationMethod;

    /// Copies of the node discount factors and node dates.
    fn discount_factors_and_dates(&self) -> (Vec<T>, Vec<Date>) {
        (
            self.discount_factor_nodes().to_vec(),
            self.node_dates().to_vec(),
        )
    }

    /// Discount factors at the nodes.
    fn discount_factor_nodes(&self) -> &[T];

    /// Zero rates at the nodes.
    fn discount_rate_nodes(&self) -> &[T];

    /// Node dates, strictly increasing.
    fn node_dates(&self) -> &[Date];

    /// Replaces the node discount factors, keeping node dates fixed.
    ///
    /// On success the curve reflects the new values in every later query
    /// and the stored values are returned. On failure the curve is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// * `ShapeMismatch` - `values` length differs from the node count
    /// * `InvalidNodes` - A value is not strictly positive and finite
    fn set_discount_factor_nodes(&mut self, values: &[T]) -> Result<&[T], MarketDataError>;

    /// Day count convention of the curve.
    fn daycount_convention(&self) -> DayCountConvention;

    /// Year fraction function of the curve's day count convention.
    fn daycount_fn(&self) -> DayCountFn {
        self.daycount_convention().year_fraction_fn()
    }

    /// Valuation date the curve is anchored at.
    fn valuation_date(&self) -> Date;

    /// Year fraction between two dates under the curve's convention.
    fn year_fraction(&self, start: Date, end: Date) -> T {
        num_traits::cast((self.daycount_fn())(start, end)).unwrap_or_else(T::nan)
    }

    /// Last date the curve can answer for.
    fn max_date(&self) -> Date {
        self.node_dates()
            .last()
            .copied()
            .unwrap_or_else(|| self.valuation_date())
    }
}
