//! Date-based interpolated rate curve.

use super::{CurveContext, CurveType, InterpolationMethod, RateCurve};
use crate::batch;
use crate::error::MarketDataError;
use platform_core::math::broadcast::broadcast_pairs;
use platform_core::math::interpolators::{
    CubicSplineInterpolator, Interpolator, LinearInterpolator,
};
use platform_core::types::{Date, DayCountConvention, FloatDtype};
use std::iter;
use tracing::debug;

/// Interpolation state derived from the node data.
#[derive(Debug, Clone)]
enum NodeInterpolator<T: FloatDtype> {
    /// Single node on a zero-rate curve: the rate is flat.
    FlatRate(T),
    /// Zero rates, linear between nodes.
    ZeroRate(LinearInterpolator<T>),
    /// Zero rates, natural cubic spline between nodes.
    Spline(CubicSplineInterpolator<T>),
    /// Log discount factors, anchored at `(0, 0)`.
    LogDiscount(LinearInterpolator<T>),
}

impl<T: FloatDtype> NodeInterpolator<T> {
    fn build(
        method: InterpolationMethod,
        times: &[T],
        discount_factors: &[T],
        rates: &[T],
    ) -> Result<Self, MarketDataError> {
        let interpolator = match method {
            InterpolationMethod::Linear if times.len() == 1 => NodeInterpolator::FlatRate(rates[0]),
            InterpolationMethod::Linear => {
                NodeInterpolator::ZeroRate(LinearInterpolator::new(times, rates)?)
            }
            InterpolationMethod::Cubic => {
                NodeInterpolator::Spline(CubicSplineInterpolator::new(times, rates)?)
            }
            InterpolationMethod::ConstantForward => {
                let xs: Vec<T> = iter::once(T::zero()).chain(times.iter().copied()).collect();
                let ys: Vec<T> = iter::once(T::zero())
                    .chain(discount_factors.iter().map(|df| df.ln()))
                    .collect();
                NodeInterpolator::LogDiscount(LinearInterpolator::new(&xs, &ys)?)
            }
        };
        Ok(interpolator)
    }
}

/// Rate curve fitted exactly through dated discount factor nodes.
///
/// Node times are year fractions from the valuation date under the curve's
/// day count convention. Node zero rates are derived as
/// `r_i = -ln(DF_i) / t_i` and kept in step with the discount factors.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (`f64` or `f32`)
///
/// # Range
///
/// The curve answers for dates in `[valuation_date, last node]`. At a node
/// date the stored discount factor is returned without interpolation.
/// Before the first node, zero-rate methods hold the first node rate flat
/// and [`InterpolationMethod::ConstantForward`] interpolates the log
/// discount factor from `(0, 0)`.
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
/// let dates = [
///     Date::from_ymd(2021, 6, 4).unwrap(),
///     Date::from_ymd(2022, 1, 4).unwrap(),
/// ];
/// let curve = InterpolatedRateCurve::new(
///     CurveType::RiskFree(Currency::USD),
///     valuation,
///     &dates,
///     &[0.999_f64, 0.995],
///     DayCountConvention::Actual365Fixed,
///     InterpolationMethod::Linear,
/// )
/// .unwrap();
///
/// let ctx = CurveContext::none();
/// let mid = Date::from_ymd(2021, 9, 1).unwrap();
/// let df = curve.discount_factor(&[mid], &ctx).unwrap()[0];
/// assert!(df < 0.999 && df > 0.995);
///
/// let beyond = Date::from_ymd(2023, 1, 4).unwrap();
/// assert!(curve.discount_factor(&[beyond], &ctx).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedRateCurve<T: FloatDtype> {
    curve_type: CurveType,
    valuation_date: Date,
    daycount: DayCountConvention,
    method: InterpolationMethod,
    /// Node dates, strictly increasing, all after the valuation date
    dates: Vec<Date>,
    /// Year fractions of the node dates from the valuation date
    times: Vec<T>,
    discount_factors: Vec<T>,
    /// Continuously compounded zero rates at the nodes
    rates: Vec<T>,
    interpolator: NodeInterpolator<T>,
}

impl<T: FloatDtype> InterpolatedRateCurve<T> {
    /// Construct a curve from node dates and discount factors.
    ///
    /// # Returns
    ///
    /// * `Err(MarketDataError::ShapeMismatch)` - Dates and discount factors differ in length
    /// * `Err(MarketDataError::InsufficientData)` - No nodes, or fewer than 3 for `Cubic`
    /// * `Err(MarketDataError::InvalidNodes)` - Dates not strictly increasing after the
    ///   valuation date, or a discount factor that is not positive and finite
    pub fn new(
        curve_type: CurveType,
        valuation_date: Date,
        dates: &[Date],
        discount_factors: &[T],
        daycount: DayCountConvention,
        method: InterpolationMethod,
    ) -> Result<Self, MarketDataError> {
        if dates.len() != discount_factors.len() {
            return Err(MarketDataError::ShapeMismatch {
                argument: "discount_factors",
                got: discount_factors.len(),
                expected: dates.len(),
            });
        }
        let need = method.min_nodes();
        if dates.len() < need {
            return Err(MarketDataError::InsufficientData {
                got: dates.len(),
                need,
            });
        }

        let times = node_times(valuation_date, dates, daycount)?;
        validate_discount_factors(discount_factors)?;
        let rates = zero_rates(&times, discount_factors);
        let interpolator = NodeInterpolator::build(method, &times, discount_factors, &rates)?;

        debug!(
            curve_type = %curve_type,
            valuation_date = %valuation_date,
            nodes = dates.len(),
            daycount = daycount.name(),
            interpolation = method.name(),
            "rate curve constructed"
        );

        Ok(Self {
            curve_type,
            valuation_date,
            daycount,
            method,
            dates: dates.to_vec(),
            times,
            discount_factors: discount_factors.to_vec(),
            rates,
            interpolator,
        })
    }

    /// Construct a curve from node dates and continuously compounded zero rates.
    ///
    /// Node discount factors are `exp(-r_i * t_i)`. Errors as for [`new`](Self::new).
    pub fn from_zero_rates(
        curve_type: CurveType,
        valuation_date: Date,
        dates: &[Date],
        rates: &[T],
        daycount: DayCountConvention,
        method: InterpolationMethod,
    ) -> Result<Self, MarketDataError> {
        if dates.len() != rates.len() {
            return Err(MarketDataError::ShapeMismatch {
                argument: "rates",
                got: rates.len(),
                expected: dates.len(),
            });
        }
        let times = node_times(valuation_date, dates, daycount)?;
        let discount_factors: Vec<T> = times
            .iter()
            .zip(rates)
            .map(|(&t, &r)| (-r * t).exp())
            .collect();
        Self::new(
            curve_type,
            valuation_date,
            dates,
            &discount_factors,
            daycount,
            method,
        )
    }

    /// Year fractions of the nodes from the valuation date.
    #[inline]
    pub fn node_times(&self) -> &[T] {
        &self.times
    }

    fn check_date(&self, argument: &'static str, date: Date) -> Result<(), MarketDataError> {
        let max = self.max_date();
        if date < self.valuation_date || date > max {
            return Err(MarketDataError::DateOutOfRange {
                argument,
                date,
                min: self.valuation_date,
                max,
            });
        }
        Ok(())
    }

    fn discount_factor_at(&self, argument: &'static str, date: Date) -> Result<T, MarketDataError> {
        self.check_date(argument, date)?;
        if date == self.valuation_date {
            return Ok(T::one());
        }
        if let Ok(i) = self.dates.binary_search(&date) {
            return Ok(self.discount_factors[i]);
        }

        let t = self.year_fraction(self.valuation_date, date);
        match &self.interpolator {
            NodeInterpolator::LogDiscount(log_df) => Ok(log_df.interpolate(t)?.exp()),
            _ => Ok((-self.zero_rate_at_time(t)? * t).exp()),
        }
    }

    fn discount_rate_at(&self, argument: &'static str, date: Date) -> Result<T, MarketDataError> {
        self.check_date(argument, date)?;
        if let Ok(i) = self.dates.binary_search(&date) {
            return Ok(self.rates[i]);
        }

        let t = self.year_fraction(self.valuation_date, date);
        if t <= T::zero() {
            // Short end: no accrual yet, report the first node rate.
            return Ok(self.rates[0]);
        }
        self.zero_rate_at_time(t)
    }

    /// Zero rate at a positive time within the node range.
    fn zero_rate_at_time(&self, t: T) -> Result<T, MarketDataError> {
        let rate = match &self.interpolator {
            NodeInterpolator::FlatRate(r) => *r,
            NodeInterpolator::ZeroRate(_) | NodeInterpolator::Spline(_) if t < self.times[0] => {
                self.rates[0]
            }
            NodeInterpolator::ZeroRate(linear) => linear.interpolate(t)?,
            NodeInterpolator::Spline(spline) => spline.interpolate(t)?,
            NodeInterpolator::LogDiscount(log_df) => -log_df.interpolate(t)? / t,
        };
        Ok(rate)
    }

    fn forward_rate_between(&self, start: Date, end: Date) -> Result<T, MarketDataError> {
        if end <= start {
            return Err(MarketDataError::InvalidAccrualPeriod { start, end });
        }
        let df_start = self.discount_factor_at("start_dates", start)?;
        let df_end = self.discount_factor_at("end_dates", end)?;
        let tau = self.year_fraction(start, end);
        if tau <= T::zero() {
            return Err(MarketDataError::InvalidAccrualPeriod { start, end });
        }
        Ok((df_start / df_end - T::one()) / tau)
    }
}

impl<T: FloatDtype> RateCurve<T> for InterpolatedRateCurve<T> {
    fn discount_factor(
        &self,
        dates: &[Date],
        context: &CurveContext,
    ) -> Result<Vec<T>, MarketDataError> {
        context.check(&self.curve_type)?;
        batch::evaluate(dates, |date| self.discount_factor_at("dates", date))
    }

    fn forward_rate(
        &self,
        start_dates: &[Date],
        end_dates: &[Date],
        context: &CurveContext,
    ) -> Result<Vec<T>, MarketDataError> {
        context.check(&self.curve_type)?;
        let periods: Vec<(Date, Date)> = broadcast_pairs(start_dates, end_dates)
            .map_err(|e| MarketDataError::from_shape("end_dates", e))?
            .collect();
        batch::evaluate(&periods, |(start, end)| self.forward_rate_between(start, end))
    }

    fn discount_rate(
        &self,
        dates: &[Date],
        context: &CurveContext,
    ) -> Result<Vec<T>, MarketDataError> {
        context.check(&self.curve_type)?;
        batch::evaluate(dates, |date| self.discount_rate_at("dates", date))
    }

    #[inline]
    fn curve_type(&self) -> &CurveType {
        &self.curve_type
    }

    #[inline]
    fn interpolation_method(&self) -> InterpolationMethod {
        self.method
    }

    #[inline]
    fn discount_factor_nodes(&self) -> &[T] {
        &self.discount_factors
    }

    #[inline]
    fn discount_rate_nodes(&self) -> &[T] {
        &self.rates
    }

    #[inline]
    fn node_dates(&self) -> &[Date] {
        &self.dates
    }

    fn set_discount_factor_nodes(&mut self, values: &[T]) -> Result<&[T], MarketDataError> {
        if values.len() != self.dates.len() {
            return Err(MarketDataError::ShapeMismatch {
                argument: "values",
                got: values.len(),
                expected: self.dates.len(),
            });
        }
        validate_discount_factors(values)?;
        let rates = zero_rates(&self.times, values);
        let interpolator = NodeInterpolator::build(self.method, &self.times, values, &rates)?;

        self.discount_factors = values.to_vec();
        self.rates = rates;
        self.interpolator = interpolator;

        debug!(
            curve_type = %self.curve_type,
            nodes = values.len(),
            "discount factor nodes updated"
        );
        Ok(&self.discount_factors)
    }

    #[inline]
    fn daycount_convention(&self) -> DayCountConvention {
        self.daycount
    }

    #[inline]
    fn valuation_date(&self) -> Date {
        self.valuation_date
    }
}

/// Year fractions of node dates, checked to increase strictly from zero.
fn node_times<T: FloatDtype>(
    valuation_date: Date,
    dates: &[Date],
    daycount: DayCountConvention,
) -> Result<Vec<T>, MarketDataError> {
    let yf = daycount.year_fraction_fn();
    let mut previous = valuation_date;
    let mut previous_time = T::zero();
    let mut times = Vec::with_capacity(dates.len());

    for &date in dates {
        if date <= previous {
            return Err(MarketDataError::InvalidNodes(format!(
                "node date {} must be after {}",
                date, previous
            )));
        }
        let t: T = num_traits::cast(yf(valuation_date, date)).unwrap_or_else(T::nan);
        if !(t > previous_time) {
            return Err(MarketDataError::InvalidNodes(format!(
                "node date {} does not accrue past {} under {}",
                date,
                previous,
                daycount.name()
            )));
        }
        times.push(t);
        previous = date;
        previous_time = t;
    }
    Ok(times)
}

fn validate_discount_factors<T: FloatDtype>(values: &[T]) -> Result<(), MarketDataError> {
    match values
        .iter()
        .position(|&df| !(df > T::zero()) || !df.is_finite())
    {
        Some(i) => Err(MarketDataError::InvalidNodes(format!(
            "discount factor {:?} at node {} must be positive and finite",
            values[i], i
        ))),
        None => Ok(()),
    }
}

fn zero_rates<T: FloatDtype>(times: &[T], discount_factors: &[T]) -> Vec<T> {
    times
        .iter()
        .zip(discount_factors)
        .map(|(&t, &df)| -df.ln() / t)
        .collect()
}
