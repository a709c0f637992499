//! Historical observation series (spot histories and rate fixings).
//!
//! This module provides:
//! - [`ObservationSeries`]: Date-sorted observations with as-of lookup
//! - [`FixingKey`]: Identifier of a fixing series

use crate::batch;
use crate::error::MarketDataError;
use platform_core::types::{Date, FloatDtype, Period};
use std::fmt;

/// Identifier of a rate fixing series, e.g. `LIBOR 3M`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixingKey {
    /// Published index name
    pub fixing_type: String,
    /// Tenor of the fixing
    pub tenor: Period,
}

impl FixingKey {
    /// Create a fixing key.
    pub fn new(fixing_type: impl Into<String>, tenor: Period) -> Self {
        Self {
            fixing_type: fixing_type.into(),
            tenor,
        }
    }
}

impl fmt::Display for FixingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.fixing_type, self.tenor)
    }
}

/// Observed values of one quantity, strictly ordered by date.
///
/// Lookups are as-of: the value for a date is the latest observation dated
/// on or before it. Dates before the first observation have no value.
///
/// # Example
///
/// ```
/// use platform_core::types::Date;
/// use platform_market::observations::ObservationSeries;
///
/// let d = |day| Date::from_ymd(2021, 1, day).unwrap();
/// let series = ObservationSeries::new("AAPL", vec![(d(5), 131.0), (d(4), 129.4)]).unwrap();
///
/// assert_eq!(series.value_at(d(4)).unwrap(), 129.4);
/// assert_eq!(series.value_at(d(6)).unwrap(), 131.0);
/// assert!(series.value_at(d(3)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSeries<T: FloatDtype> {
    name: String,
    dates: Vec<Date>,
    values: Vec<T>,
}

impl<T: FloatDtype> ObservationSeries<T> {
    /// Build a series from `(date, value)` pairs in any order.
    ///
    /// # Returns
    ///
    /// * `Err(MarketDataError::InvalidObservations)` - No points, a repeated
    ///   date, or a non-finite value
    pub fn new(name: impl Into<String>, mut points: Vec<(Date, T)>) -> Result<Self, MarketDataError> {
        let name = name.into();
        let invalid = |reason: String| MarketDataError::InvalidObservations {
            series: name.clone(),
            reason,
        };

        if points.is_empty() {
            return Err(invalid("no observations".to_string()));
        }
        points.sort_by_key(|&(date, _)| date);
        if let Some(pair) = points.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(invalid(format!("duplicate observation on {}", pair[0].0)));
        }
        if let Some((date, value)) = points.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("non-finite value {:?} on {}", value, date)));
        }

        let (dates, values) = points.into_iter().unzip();
        Ok(Self {
            name,
            dates,
            values,
        })
    }

    /// Series name used in error messages.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Observation dates in increasing order.
    #[inline]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Observed values, aligned with [`dates`](Self::dates).
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always false; a series holds at least one observation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First observation date.
    pub fn first_date(&self) -> Date {
        self.dates[0]
    }

    /// Last observation date.
    pub fn last_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Latest observed value on or before `date`.
    ///
    /// # Returns
    ///
    /// * `Err(MarketDataError::MissingObservation)` - `date` precedes the first observation
    pub fn value_at(&self, date: Date) -> Result<T, MarketDataError> {
        match self.dates.partition_point(|&d| d <= date) {
            0 => Err(MarketDataError::MissingObservation {
                series: self.name.clone(),
                date,
            }),
            n => Ok(self.values[n - 1]),
        }
    }

    /// As-of values for a batch of dates.
    pub fn values_at(&self, dates: &[Date]) -> Result<Vec<T>, MarketDataError> {
        batch::evaluate(dates, |date| self.value_at(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn libor() -> ObservationSeries<f64> {
        ObservationSeries::new(
            FixingKey::new("LIBOR", Period::months(3)).to_string(),
            vec![
                (d(2020, 12, 30), 0.0024),
                (d(2020, 12, 31), 0.0023),
                (d(2021, 1, 4), 0.0022),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_exact_and_as_of_lookup() {
        let s = libor();
        assert_eq!(s.value_at(d(2020, 12, 31)).unwrap(), 0.0023);
        // Weekend and holiday fall back to the last publication.
        assert_eq!(s.value_at(d(2021, 1, 2)).unwrap(), 0.0023);
        assert_eq!(s.value_at(d(2021, 2, 1)).unwrap(), 0.0022);
    }

    #[test]
    fn test_before_first_observation() {
        match libor().value_at(d(2020, 1, 1)) {
            Err(MarketDataError::MissingObservation { series, date }) => {
                assert_eq!(series, "LIBOR 3M");
                assert_eq!(date, d(2020, 1, 1));
            }
            other => panic!("Expected MissingObservation, got {:?}", other),
        }
    }

    #[test]
    fn test_values_at_batch() {
        let values = libor()
            .values_at(&[d(2021, 1, 4), d(2020, 12, 30)])
            .unwrap();
        assert_eq!(values, vec![0.0022, 0.0024]);
        assert!(libor().values_at(&[d(2021, 1, 4), d(2019, 1, 1)]).is_err());
    }

    #[test]
    fn test_rejects_invalid_points() {
        let empty = ObservationSeries::<f64>::new("X", vec![]);
        assert!(matches!(
            empty,
            Err(MarketDataError::InvalidObservations { .. })
        ));

        let dup = ObservationSeries::new("X", vec![(d(2021, 1, 4), 1.0), (d(2021, 1, 4), 2.0)]);
        assert!(matches!(dup, Err(MarketDataError::InvalidObservations { .. })));

        let nan = ObservationSeries::new("X", vec![(d(2021, 1, 4), f64::NAN)]);
        assert!(matches!(nan, Err(MarketDataError::InvalidObservations { .. })));
    }

    #[test]
    fn test_sorted_on_construction() {
        let s = ObservationSeries::new("X", vec![(d(2021, 1, 5), 2.0), (d(2021, 1, 4), 1.0)]).unwrap();
        assert_eq!(s.dates(), &[d(2021, 1, 4), d(2021, 1, 5)]);
        assert_eq!(s.values(), &[1.0, 2.0]);
        assert_eq!(s.first_date(), d(2021, 1, 4));
        assert_eq!(s.last_date(), d(2021, 1, 5));
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
    }
}
