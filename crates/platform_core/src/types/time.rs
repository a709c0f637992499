//! Dates and day count conventions.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCountConvention`: Year fraction conventions used by rate curves
//! - `DayCountFn`: Plain function pointer computing a year fraction
//!
//! # Examples
//!
//! ```
//! use platform_core::types::time::{Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! // Calculate year fraction using ACT/365F
//! let yf = DayCountConvention::Actual365Fixed.year_fraction(start, end);
//! assert!((yf - 0.4986).abs() < 0.001);
//! ```

use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::{DateError, DayCountError};
use super::period::{Period, PeriodUnit};

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Dates are ordered, hashable and format as ISO 8601 (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use platform_core::types::time::Date;
///
/// let date = Date::from_ymd(2021, 1, 4).unwrap();
/// let parsed: Date = "2021-01-04".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let later = Date::from_ymd(2021, 1, 14).unwrap();
/// assert_eq!(later - date, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// ```
    /// use platform_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the year starting from 1.
    pub fn ordinal(&self) -> u32 {
        self.0.ordinal()
    }

    /// Returns true if the date falls in a leap year.
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Shifts the date by a signed number of calendar days.
    ///
    /// ```
    /// use platform_core::types::time::Date;
    ///
    /// let d = Date::from_ymd(2021, 12, 31).unwrap();
    /// assert_eq!(d.add_days(1).unwrap(), Date::from_ymd(2022, 1, 1).unwrap());
    /// assert_eq!(d.add_days(-30).unwrap(), Date::from_ymd(2021, 12, 1).unwrap());
    /// ```
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Date).ok_or(DateError::Overflow {
            date: self.to_string(),
            shift: format!("{}D", days),
        })
    }

    /// Shifts the date forward by a number of months, clamping to month end.
    ///
    /// ```
    /// use platform_core::types::time::Date;
    ///
    /// let d = Date::from_ymd(2021, 1, 31).unwrap();
    /// assert_eq!(d.add_months(1).unwrap(), Date::from_ymd(2021, 2, 28).unwrap());
    /// ```
    pub fn add_months(self, months: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Date)
            .ok_or(DateError::Overflow {
                date: self.to_string(),
                shift: format!("{}M", months),
            })
    }

    /// Shifts the date forward by a tenor period.
    ///
    /// ```
    /// use platform_core::types::{Date, Period};
    ///
    /// let d = Date::from_ymd(2021, 1, 4).unwrap();
    /// let tenor: Period = "3M".parse().unwrap();
    /// assert_eq!(d.add_period(tenor).unwrap(), Date::from_ymd(2021, 4, 4).unwrap());
    /// ```
    pub fn add_period(self, period: Period) -> Result<Self, DateError> {
        match period.unit {
            PeriodUnit::Day => self.add_days(i64::from(period.amount)),
            PeriodUnit::Week => self.add_days(7 * i64::from(period.amount)),
            PeriodUnit::Month => self.add_months(period.amount),
            PeriodUnit::Year => self.add_months(12 * period.amount),
        }
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Function computing the signed year fraction between two dates.
///
/// Rate curves hand this out so callers reproduce the exact convention used
/// for every rate conversion.
pub type DayCountFn = fn(Date, Date) -> f64;

/// Day count convention (year fraction convention).
///
/// # Variants
/// - `Actual365Fixed`: actual days / 365
/// - `Actual360`: actual days / 360
/// - `Thirty360Isda`: 30/360 bond basis (ISDA)
/// - `ActualActualIsda`: days in each calendar year over that year's length
///
/// All conventions are antisymmetric: `yf(a, b) == -yf(b, a)`.
///
/// ```
/// use platform_core::types::time::{Date, DayCountConvention};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 7, 1).unwrap();
///
/// let yf_360 = DayCountConvention::Actual360.year_fraction(start, end);
/// assert!((yf_360 - 0.5056).abs() < 0.001);
/// assert_eq!(DayCountConvention::Actual360.year_fraction(end, start), -yf_360);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    Actual365Fixed,

    /// Actual/360: actual_days / 360.0
    ///
    /// Money market convention for USD and EUR deposits.
    Actual360,

    /// 30/360 ISDA bond basis.
    ///
    /// Each month is treated as having 30 days, and the year as 360 days.
    Thirty360Isda,

    /// Actual/Actual ISDA.
    ///
    /// The portion of the period falling in a leap year is divided by 366,
    /// the remainder by 365.
    ActualActualIsda,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// ```
    /// use platform_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Actual365Fixed.name(), "ACT/365F");
    /// assert_eq!(DayCountConvention::ActualActualIsda.name(), "ACT/ACT ISDA");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual365Fixed => "ACT/365F",
            DayCountConvention::Actual360 => "ACT/360",
            DayCountConvention::Thirty360Isda => "30/360 ISDA",
            DayCountConvention::ActualActualIsda => "ACT/ACT ISDA",
        }
    }

    /// Returns the year fraction function for this convention.
    pub fn year_fraction_fn(&self) -> DayCountFn {
        match self {
            DayCountConvention::Actual365Fixed => actual_365_fixed,
            DayCountConvention::Actual360 => actual_360,
            DayCountConvention::Thirty360Isda => thirty_360_isda,
            DayCountConvention::ActualActualIsda => actual_actual_isda,
        }
    }

    /// Calculates the signed year fraction between two dates.
    ///
    /// Negative if `start > end`.
    #[inline]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        (self.year_fraction_fn())(start, end)
    }
}

fn actual_365_fixed(start: Date, end: Date) -> f64 {
    (end - start) as f64 / 365.0
}

fn actual_360(start: Date, end: Date) -> f64 {
    (end - start) as f64 / 360.0
}

fn thirty_360_isda(start: Date, end: Date) -> f64 {
    if start > end {
        return -thirty_360_isda(end, start);
    }

    let d1 = start.day().min(30);
    let d2 = if end.day() == 31 && d1 == 30 {
        30
    } else {
        end.day()
    };

    let days = 360 * (end.year() - start.year())
        + 30 * (end.month() as i32 - start.month() as i32)
        + (d2 as i32 - d1 as i32);
    days as f64 / 360.0
}

fn actual_actual_isda(start: Date, end: Date) -> f64 {
    if start > end {
        return -actual_actual_isda(end, start);
    }

    let (y1, y2) = (start.year(), end.year());
    let len1 = days_in_year(start);
    if y1 == y2 {
        return (end - start) as f64 / len1;
    }

    // Remainder of the first year, whole years in between, head of the last.
    let first = (len1 - f64::from(start.ordinal() - 1)) / len1;
    let last = f64::from(end.ordinal() - 1) / days_in_year(end);
    first + f64::from(y2 - y1 - 1) + last
}

fn days_in_year(date: Date) -> f64 {
    if date.is_leap_year() {
        366.0
    } else {
        365.0
    }
}

impl FromStr for DayCountConvention {
    type Err = DayCountError;

    /// Parses day count convention from string (case-insensitive).
    ///
    /// Supports multiple aliases for each convention:
    /// - ACT/365F: "ACT/365", "ACT/365F", "Actual/365 Fixed", "A365"
    /// - ACT/360: "ACT/360", "Actual/360", "A360"
    /// - 30/360 ISDA: "30/360", "30/360 ISDA", "Thirty360"
    /// - ACT/ACT ISDA: "ACT/ACT", "ACT/ACT ISDA", "Actual/Actual"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' ', '_', '-'], "").as_str() {
            "ACT365" | "ACT365F" | "ACT365FIXED" | "ACTUAL365" | "ACTUAL365FIXED" | "A365" => {
                Ok(DayCountConvention::Actual365Fixed)
            }
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::Actual360),
            "30360" | "30360ISDA" | "THIRTY360" | "THIRTY360ISDA" => {
                Ok(DayCountConvention::Thirty360Isda)
            }
            "ACTACT" | "ACTACTISDA" | "ACTUALACTUAL" | "ACTUALACTUALISDA" => {
                Ok(DayCountConvention::ActualActualIsda)
            }
            _ => Err(DayCountError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_from_ymd_invalid() {
        match Date::from_ymd(2021, 2, 30) {
            Err(DateError::InvalidDate { year, month, day }) => {
                assert_eq!((year, month, day), (2021, 2, 30));
            }
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2021-06-04".parse().unwrap();
        assert_eq!(d, date(2021, 6, 4));
        assert_eq!(d.to_string(), "2021-06-04");
        assert!(Date::parse("04/06/2021").is_err());
    }

    #[test]
    fn test_sub_returns_signed_days() {
        let a = date(2021, 1, 4);
        let b = date(2021, 6, 4);
        assert_eq!(b - a, 151);
        assert_eq!(a - b, -151);
    }

    #[test]
    fn test_add_period_year_and_week() {
        let d = date(2020, 2, 29);
        assert_eq!(d.add_period("1Y".parse().unwrap()).unwrap(), date(2021, 2, 28));
        assert_eq!(d.add_period("2W".parse().unwrap()).unwrap(), date(2020, 3, 14));
    }

    #[test]
    fn test_actual_365_fixed() {
        let yf = DayCountConvention::Actual365Fixed.year_fraction(date(2021, 1, 4), date(2022, 1, 4));
        assert_relative_eq!(yf, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_actual_360() {
        let yf = DayCountConvention::Actual360.year_fraction(date(2021, 1, 1), date(2021, 1, 31));
        assert_relative_eq!(yf, 30.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn test_thirty_360_month_end() {
        let dc = DayCountConvention::Thirty360Isda;
        // 31st is treated as the 30th on both ends
        assert_relative_eq!(
            dc.year_fraction(date(2021, 1, 31), date(2021, 3, 31)),
            60.0 / 360.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            dc.year_fraction(date(2021, 1, 15), date(2022, 1, 15)),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_actual_actual_isda_spanning_leap_year() {
        let dc = DayCountConvention::ActualActualIsda;
        // 2023-07-01 -> 2024-07-01: 184/365 + 182/366
        let yf = dc.year_fraction(date(2023, 7, 1), date(2024, 7, 1));
        assert_relative_eq!(yf, 184.0 / 365.0 + 182.0 / 366.0, epsilon = 1e-12);

        let whole = dc.year_fraction(date(2020, 1, 1), date(2023, 1, 1));
        assert_relative_eq!(whole, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_year_fraction_fn_matches_method() {
        let start = date(2021, 1, 4);
        let end = date(2021, 6, 4);
        for dc in [
            DayCountConvention::Actual365Fixed,
            DayCountConvention::Actual360,
            DayCountConvention::Thirty360Isda,
            DayCountConvention::ActualActualIsda,
        ] {
            let f = dc.year_fraction_fn();
            assert_eq!(f(start, end), dc.year_fraction(start, end));
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(
            "Actual/365 Fixed".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Actual365Fixed
        );
        assert_eq!(
            "act/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Actual360
        );
        assert_eq!(
            "30/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360Isda
        );
        assert_eq!(
            "ACT/ACT ISDA".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActualActualIsda
        );
        assert!(matches!(
            "BUS/252".parse::<DayCountConvention>(),
            Err(DayCountError::Unknown(_))
        ));
    }

    #[test]
    fn test_name_parses_back() {
        for dc in [
            DayCountConvention::Actual365Fixed,
            DayCountConvention::Actual360,
            DayCountConvention::Thirty360Isda,
            DayCountConvention::ActualActualIsda,
        ] {
            assert_eq!(dc.name().parse::<DayCountConvention>().unwrap(), dc);
        }
    }

    fn date_strategy() -> impl Strategy<Value = Date> {
        (1990i32..2060, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| date(y, m, d))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn test_year_fraction_antisymmetric(a in date_strategy(), b in date_strategy()) {
            for dc in [
                DayCountConvention::Actual365Fixed,
                DayCountConvention::Actual360,
                DayCountConvention::Thirty360Isda,
                DayCountConvention::ActualActualIsda,
            ] {
                let forward = dc.year_fraction(a, b);
                let backward = dc.year_fraction(b, a);
                prop_assert!((forward + backward).abs() < 1e-12);
                if a < b {
                    prop_assert!(forward >= 0.0);
                }
            }
        }
    }
}
