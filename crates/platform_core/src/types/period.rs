//! Tenor and period descriptors.
//!
//! A [`Period`] is an amount of calendar units such as `3M` or `1Y`. Periods
//! identify fixing tenors (e.g. the 3M LIBOR fixing) and shift dates.
//!
//! ```
//! use platform_core::types::period::{Period, PeriodUnit};
//!
//! let tenor: Period = "6M".parse().unwrap();
//! assert_eq!(tenor, Period::new(6, PeriodUnit::Month));
//! assert_eq!(tenor.to_string(), "6M");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::PeriodError;

/// Calendar unit of a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeriodUnit {
    /// Calendar days
    Day,
    /// Weeks of seven calendar days
    Week,
    /// Calendar months
    Month,
    /// Calendar years
    Year,
}

impl PeriodUnit {
    /// Single-letter code used in tenor strings.
    pub fn code(&self) -> char {
        match self {
            PeriodUnit::Day => 'D',
            PeriodUnit::Week => 'W',
            PeriodUnit::Month => 'M',
            PeriodUnit::Year => 'Y',
        }
    }
}

/// A tenor such as `3M`, `1Y` or `1D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    /// Number of units
    pub amount: u32,
    /// Calendar unit
    pub unit: PeriodUnit,
}

impl Period {
    /// Creates a period from an amount and a unit.
    pub const fn new(amount: u32, unit: PeriodUnit) -> Self {
        Self { amount, unit }
    }

    /// Shorthand for a period in days.
    pub const fn days(amount: u32) -> Self {
        Self::new(amount, PeriodUnit::Day)
    }

    /// Shorthand for a period in months.
    pub const fn months(amount: u32) -> Self {
        Self::new(amount, PeriodUnit::Month)
    }

    /// Shorthand for a period in years.
    pub const fn years(amount: u32) -> Self {
        Self::new(amount, PeriodUnit::Year)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    /// Parses strings such as `3M`, `1y`, `2W`, `1D` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let unit = match chars.next_back().map(|c| c.to_ascii_uppercase()) {
            Some('D') => PeriodUnit::Day,
            Some('W') => PeriodUnit::Week,
            Some('M') => PeriodUnit::Month,
            Some('Y') => PeriodUnit::Year,
            _ => return Err(PeriodError::Parse(s.to_string())),
        };
        let amount = chars
            .as_str()
            .parse::<u32>()
            .map_err(|_| PeriodError::Parse(s.to_string()))?;
        Ok(Period::new(amount, unit))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.code())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Period;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Period {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Period {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Period::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_units() {
        assert_eq!("1D".parse::<Period>().unwrap(), Period::days(1));
        assert_eq!("2w".parse::<Period>().unwrap(), Period::new(2, PeriodUnit::Week));
        assert_eq!("3M".parse::<Period>().unwrap(), Period::months(3));
        assert_eq!(" 10Y ".parse::<Period>().unwrap(), Period::years(10));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "M", "3", "3Q", "-1M", "1.5Y"] {
            assert!(bad.parse::<Period>().is_err(), "{} should not parse", bad);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::months(3).to_string(), "3M");
        assert_eq!(Period::new(2, PeriodUnit::Week).to_string(), "2W");
    }

    #[test]
    fn test_usable_as_map_key() {
        use std::collections::HashMap;
        let mut m = HashMap::new();
        m.insert(Period::months(3), "3M");
        assert_eq!(m.get(&"3m".parse::<Period>().unwrap()), Some(&"3M"));
    }
}
