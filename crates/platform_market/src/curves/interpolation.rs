//! Interpolation schemes for discount curves.

use crate::error::MarketDataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a curve fills the gaps between its nodes.
///
/// | Method | Interpolated quantity | Before the first node |
/// |--------|-----------------------|-----------------------|
/// | `Linear` | continuously compounded zero rate | first node rate held flat |
/// | `ConstantForward` | log discount factor | log DF from `(0, 0)` |
/// | `Cubic` | zero rate, natural spline | first node rate held flat |
///
/// `ConstantForward` gives a piecewise constant instantaneous forward rate.
/// `Cubic` needs at least 3 nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMethod {
    /// Linear in zero rates.
    #[default]
    Linear,
    /// Linear in log discount factors.
    #[serde(alias = "log_linear")]
    ConstantForward,
    /// Natural cubic spline in zero rates.
    Cubic,
}

impl InterpolationMethod {
    /// Snake-case name.
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationMethod::Linear => "linear",
            InterpolationMethod::ConstantForward => "constant_forward",
            InterpolationMethod::Cubic => "cubic",
        }
    }

    /// Minimum number of curve nodes the method needs.
    pub fn min_nodes(&self) -> usize {
        match self {
            InterpolationMethod::Cubic => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpolationMethod {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "linear" => Ok(InterpolationMethod::Linear),
            "constant_forward" | "log_linear" => Ok(InterpolationMethod::ConstantForward),
            "cubic" => Ok(InterpolationMethod::Cubic),
            _ => Err(MarketDataError::Config(format!(
                "unknown interpolation method: {:?}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            "Log-Linear".parse::<InterpolationMethod>().unwrap(),
            InterpolationMethod::ConstantForward
        );
        assert_eq!(
            "CUBIC".parse::<InterpolationMethod>().unwrap(),
            InterpolationMethod::Cubic
        );
        assert!("quadratic".parse::<InterpolationMethod>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&InterpolationMethod::ConstantForward).unwrap();
        assert_eq!(json, "\"constant_forward\"");
        let method: InterpolationMethod = serde_json::from_str("\"log_linear\"").unwrap();
        assert_eq!(method, InterpolationMethod::ConstantForward);
    }

    #[test]
    fn test_min_nodes() {
        assert_eq!(InterpolationMethod::Cubic.min_nodes(), 3);
        assert_eq!(InterpolationMethod::Linear.min_nodes(), 1);
        assert_eq!(InterpolationMethod::default(), InterpolationMethod::Linear);
    }
}
