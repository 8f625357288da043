//! Temperature units.
//!
//! Tables are stored in degrees Celsius. Queries may be expressed in either
//! of the two supported units; conversion is affine and exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FireError;
use crate::types::normalize_key;

/// Temperature unit selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius (internal table unit).
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Converts a value expressed in this unit to Celsius.
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    /// Converts a Celsius value to this unit.
    #[must_use]
    pub fn from_celsius(self, value_c: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value_c,
            TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
        }
    }

    /// Short selector name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    /// Returns all supported units.
    #[must_use]
    pub fn all() -> &'static [TemperatureUnit] {
        &[TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit]
    }

    /// Parses an optional selector, defaulting to Celsius.
    pub fn parse_optional(selector: Option<&str>) -> Result<Self, FireError> {
        selector.map_or(Ok(TemperatureUnit::Celsius), str::parse)
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TemperatureUnit {
    type Err = FireError;

    /// Accepts `c`, `celsius`, `degc`, `f`, `fahrenheit`, `degf` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).trim_start_matches('°') {
            "c" | "celsius" | "degc" | "deg_c" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" | "degf" | "deg_f" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(FireError::InvalidUnit {
                unit: s.to_string(),
                valid: TemperatureUnit::all()
                    .iter()
                    .map(|u| u.name().to_string())
                    .collect(),
            }),
        }
    }
}

/// Converts a temperature between units.
#[must_use]
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    to.from_celsius(from.to_celsius(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_points() {
        assert_eq!(TemperatureUnit::Fahrenheit.to_celsius(32.0), 0.0);
        assert_eq!(TemperatureUnit::Fahrenheit.to_celsius(212.0), 100.0);
        assert_eq!(TemperatureUnit::Fahrenheit.from_celsius(100.0), 212.0);
        assert_eq!(TemperatureUnit::Celsius.to_celsius(538.0), 538.0);
    }

    #[test]
    fn test_round_trip() {
        for t in [-40.0, 0.0, 20.0, 427.0, 1093.0] {
            let f = convert_temperature(t, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
            let back = convert_temperature(f, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
            assert_relative_eq!(back, t, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("C".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert_eq!("Fahrenheit".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!("°F".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::parse_optional(None).unwrap(), TemperatureUnit::Celsius);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "kelvin".parse::<TemperatureUnit>().unwrap_err();
        match err {
            FireError::InvalidUnit { unit, valid } => {
                assert_eq!(unit, "kelvin");
                assert_eq!(valid, vec!["celsius", "fahrenheit"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
