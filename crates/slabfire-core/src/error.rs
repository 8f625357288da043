//! Error types for the Slabfire library.
//!
//! Every failure is a caller-input problem detected before any interpolation
//! work begins; nothing is retried or substituted with a default.

use slabfire_math::MathError;
use thiserror::Error;

/// A specialized Result type for Slabfire operations.
pub type FireResult<T> = Result<T, FireError>;

/// The main error type for Slabfire operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FireError {
    /// An aggregate type, material, or condition is not among the loaded keys.
    #[error("Unknown {kind} '{value}'; valid values: [{}]", .valid.join(", "))]
    UnknownCategory {
        /// What was being looked up (e.g. "aggregate type").
        kind: String,
        /// The value supplied by the caller.
        value: String,
        /// Every value that would have been accepted.
        valid: Vec<String>,
    },

    /// A query value lies outside the digitized domain of a curve.
    #[error("{quantity} {value} is outside [{min}, {max}] for {curve} (violated bound: {})", crossed_bound(.value, .min, .max))]
    OutOfRange {
        /// The queried quantity (e.g. "depth", "fire time").
        quantity: String,
        /// The value supplied by the caller.
        value: f64,
        /// Lower bound of the digitized domain.
        min: f64,
        /// Upper bound of the digitized domain.
        max: f64,
        /// The curve or depth curve the bounds belong to.
        curve: String,
    },

    /// A bounded parameter lies outside its declared interval.
    #[error("{parameter} = {value} is outside the valid interval [{min}, {max}]")]
    DomainError {
        /// Name of the parameter.
        parameter: String,
        /// The offending value.
        value: f64,
        /// Lower bound of the interval.
        min: f64,
        /// Upper bound of the interval.
        max: f64,
    },

    /// A temperature unit selector is not recognized.
    #[error("Invalid temperature unit '{unit}'; valid units: [{}]", .valid.join(", "))]
    InvalidUnit {
        /// The selector supplied by the caller.
        unit: String,
        /// Recognized selectors.
        valid: Vec<String>,
    },

    /// A rating duration is not one of the standard durations.
    #[error("Unsupported rating duration {minutes} min; supported: {supported:?}")]
    UnsupportedDuration {
        /// The duration supplied by the caller, in minutes.
        minutes: u32,
        /// Supported durations, in minutes.
        supported: Vec<u32>,
    },

    /// Table data violates a structural invariant.
    #[error("Invalid data: {reason}")]
    InvalidData {
        /// Description of the violation.
        reason: String,
    },
}

impl FireError {
    /// Creates an unknown category error.
    #[must_use]
    pub fn unknown_category<I, S>(kind: impl Into<String>, value: impl Into<String>, valid: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self::UnknownCategory {
            kind: kind.into(),
            value: value.into(),
            valid: valid.into_iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Creates an out of range error.
    #[must_use]
    pub fn out_of_range(
        quantity: impl Into<String>,
        value: f64,
        min: f64,
        max: f64,
        curve: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            quantity: quantity.into(),
            value,
            min,
            max,
            curve: curve.into(),
        }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain(parameter: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::DomainError {
            parameter: parameter.into(),
            value,
            min,
            max,
        }
    }

    /// Creates an invalid data error.
    #[must_use]
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData {
            reason: reason.into(),
        }
    }

    /// For [`FireError::OutOfRange`], the bound the query crossed.
    ///
    /// Returns `NaN` for every other variant.
    pub fn violated_bound(&self) -> f64 {
        match self {
            Self::OutOfRange {
                value, min, max, ..
            } => crossed_bound(value, min, max),
            _ => f64::NAN,
        }
    }
}

fn crossed_bound(value: &f64, min: &f64, max: &f64) -> f64 {
    if value < min {
        *min
    } else {
        *max
    }
}

impl From<MathError> for FireError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DomainError {
                parameter,
                value,
                min,
                max,
            } => Self::DomainError {
                parameter,
                value,
                min,
                max,
            },
            other => Self::invalid_data(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_lists_valid_keys() {
        let err = FireError::unknown_category("aggregate type", "granite", ["carbonate", "siliceous"]);
        let msg = err.to_string();
        assert!(msg.contains("granite"));
        assert!(msg.contains("[carbonate, siliceous]"));
    }

    #[test]
    fn test_out_of_range_cites_bound() {
        let low = FireError::out_of_range("depth", 9.9, 10.0, 150.0, "carbonate");
        let high = FireError::out_of_range("depth", 150.1, 10.0, 150.0, "carbonate");
        assert_eq!(low.violated_bound(), 10.0);
        assert_eq!(high.violated_bound(), 150.0);
        assert!(high.to_string().contains("violated bound: 150"));
    }

    #[test]
    fn test_math_domain_error_maps_to_domain_error() {
        let err: FireError = MathError::domain("threshold", 2.0, 0.0, 1.0).into();
        assert_eq!(err, FireError::domain("threshold", 2.0, 0.0, 1.0));
    }

    #[test]
    fn test_other_math_errors_map_to_invalid_data() {
        let err: FireError = MathError::insufficient_data(1, 0).into();
        assert!(matches!(err, FireError::InvalidData { .. }));
    }
}
