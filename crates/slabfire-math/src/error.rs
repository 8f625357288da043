//! Error types for curve construction and interpolation.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while building or querying a curve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A bounded parameter lies outside its valid interval.
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

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Knot abscissae are not strictly increasing.
    #[error("Non-monotonic x values at index {index}: {prev} >= {current}")]
    NonMonotonic {
        /// Index where the violation occurred.
        index: usize,
        /// Previous x value.
        prev: f64,
        /// Current x value.
        current: f64,
    },

    /// A knot coordinate is NaN or infinite.
    #[error("Non-finite knot at index {index}: ({x}, {y})")]
    NonFinite {
        /// Index of the knot.
        index: usize,
        /// Knot abscissa.
        x: f64,
        /// Knot ordinate.
        y: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a domain error for a parameter outside `[min, max]`.
    #[must_use]
    pub fn domain(parameter: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::DomainError {
            parameter: parameter.into(),
            value,
            min,
            max,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::domain("threshold", 1.5, 0.0, 1.0);
        assert!(err.to_string().contains("threshold = 1.5"));
        assert!(err.to_string().contains("[0, 1]"));
    }

    #[test]
    fn test_non_monotonic_display() {
        let err = MathError::NonMonotonic {
            index: 3,
            prev: 20.0,
            current: 20.0,
        };
        assert!(err.to_string().contains("index 3"));
    }
}
