//! Error types for curve tables and table loading.

use slabfire_core::FireError;
use slabfire_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve table operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for building and loading curve tables.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// A table file could not be read.
    #[error("Cannot read {path}: {reason}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },

    /// A row could not be parsed.
    #[error("Parse error in {source_name} (line {line}): {reason}")]
    Parse {
        /// Name of the table being read.
        source_name: String,
        /// 1-based line number, counting the header.
        line: u64,
        /// Description of the problem.
        reason: String,
    },

    /// A parsed value violates the table contract.
    #[error("Invalid value in {source_name} (line {line}): {reason}")]
    InvalidValue {
        /// Name of the table being read.
        source_name: String,
        /// 1-based line number, counting the header.
        line: u64,
        /// Description of the problem.
        reason: String,
    },

    /// A table contained no data rows.
    #[error("Table {source_name} contains no data rows")]
    Empty {
        /// Name of the table.
        source_name: String,
    },

    /// A curve key was supplied twice.
    #[error("Duplicate curve key: {key}")]
    DuplicateKey {
        /// The duplicated key.
        key: String,
    },

    /// Depth values of a surface are not strictly increasing.
    #[error("Non-monotonic depths at index {index}: {prev} >= {current}")]
    NonMonotonicDepths {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous depth.
        prev: f64,
        /// Current depth.
        current: f64,
    },

    /// A knot sequence failed curve validation.
    #[error("Invalid curve {context}: {source}")]
    Curve {
        /// Which curve was being built.
        context: String,
        /// The validation failure.
        #[source]
        source: MathError,
    },

    /// A category key in the data was not recognized.
    #[error(transparent)]
    Category(#[from] FireError),
}

impl CurveError {
    /// Creates a curve validation error.
    #[must_use]
    pub fn curve(context: impl Into<String>, source: MathError) -> Self {
        Self::Curve {
            context: context.into(),
            source,
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(source_name: impl Into<String>, line: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(
        source_name: impl Into<String>,
        line: u64,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            source_name: source_name.into(),
            line,
            reason: reason.into(),
        }
    }
}
