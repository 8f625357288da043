//! # Slabfire Math
//!
//! Numerical building blocks for the Slabfire fire-resistance library.
//!
//! This crate provides:
//!
//! - **Curves**: Immutable, validated sequences of `(x, y)` knots
//! - **Interpolation**: Piecewise-linear evaluation with boundary clamping
//! - **Inverse Lookup**: Threshold search on monotonically non-increasing curves
//!
//! ## Design Philosophy
//!
//! - **No Extrapolation**: Queries outside the digitized range clamp to the end knots
//! - **Eager Validation**: Malformed knot data is rejected when a curve is built
//! - **Stateless**: Every evaluation is a pure function of the curve and the query
//!
//! ## Example
//!
//! ```rust
//! use slabfire_math::Curve;
//!
//! let curve = Curve::from_knots([(20.0, 1.0), (400.0, 0.9), (800.0, 0.3)]).unwrap();
//!
//! assert_eq!(curve.evaluate(0.0), 1.0);
//! assert!((curve.evaluate(600.0) - 0.6).abs() < 1e-12);
//! assert!((curve.inverse_threshold(0.6).unwrap() - 600.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod curve;
pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::Curve;
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{evaluate, inverse_threshold};
}

pub use curve::Curve;
pub use error::{MathError, MathResult};
