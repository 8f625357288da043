//! Interpolation over digitized curves.
//!
//! Two operations are provided, both pure functions of a [`Curve`](crate::Curve):
//!
//! - [`evaluate`]: piecewise-linear evaluation, clamped to the end knots
//! - [`inverse_threshold`]: the x at which a non-increasing curve first
//!   drops to a threshold, or `f64::INFINITY` if it never does
//!
//! Neither operation extrapolates: queries outside the digitized range clamp
//! to the end knots.

mod inverse;
mod linear;

pub use inverse::inverse_threshold;
pub use linear::evaluate;
