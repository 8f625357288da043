//! Digitized curves.
//!
//! A [`Curve`] is an immutable sequence of `(x, y)` knots with strictly
//! increasing `x`. It is built once from tabular data and only read afterwards.

use crate::error::{MathError, MathResult};
use crate::interpolation;

/// A sorted, validated sequence of `(x, y)` knots.
///
/// Invariants checked at construction:
/// - at least one knot
/// - every coordinate is finite
/// - `x` strictly increasing (no duplicates)
///
/// # Example
///
/// ```rust
/// use slabfire_math::Curve;
///
/// let curve = Curve::new(vec![0.0, 30.0, 60.0], vec![20.0, 350.0, 520.0]).unwrap();
/// assert_eq!(curve.len(), 3);
/// assert_eq!(curve.min_x(), 0.0);
/// assert_eq!(curve.max_x(), 60.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Curve {
    /// Creates a curve from parallel coordinate vectors.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors are empty, have different lengths,
    /// contain non-finite values, or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        for (index, (&x, &y)) in xs.iter().zip(ys.iter()).enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(MathError::NonFinite { index, x, y });
            }
        }

        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(MathError::NonMonotonic {
                    index: i,
                    prev: xs[i - 1],
                    current: xs[i],
                });
            }
        }

        Ok(Self { xs, ys })
    }

    /// Creates a curve from `(x, y)` pairs.
    pub fn from_knots(knots: impl IntoIterator<Item = (f64, f64)>) -> MathResult<Self> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = knots.into_iter().unzip();
        Self::new(xs, ys)
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false: a curve holds at least one knot.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Knot abscissae.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Knot ordinates.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Iterates over the knots as `(x, y)` pairs.
    pub fn knots(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Smallest digitized x.
    pub fn min_x(&self) -> f64 {
        self.xs[0]
    }

    /// Largest digitized x.
    pub fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// First knot.
    pub fn first(&self) -> (f64, f64) {
        (self.xs[0], self.ys[0])
    }

    /// Last knot.
    pub fn last(&self) -> (f64, f64) {
        let n = self.xs.len() - 1;
        (self.xs[n], self.ys[n])
    }

    /// Returns true if `x` lies within `[min_x, max_x]`.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }

    /// Returns true if `y` never increases from one knot to the next.
    pub fn is_non_increasing(&self) -> bool {
        self.ys.windows(2).all(|w| w[1] <= w[0])
    }

    /// Clamped piecewise-linear evaluation. See [`interpolation::evaluate`].
    pub fn evaluate(&self, x: f64) -> f64 {
        interpolation::evaluate(self, x)
    }

    /// Monotone threshold inverse. See [`interpolation::inverse_threshold`].
    pub fn inverse_threshold(&self, threshold: f64) -> MathResult<f64> {
        interpolation::inverse_threshold(self, threshold)
    }
}
