//! Clamped piecewise-linear evaluation.

use log::trace;

use crate::curve::Curve;

/// Evaluates `curve` at `x` by piecewise-linear interpolation.
///
/// Queries at or below the first knot return the first ordinate, queries at
/// or above the last knot return the last ordinate. Between knots the bracket
/// `x_lo < x <= x_hi` is located and
///
/// ```text
/// y = y_lo + (x - x_lo) / (x_hi - x_lo) * (y_hi - y_lo)
/// ```
///
/// An exact knot hit returns the tabulated ordinate unchanged. `NaN` in,
/// `NaN` out.
///
/// # Example
///
/// ```rust
/// use slabfire_math::{interpolation::evaluate, Curve};
///
/// let curve = Curve::from_knots([(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]).unwrap();
/// assert_eq!(evaluate(&curve, 1.5), 2.5);
/// assert_eq!(evaluate(&curve, -3.0), 0.0);
/// assert_eq!(evaluate(&curve, 9.0), 4.0);
/// ```
pub fn evaluate(curve: &Curve, x: f64) -> f64 {
    let xs = curve.xs();
    let ys = curve.ys();
    let n = xs.len();

    if x.is_nan() {
        return f64::NAN;
    }
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    // First index with xs[hi] >= x; bounded to 1..n-1 by the clamps above.
    let hi = find_upper(xs, x);
    if xs[hi] == x {
        return ys[hi];
    }
    let lo = hi - 1;

    let alpha = (x - xs[lo]) / (xs[hi] - xs[lo]);
    let y = ys[lo] + alpha * (ys[hi] - ys[lo]);
    trace!(
        "evaluate x={} in [{}, {}] alpha={:.6} -> {}",
        x,
        xs[lo],
        xs[hi],
        alpha,
        y
    );
    y
}

/// Finds the smallest `i` with `xs[i] >= x`.
pub(crate) fn find_upper(xs: &[f64], x: f64) -> usize {
    xs.partition_point(|&v| v < x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Curve {
        Curve::from_knots([(0.0, 0.0), (1.0, 2.0), (2.0, 4.0)]).unwrap()
    }

    #[test]
    fn test_linear_interpolation() {
        let curve = sample();

        // Test at exact points
        assert_relative_eq!(evaluate(&curve, 0.0), 0.0, epsilon = 1e-10);
        assert_relative_eq!(evaluate(&curve, 1.0), 2.0, epsilon = 1e-10);
        assert_relative_eq!(evaluate(&curve, 2.0), 4.0, epsilon = 1e-10);

        // Test interpolation
        assert_relative_eq!(evaluate(&curve, 0.5), 1.0, epsilon = 1e-10);
        assert_relative_eq!(evaluate(&curve, 1.5), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_clamped_below_and_above() {
        let curve = sample();

        assert_eq!(evaluate(&curve, -0.5), 0.0);
        assert_eq!(evaluate(&curve, -1e9), 0.0);
        assert_eq!(evaluate(&curve, 2.5), 4.0);
        assert_eq!(evaluate(&curve, f64::INFINITY), 4.0);
    }

    #[test]
    fn test_single_knot_is_constant() {
        let curve = Curve::from_knots([(100.0, 0.75)]).unwrap();
        assert_eq!(evaluate(&curve, 0.0), 0.75);
        assert_eq!(evaluate(&curve, 100.0), 0.75);
        assert_eq!(evaluate(&curve, 500.0), 0.75);
    }

    #[test]
    fn test_irregular_spacing() {
        let curve = Curve::from_knots([(20.0, 1.0), (100.0, 0.98), (538.0, 0.5)]).unwrap();
        let alpha = (300.0 - 100.0) / (538.0 - 100.0);
        assert_relative_eq!(
            evaluate(&curve, 300.0),
            0.98 + alpha * (0.5 - 0.98),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_nan_propagates() {
        assert!(evaluate(&sample(), f64::NAN).is_nan());
    }

    #[test]
    fn test_find_upper() {
        let xs = [0.0, 1.0, 2.0];
        assert_eq!(find_upper(&xs, 0.5), 1);
        assert_eq!(find_upper(&xs, 1.0), 1);
        assert_eq!(find_upper(&xs, 1.0001), 2);
    }
}
