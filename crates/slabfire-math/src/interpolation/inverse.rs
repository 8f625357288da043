//! Threshold inverse for monotonically non-increasing curves.

use log::trace;

use crate::curve::Curve;
use crate::error::{MathError, MathResult};

/// Finds the smallest `x` at which `curve` drops to `threshold`.
///
/// Intended for retained-fraction curves whose `y` never increases with `x`.
///
/// - `threshold` must lie in `[0, 1]`, otherwise [`MathError::DomainError`].
/// - If the first knot is already at or below the threshold, its `x` is returned.
/// - If the last knot is still above the threshold, `f64::INFINITY` is returned:
///   the curve does not reach the threshold within its digitized range.
/// - Otherwise the first knot with `y <= threshold` and its predecessor bracket
///   the answer, and the linear segment between them is inverted.
///
/// # Example
///
/// ```rust
/// use slabfire_math::{interpolation::inverse_threshold, Curve};
///
/// let steel = Curve::from_knots([(20.0, 1.0), (400.0, 0.75), (700.0, 0.25)]).unwrap();
/// assert_eq!(inverse_threshold(&steel, 0.5).unwrap(), 550.0);
/// assert_eq!(inverse_threshold(&steel, 0.1).unwrap(), f64::INFINITY);
/// ```
pub fn inverse_threshold(curve: &Curve, threshold: f64) -> MathResult<f64> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(MathError::domain("threshold", threshold, 0.0, 1.0));
    }

    let xs = curve.xs();
    let ys = curve.ys();
    let n = ys.len();

    if ys[0] <= threshold {
        return Ok(xs[0]);
    }
    if ys[n - 1] > threshold {
        return Ok(f64::INFINITY);
    }

    // ys[0] > threshold and ys[n-1] <= threshold, so 1 <= i <= n-1.
    let i = ys.iter().position(|&y| y <= threshold).unwrap_or(n - 1);
    if ys[i] == threshold {
        return Ok(xs[i]);
    }

    let (x_lo, y_lo) = (xs[i - 1], ys[i - 1]);
    let (x_hi, y_hi) = (xs[i], ys[i]);
    let alpha = (threshold - y_lo) / (y_hi - y_lo);
    let x = x_lo + alpha * (x_hi - x_lo);
    trace!(
        "inverse threshold={} between x=[{}, {}] alpha={:.6} -> {}",
        threshold,
        x_lo,
        x_hi,
        alpha,
        x
    );
    Ok(x)
}
