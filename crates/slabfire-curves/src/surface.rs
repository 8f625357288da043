//! Depth-time surfaces.
//!
//! A [`DepthTimeSurface`] holds one temperature-versus-time curve per
//! digitized depth. The curves are independent: each was digitized over its
//! own time span, and shallow depths usually stop earlier because they reach
//! the practical ceiling of the fire curve sooner. The surface is therefore
//! not a regular grid and must never be resampled onto one.

use slabfire_math::Curve;

use crate::error::{CurveError, CurveResult};

/// Position of a query depth relative to the digitized depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthBracket {
    /// The query equals the digitized depth at this index.
    Exact(usize),
    /// The query lies strictly between the depths at `lo` and `lo + 1`.
    Between {
        /// Index of the shallower bracketing depth.
        lo: usize,
        /// Index of the deeper bracketing depth.
        hi: usize,
    },
}

/// Temperature-over-time curves at a sorted set of depths.
#[derive(Debug, Clone)]
pub struct DepthTimeSurface {
    /// Label used in diagnostics (typically the aggregate type).
    label: String,
    /// Digitized depths, strictly increasing.
    depths: Vec<f64>,
    /// Time curve for each depth.
    curves: Vec<Curve>,
}

impl DepthTimeSurface {
    /// Creates a surface from `(depth, time_curve)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if no depth is given, a depth is not finite, or the
    /// depths are not strictly increasing.
    pub fn new(label: impl Into<String>, depth_curves: Vec<(f64, Curve)>) -> CurveResult<Self> {
        let label = label.into();
        if depth_curves.is_empty() {
            return Err(CurveError::Empty { source_name: label });
        }

        let (depths, curves): (Vec<f64>, Vec<Curve>) = depth_curves.into_iter().unzip();

        if let Some(bad) = depths.iter().find(|d| !d.is_finite()) {
            return Err(CurveError::invalid_value(
                label,
                0,
                format!("depth {bad} is not finite"),
            ));
        }
        for i in 1..depths.len() {
            if depths[i] <= depths[i - 1] {
                return Err(CurveError::NonMonotonicDepths {
                    index: i,
                    prev: depths[i - 1],
                    current: depths[i],
                });
            }
        }

        Ok(Self {
            label,
            depths,
            curves,
        })
    }

    /// Diagnostic label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Digitized depths in increasing order.
    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    /// Time curve at depth index `i`.
    pub fn curve(&self, i: usize) -> &Curve {
        &self.curves[i]
    }

    /// Iterates over `(depth, time_curve)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &Curve)> {
        self.depths.iter().copied().zip(self.curves.iter())
    }

    /// Number of digitized depths.
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// Always false: a surface holds at least one depth.
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// `(min_depth, max_depth)`.
    pub fn depth_range(&self) -> (f64, f64) {
        (self.depths[0], self.depths[self.depths.len() - 1])
    }

    /// `(min_time, max_time)` of the curve at depth index `i`.
    pub fn time_range(&self, i: usize) -> (f64, f64) {
        let curve = &self.curves[i];
        (curve.min_x(), curve.max_x())
    }

    /// Total number of knots over all depth curves.
    pub fn knot_count(&self) -> usize {
        self.curves.iter().map(Curve::len).sum()
    }

    /// Locates `depth` among the digitized depths.
    ///
    /// Returns `None` if `depth` lies outside `[min_depth, max_depth]`.
    pub fn bracket(&self, depth: f64) -> Option<DepthBracket> {
        let (min, max) = self.depth_range();
        if depth.is_nan() || depth < min || depth > max {
            return None;
        }

        let hi = self.depths.partition_point(|&d| d < depth);
        if self.depths[hi] == depth {
            Some(DepthBracket::Exact(hi))
        } else {
            Some(DepthBracket::Between { lo: hi - 1, hi })
        }
    }
}
