//! Slab temperature at depth.
//!
//! Each aggregate type has a [`DepthTimeSurface`]: one digitized
//! temperature-versus-time curve per depth below the exposed face. A query
//! is answered by nested one-dimensional interpolation, time first on each
//! bracketing depth curve and then linearly in depth. The curves are never
//! resampled onto a common grid, and every depth curve is only queried
//! inside its own digitized time span.

use log::{debug, trace};

use slabfire_core::{AggregateType, FireError, FireResult, TemperatureUnit};
use slabfire_curves::{DepthBracket, DepthTimeSurface, TemperatureTables};

/// Temperature lookup over digitized depth-time surfaces.
#[derive(Debug, Clone)]
pub struct SlabTemperatureModel {
    tables: TemperatureTables,
}

impl SlabTemperatureModel {
    /// Creates a model over `tables` (temperatures in Celsius).
    pub fn new(tables: TemperatureTables) -> Self {
        debug!(
            "SlabTemperatureModel over {} aggregate type(s): {:?}",
            tables.len(),
            tables.keys().map(AggregateType::name).collect::<Vec<_>>()
        );
        Self { tables }
    }

    /// The underlying tables.
    pub fn tables(&self) -> &TemperatureTables {
        &self.tables
    }

    /// Aggregate types with a loaded surface.
    pub fn aggregates(&self) -> Vec<AggregateType> {
        self.tables.keys().copied().collect()
    }

    /// The surface for `aggregate`.
    pub fn surface(&self, aggregate: AggregateType) -> FireResult<&DepthTimeSurface> {
        self.tables.get(&aggregate)
    }

    /// Temperature at `depth` (mm) after `fire_time` (min) of exposure.
    ///
    /// # Errors
    ///
    /// - [`FireError::UnknownCategory`] if no surface is loaded for `aggregate`
    /// - [`FireError::OutOfRange`] if `depth` lies outside the digitized depths,
    ///   or `fire_time` lies outside the time span of a depth curve used for
    ///   the query; the error cites that depth curve and its bounds
    pub fn temperature_at(
        &self,
        fire_time: f64,
        depth: f64,
        aggregate: AggregateType,
        unit: TemperatureUnit,
    ) -> FireResult<f64> {
        let surface = self.tables.get(&aggregate)?;
        let celsius = surface_temperature(surface, fire_time, depth)?;
        Ok(unit.from_celsius(celsius))
    }

    /// Temperatures at each of `depths`, in order.
    ///
    /// Fails on the first depth that cannot be evaluated; no partial
    /// profile is returned.
    pub fn temperature_profile(
        &self,
        fire_time: f64,
        depths: &[f64],
        aggregate: AggregateType,
        unit: TemperatureUnit,
    ) -> FireResult<Vec<f64>> {
        let surface = self.tables.get(&aggregate)?;
        depths
            .iter()
            .map(|&depth| {
                surface_temperature(surface, fire_time, depth).map(|t| unit.from_celsius(t))
            })
            .collect()
    }
}

/// Two-stage interpolation on one surface, in Celsius.
fn surface_temperature(surface: &DepthTimeSurface, fire_time: f64, depth: f64) -> FireResult<f64> {
    let bracket = surface.bracket(depth).ok_or_else(|| {
        let (min, max) = surface.depth_range();
        FireError::out_of_range("depth", depth, min, max, surface.label())
    })?;

    match bracket {
        DepthBracket::Exact(i) => {
            let t = time_stage(surface, i, fire_time)?;
            trace!(
                "{} t={}: exact depth {} -> {}",
                surface.label(),
                fire_time,
                surface.depths()[i],
                t
            );
            Ok(t)
        }
        DepthBracket::Between { lo, hi } => {
            let t_lo = time_stage(surface, lo, fire_time)?;
            let t_hi = time_stage(surface, hi, fire_time)?;

            let d_lo = surface.depths()[lo];
            let d_hi = surface.depths()[hi];
            let alpha = (depth - d_lo) / (d_hi - d_lo);
            let t = t_lo + alpha * (t_hi - t_lo);
            trace!(
                "{} t={}: T({})={} T({})={} alpha={:.6} -> T({})={}",
                surface.label(),
                fire_time,
                d_lo,
                t_lo,
                d_hi,
                t_hi,
                alpha,
                depth,
                t
            );
            Ok(t)
        }
    }
}

/// Time interpolation on the depth curve at index `i`, inside its own span.
fn time_stage(surface: &DepthTimeSurface, i: usize, fire_time: f64) -> FireResult<f64> {
    let curve = surface.curve(i);
    let (min, max) = surface.time_range(i);
    if fire_time.is_nan() || fire_time < min || fire_time > max {
        return Err(FireError::out_of_range(
            "fire time",
            fire_time,
            min,
            max,
            format!("{} at depth {}", surface.label(), surface.depths()[i]),
        ));
    }
    Ok(curve.evaluate(fire_time))
}
