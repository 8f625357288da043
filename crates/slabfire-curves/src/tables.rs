//! Table sets consumed by the temperature and strength models.

use slabfire_core::{AggregateType, StrengthCurve};
use slabfire_math::Curve;

use crate::error::CurveResult;
use crate::family::CurveFamily;
use crate::surface::DepthTimeSurface;

/// Depth-time surfaces keyed by aggregate type.
pub type TemperatureTables = CurveFamily<AggregateType, DepthTimeSurface>;

/// Strength-retention curves keyed by material and condition.
pub type StrengthTables = CurveFamily<StrengthCurve, Curve>;

/// Builds temperature tables from `(aggregate, surface)` pairs.
pub fn temperature_tables(
    surfaces: impl IntoIterator<Item = (AggregateType, DepthTimeSurface)>,
) -> CurveResult<TemperatureTables> {
    CurveFamily::from_entries("aggregate type", surfaces)
}

/// Builds strength tables from `(curve key, curve)` pairs.
pub fn strength_tables(
    curves: impl IntoIterator<Item = (StrengthCurve, Curve)>,
) -> CurveResult<StrengthTables> {
    CurveFamily::from_entries("strength curve", curves)
}
