//! String-keyed calculation library.

use std::path::Path;

use log::info;

use slabfire_analytics::{
    RatingEngine, RatingResult, RebarCondition, RebarConditionFacade, SlabTemperatureModel,
    StrengthModel,
};
use slabfire_config::{DataConfig, Validate};
use slabfire_core::{
    AggregateType, FireError, FireResult, Restraint, StrengthCurve, StrengthMaterial,
    TemperatureUnit,
};
use slabfire_curves::loader::{load_depth_time_surface, load_strength_curves};
use slabfire_curves::{strength_tables, temperature_tables, StrengthTables, TemperatureTables};

use crate::error::LibraryResult;

/// Temperature, strength and rating calculations behind string selectors.
///
/// Selectors are case-insensitive and accept `-`, `_` or a space as word
/// separator (`"Semi-Lightweight"`, `"semi_lightweight"`). A missing unit
/// means Celsius. The unit is resolved before anything else, so an
/// unrecognized unit fails before any lookup or interpolation.
#[derive(Debug, Clone)]
pub struct FireLibrary {
    temperature: SlabTemperatureModel,
    strength: StrengthModel,
    rating: RatingEngine,
}

impl FireLibrary {
    /// Builds a library over in-memory tables (temperatures in Celsius).
    pub fn from_tables(temperature: TemperatureTables, strength: StrengthTables) -> Self {
        Self {
            temperature: SlabTemperatureModel::new(temperature),
            strength: StrengthModel::new(strength),
            rating: RatingEngine::new(),
        }
    }

    /// Loads every table named in `config`.
    pub fn from_config(config: &DataConfig) -> LibraryResult<Self> {
        config.validate_or_error()?;
        let unit = config.unit()?;

        let mut surfaces = Vec::new();
        for (aggregate, path) in config.temperature_sources()? {
            surfaces.push((aggregate, load_depth_time_surface(aggregate.name(), path, unit)?));
        }

        let mut curves = Vec::new();
        for (material, path) in config.strength_sources()? {
            curves.extend(load_strength_curves(material, path, unit)?);
        }

        let library = Self::from_tables(temperature_tables(surfaces)?, strength_tables(curves)?);
        info!(
            "Built fire library: {} temperature surface(s), {} strength curve(s)",
            library.temperature.tables().len(),
            library.strength.tables().len()
        );
        Ok(library)
    }

    /// Reads a TOML configuration file and loads every table it names.
    pub fn from_config_path(path: impl AsRef<Path>) -> LibraryResult<Self> {
        Self::from_config(&DataConfig::from_path(path)?)
    }

    /// The temperature model.
    pub fn temperature_model(&self) -> &SlabTemperatureModel {
        &self.temperature
    }

    /// The strength model.
    pub fn strength_model(&self) -> &StrengthModel {
        &self.strength
    }

    /// The rating engine.
    pub fn rating_engine(&self) -> &RatingEngine {
        &self.rating
    }

    /// Rebar condition facade over this library's models.
    pub fn rebar(&self) -> RebarConditionFacade<'_> {
        RebarConditionFacade::new(&self.temperature, &self.strength)
    }

    // =========================================================================
    // TEMPERATURE
    // =========================================================================

    /// Temperature at `depth` (mm) after `fire_time` (min).
    pub fn temperature_at(
        &self,
        fire_time: f64,
        depth: f64,
        material: &str,
        unit: Option<&str>,
    ) -> FireResult<f64> {
        let unit = TemperatureUnit::parse_optional(unit)?;
        let aggregate = self.loaded_aggregate(material)?;
        self.temperature.temperature_at(fire_time, depth, aggregate, unit)
    }

    /// Temperatures at each of `depths` (mm) after `fire_time` (min).
    pub fn temperature_profile(
        &self,
        fire_time: f64,
        depths: &[f64],
        material: &str,
        unit: Option<&str>,
    ) -> FireResult<Vec<f64>> {
        let unit = TemperatureUnit::parse_optional(unit)?;
        let aggregate = self.loaded_aggregate(material)?;
        self.temperature
            .temperature_profile(fire_time, depths, aggregate, unit)
    }

    /// Parses `material` as an aggregate, listing the loaded surfaces if it
    /// is not one.
    fn loaded_aggregate(&self, material: &str) -> FireResult<AggregateType> {
        material.parse().map_err(|_: FireError| {
            FireError::unknown_category(
                "aggregate type",
                material,
                self.temperature.tables().keys(),
            )
        })
    }

    // =========================================================================
    // STRENGTH
    // =========================================================================

    /// Retained strength fraction at `temperature`.
    ///
    /// `condition` is required for concrete and ignored for steel.
    pub fn strength_fraction(
        &self,
        temperature: f64,
        material: &str,
        condition: Option<&str>,
        unit: Option<&str>,
    ) -> FireResult<f64> {
        let unit = TemperatureUnit::parse_optional(unit)?;
        let curve = StrengthCurve::parse(material, condition)?;
        self.strength.strength_fraction(temperature, curve, unit)
    }

    /// Temperature at which the retained fraction falls to `threshold`, or
    /// `f64::INFINITY` if it never does within the digitized range.
    pub fn critical_temperature(
        &self,
        threshold: f64,
        material: &str,
        condition: Option<&str>,
        unit: Option<&str>,
    ) -> FireResult<f64> {
        let unit = TemperatureUnit::parse_optional(unit)?;
        let curve = StrengthCurve::parse(material, condition)?;
        self.strength.critical_temperature(threshold, curve, unit)
    }

    // =========================================================================
    // RATING
    // =========================================================================

    /// Checks a slab against `durations` (minutes), or every standard
    /// duration if `None`.
    pub fn evaluate_rating(
        &self,
        material: &str,
        restrained: bool,
        thickness: f64,
        cover: f64,
        durations: Option<&[u32]>,
    ) -> FireResult<Vec<RatingResult>> {
        let aggregate: AggregateType = material.parse()?;
        let all = self.rating.supported_durations();
        self.rating.evaluate(
            aggregate,
            Restraint::from(restrained),
            thickness,
            cover,
            durations.unwrap_or(all.as_slice()),
        )
    }

    /// Longest passing duration among `durations`, or every standard
    /// duration if `None`.
    pub fn maximum_rating(
        &self,
        material: &str,
        restrained: bool,
        thickness: f64,
        cover: f64,
        durations: Option<&[u32]>,
    ) -> FireResult<Option<u32>> {
        let aggregate: AggregateType = material.parse()?;
        let all = self.rating.supported_durations();
        self.rating.maximum_rating(
            aggregate,
            Restraint::from(restrained),
            thickness,
            cover,
            durations.unwrap_or(all.as_slice()),
        )
    }

    // =========================================================================
    // REBAR
    // =========================================================================

    /// Temperature and retained strengths of reinforcement at clear `cover`
    /// (mm) after `fire_time` (min).
    ///
    /// `material` must be a concrete; `condition` selects its strength curve.
    pub fn rebar_condition(
        &self,
        fire_time: f64,
        cover: f64,
        material: &str,
        condition: Option<&str>,
        unit: Option<&str>,
    ) -> FireResult<RebarCondition> {
        let unit = TemperatureUnit::parse_optional(unit)?;
        let concrete = match StrengthCurve::parse(material, condition)? {
            StrengthCurve::Concrete(c) => c,
            StrengthCurve::Steel => {
                return Err(FireError::unknown_category(
                    "concrete",
                    material,
                    StrengthMaterial::all()
                        .iter()
                        .filter(|m| **m != StrengthMaterial::Steel)
                        .map(StrengthMaterial::name),
                ))
            }
        };
        self.rebar().evaluate(fire_time, cover, concrete, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slabfire_core::{ConcreteCurve, NormalWeightCondition};
    use slabfire_curves::DepthTimeSurface;
    use slabfire_math::Curve;

    fn library() -> FireLibrary {
        let surface = DepthTimeSurface::new(
            "siliceous",
            vec![
                (10.0, Curve::from_knots([(0.0, 20.0), (60.0, 600.0)]).unwrap()),
                (30.0, Curve::from_knots([(0.0, 20.0), (60.0, 300.0)]).unwrap()),
            ],
        )
        .unwrap();
        FireLibrary::from_tables(
            temperature_tables([(AggregateType::Siliceous, surface)]).unwrap(),
            strength_tables([
                (
                    StrengthCurve::Concrete(ConcreteCurve::Siliceous(
                        NormalWeightCondition::Stressed,
                    )),
                    Curve::from_knots([(20.0, 1.0), (600.0, 0.5)]).unwrap(),
                ),
                (
                    StrengthCurve::Steel,
                    Curve::from_knots([(20.0, 1.0), (600.0, 0.4)]).unwrap(),
                ),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_selectors_are_normalized() {
        let lib = library();
        assert_eq!(lib.temperature_at(60.0, 10.0, " Siliceous", None).unwrap(), 600.0);
        assert_eq!(
            lib.strength_fraction(600.0, "SILICEOUS", Some("Stressed"), Some("c")).unwrap(),
            0.5
        );
    }

    #[test]
    fn test_invalid_unit_reported_first() {
        let lib = library();
        // Both the unit and the aggregate are wrong; the unit wins.
        assert!(matches!(
            lib.temperature_at(60.0, 10.0, "granite", Some("kelvin")),
            Err(FireError::InvalidUnit { .. })
        ));
    }

    #[test]
    fn test_rebar_rejects_steel() {
        let lib = library();
        match lib.rebar_condition(60.0, 20.0, "steel", None, None).unwrap_err() {
            FireError::UnknownCategory { kind, valid, .. } => {
                assert_eq!(kind, "concrete");
                assert_eq!(valid, vec!["carbonate", "siliceous", "semi_lightweight"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_aggregate_lists_loaded_surfaces() {
        let lib = library();
        for material in ["granite", "carbonate"] {
            match lib.temperature_at(60.0, 10.0, material, None).unwrap_err() {
                FireError::UnknownCategory { kind, value, valid } => {
                    assert_eq!(kind, "aggregate type");
                    assert_eq!(value, material);
                    assert_eq!(valid, vec!["siliceous"]);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
        assert!(matches!(
            lib.temperature_profile(60.0, &[10.0], "basalt", None),
            Err(FireError::UnknownCategory { valid, .. }) if valid == vec!["siliceous"]
        ));
    }

    #[test]
    fn test_default_durations() {
        let lib = library();
        assert_eq!(lib.evaluate_rating("siliceous", true, 200.0, 20.0, None).unwrap().len(), 5);
        assert_eq!(lib.maximum_rating("siliceous", true, 200.0, 20.0, None).unwrap(), Some(240));
    }
}
