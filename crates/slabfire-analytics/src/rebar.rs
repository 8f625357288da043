//! Reinforcement condition after fire exposure.

use log::debug;
use serde::{Deserialize, Serialize};

use slabfire_core::{ConcreteCurve, FireResult, StrengthCurve, TemperatureUnit};

use crate::strength::StrengthModel;
use crate::temperature::SlabTemperatureModel;

/// Temperature and retained strengths at the reinforcement depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebarCondition {
    /// Temperature at the reinforcement, in the requested unit.
    pub temperature: f64,
    /// Retained concrete strength fraction.
    pub concrete_fraction: f64,
    /// Retained steel strength fraction.
    pub steel_fraction: f64,
}

/// Chains the temperature model into the strength model at one depth.
#[derive(Debug, Clone, Copy)]
pub struct RebarConditionFacade<'a> {
    temperature: &'a SlabTemperatureModel,
    strength: &'a StrengthModel,
}

impl<'a> RebarConditionFacade<'a> {
    /// Creates a facade over both models.
    pub fn new(temperature: &'a SlabTemperatureModel, strength: &'a StrengthModel) -> Self {
        Self {
            temperature,
            strength,
        }
    }

    /// Condition of reinforcement at clear `cover` (mm) after `fire_time` (min).
    ///
    /// The aggregate whose temperature surface is used is the one of
    /// `concrete`.
    pub fn evaluate(
        &self,
        fire_time: f64,
        cover: f64,
        concrete: ConcreteCurve,
        unit: TemperatureUnit,
    ) -> FireResult<RebarCondition> {
        let celsius = self.temperature.temperature_at(
            fire_time,
            cover,
            concrete.aggregate(),
            TemperatureUnit::Celsius,
        )?;
        let concrete_fraction = self.strength.strength_fraction(
            celsius,
            StrengthCurve::Concrete(concrete),
            TemperatureUnit::Celsius,
        )?;
        let steel_fraction =
            self.strength
                .strength_fraction(celsius, StrengthCurve::Steel, TemperatureUnit::Celsius)?;

        debug!(
            "{} rebar at {} mm after {} min: {} C, concrete {:.3}, steel {:.3}",
            concrete, cover, fire_time, celsius, concrete_fraction, steel_fraction
        );
        Ok(RebarCondition {
            temperature: unit.from_celsius(celsius),
            concrete_fraction,
            steel_fraction,
        })
    }
}
