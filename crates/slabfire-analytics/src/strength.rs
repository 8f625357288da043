//! Strength retention of concrete and reinforcing steel at temperature.

use log::{debug, trace};

use slabfire_core::{FireError, FireResult, StrengthCurve, StrengthMaterial, TemperatureUnit};
use slabfire_curves::StrengthTables;

/// Forward and inverse lookup over strength-retention curves.
///
/// Curves map temperature (Celsius) to the retained fraction of room
/// temperature strength and are expected to be non-increasing.
#[derive(Debug, Clone)]
pub struct StrengthModel {
    tables: StrengthTables,
}

impl StrengthModel {
    /// Creates a model over `tables`.
    pub fn new(tables: StrengthTables) -> Self {
        debug!("StrengthModel over {} curve(s)", tables.len());
        Self { tables }
    }

    /// The underlying tables.
    pub fn tables(&self) -> &StrengthTables {
        &self.tables
    }

    /// Loaded curve keys of `material`.
    pub fn curves_for(&self, material: StrengthMaterial) -> Vec<StrengthCurve> {
        self.tables
            .keys()
            .filter(|k| k.material() == material)
            .copied()
            .collect()
    }

    /// Retained strength fraction at `temperature`.
    ///
    /// Temperatures outside the digitized range clamp to the end knots.
    pub fn strength_fraction(
        &self,
        temperature: f64,
        curve: StrengthCurve,
        unit: TemperatureUnit,
    ) -> FireResult<f64> {
        let table = self.tables.get(&curve)?;
        if temperature.is_nan() {
            return Err(FireError::domain(
                "temperature",
                temperature,
                f64::NEG_INFINITY,
                f64::INFINITY,
            ));
        }

        let celsius = unit.to_celsius(temperature);
        let fraction = table.evaluate(celsius);
        trace!("{} at {} C: {}", curve, celsius, fraction);
        Ok(fraction)
    }

    /// Lowest temperature at which the retained fraction falls to `threshold`.
    ///
    /// Returns `f64::INFINITY` if the curve stays above `threshold` over its
    /// whole digitized range.
    ///
    /// # Errors
    ///
    /// [`FireError::DomainError`] if `threshold` lies outside `[0, 1]`, and
    /// [`FireError::UnknownCategory`] if `curve` is not loaded.
    pub fn critical_temperature(
        &self,
        threshold: f64,
        curve: StrengthCurve,
        unit: TemperatureUnit,
    ) -> FireResult<f64> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(FireError::domain("threshold", threshold, 0.0, 1.0));
        }
        let table = self.tables.get(&curve)?;

        let celsius = table.inverse_threshold(threshold)?;
        trace!("{} reaches {} at {} C", curve, threshold, celsius);
        if celsius.is_infinite() {
            return Ok(celsius);
        }
        Ok(unit.from_celsius(celsius))
    }
}
