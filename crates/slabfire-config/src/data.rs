//! Data-source configuration.
//!
//! Names the CSV files that hold the digitized temperature and strength
//! tables, and the temperature unit their `temperature` columns are in.
//!
//! ```toml
//! temperature_unit = "fahrenheit"
//! base_dir = "data"
//!
//! [temperature]
//! carbonate = "temperature_carbonate.csv"
//!
//! [strength]
//! carbonate = "strength_carbonate.csv"
//! steel = "strength_steel.csv"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use slabfire_core::{AggregateType, StrengthMaterial, TemperatureUnit};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

fn default_unit() -> String {
    TemperatureUnit::Celsius.name().to_string()
}

/// Locations of the digitized tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Unit of the temperature columns in every data file.
    #[serde(default = "default_unit")]
    pub temperature_unit: String,

    /// Directory that relative table paths are resolved against.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Temperature table per aggregate type.
    #[serde(default)]
    pub temperature: BTreeMap<String, PathBuf>,

    /// Strength table per material.
    #[serde(default)]
    pub strength: BTreeMap<String, PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            temperature_unit: default_unit(),
            base_dir: None,
            temperature: BTreeMap::new(),
            strength: BTreeMap::new(),
        }
    }
}

impl DataConfig {
    /// Creates an empty configuration with Celsius data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data unit.
    #[must_use]
    pub fn with_temperature_unit(mut self, unit: TemperatureUnit) -> Self {
        self.temperature_unit = unit.name().to_string();
        self
    }

    /// Sets the base directory.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Adds a temperature table.
    #[must_use]
    pub fn with_temperature(mut self, aggregate: AggregateType, path: impl Into<PathBuf>) -> Self {
        self.temperature.insert(aggregate.name().to_string(), path.into());
        self
    }

    /// Adds a strength table.
    #[must_use]
    pub fn with_strength(mut self, material: StrengthMaterial, path: impl Into<PathBuf>) -> Self {
        self.strength.insert(material.name().to_string(), path.into());
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// A missing or relative `base_dir` is taken relative to the directory
    /// containing the file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut config = Self::from_toml_str(&text)?;
        let config_dir = path.parent().unwrap_or_else(|| Path::new(""));
        config.base_dir = Some(match config.base_dir.take() {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => config_dir.join(dir),
            None => config_dir.to_path_buf(),
        });

        info!(
            "Loaded data configuration {}: {} temperature table(s), {} strength table(s)",
            path.display(),
            config.temperature.len(),
            config.strength.len()
        );
        Ok(config)
    }

    /// Resolves a table path against `base_dir`.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// The unit of the data files.
    pub fn unit(&self) -> ConfigResult<TemperatureUnit> {
        self.temperature_unit
            .parse()
            .map_err(|e: slabfire_core::FireError| ConfigError::Validation {
                field: "temperature_unit".to_string(),
                message: e.to_string(),
            })
    }

    /// Resolved temperature table paths, keyed by aggregate type.
    pub fn temperature_sources(&self) -> ConfigResult<Vec<(AggregateType, PathBuf)>> {
        self.temperature
            .iter()
            .map(|(key, path)| {
                let aggregate = key.parse::<AggregateType>().map_err(|e| ConfigError::Validation {
                    field: format!("temperature.{key}"),
                    message: e.to_string(),
                })?;
                Ok((aggregate, self.resolve(path)))
            })
            .collect()
    }

    /// Resolved strength table paths, keyed by material.
    pub fn strength_sources(&self) -> ConfigResult<Vec<(StrengthMaterial, PathBuf)>> {
        self.strength
            .iter()
            .map(|(key, path)| {
                let material = key.parse::<StrengthMaterial>().map_err(|e| ConfigError::Validation {
                    field: format!("strength.{key}"),
                    message: e.to_string(),
                })?;
                Ok((material, self.resolve(path)))
            })
            .collect()
    }
}

impl Validate for DataConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = self.temperature_unit.parse::<TemperatureUnit>() {
            errors.push(ValidationError::with_rule(
                "temperature_unit",
                e.to_string(),
                "known_unit",
            ));
        }

        if self.temperature.is_empty() {
            errors.push(ValidationError::new(
                "temperature",
                "At least one temperature table is required",
            ));
        }

        let mut seen_aggregates = Vec::new();
        for (key, path) in &self.temperature {
            let field = format!("temperature.{key}");
            match key.parse::<AggregateType>() {
                Ok(aggregate) if seen_aggregates.contains(&aggregate) => {
                    errors.push(ValidationError::with_rule(
                        field.clone(),
                        format!("Aggregate type {aggregate} is listed twice"),
                        "unique_key",
                    ));
                }
                Ok(aggregate) => seen_aggregates.push(aggregate),
                Err(e) => errors.push(ValidationError::with_rule(
                    field.clone(),
                    e.to_string(),
                    "known_key",
                )),
            }
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::new(field, "Path cannot be empty"));
            }
        }

        let mut seen_materials = Vec::new();
        for (key, path) in &self.strength {
            let field = format!("strength.{key}");
            match key.parse::<StrengthMaterial>() {
                Ok(material) if seen_materials.contains(&material) => {
                    errors.push(ValidationError::with_rule(
                        field.clone(),
                        format!("Material {material} is listed twice"),
                        "unique_key",
                    ));
                }
                Ok(material) => seen_materials.push(material),
                Err(e) => errors.push(ValidationError::with_rule(
                    field.clone(),
                    e.to_string(),
                    "known_key",
                )),
            }
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::new(field, "Path cannot be empty"));
            }
        }

        debug!("Data configuration validated with {} error(s)", errors.len());
        errors
    }
}
