//! Coarse aggregate types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::normalize_key;
use crate::error::FireError;

/// The concrete's coarse aggregate composition.
///
/// Determines both the thermal response of a slab and the strength-retention
/// behaviour of the concrete.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AggregateType {
    /// Carbonate aggregate (limestone, dolomite).
    Carbonate,
    /// Siliceous aggregate (quartz, granite, sandstone).
    Siliceous,
    /// Semi-lightweight concrete (lightweight coarse, normal-weight sand).
    SemiLightweight,
    /// Lightweight concrete.
    Lightweight,
}

impl AggregateType {
    /// Canonical key used in tables, configuration, and messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            AggregateType::Carbonate => "carbonate",
            AggregateType::Siliceous => "siliceous",
            AggregateType::SemiLightweight => "semi_lightweight",
            AggregateType::Lightweight => "lightweight",
        }
    }

    /// Returns all aggregate types.
    #[must_use]
    pub fn all() -> &'static [AggregateType] {
        &[
            AggregateType::Carbonate,
            AggregateType::Siliceous,
            AggregateType::SemiLightweight,
            AggregateType::Lightweight,
        ]
    }
}

impl fmt::Display for AggregateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AggregateType {
    type Err = FireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "carbonate" => Ok(AggregateType::Carbonate),
            "siliceous" => Ok(AggregateType::Siliceous),
            "semi_lightweight" | "semilightweight" => Ok(AggregateType::SemiLightweight),
            "lightweight" => Ok(AggregateType::Lightweight),
            _ => Err(FireError::unknown_category(
                "aggregate type",
                s,
                AggregateType::all().iter().map(AggregateType::name),
            )),
        }
    }
}
