//! Strength-retention curve keys.
//!
//! Each concrete family has its own condition vocabulary. Conditions are
//! scoped to their family at the type level, so a semi-lightweight condition
//! cannot be paired with carbonate concrete.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{normalize_key, AggregateType};
use crate::error::{FireError, FireResult};

/// Test condition for normal-weight (carbonate, siliceous) concrete.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NormalWeightCondition {
    /// Heated without load, tested hot.
    Unstressed,
    /// Heated under sustained load, tested hot.
    Stressed,
    /// Heated without load, tested after cooling.
    UnstressedResidual,
}

impl NormalWeightCondition {
    /// Canonical key.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unstressed => "unstressed",
            Self::Stressed => "stressed",
            Self::UnstressedResidual => "unstressed_residual",
        }
    }

    /// Returns all conditions.
    #[must_use]
    pub fn all() -> &'static [NormalWeightCondition] {
        &[Self::Unstressed, Self::Stressed, Self::UnstressedResidual]
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.name() == key)
    }
}

/// Test condition for semi-lightweight concrete.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SemiLightweightCondition {
    /// Loaded while heated, sanded mix.
    StressedSanded,
    /// Loaded while heated, unsanded mix.
    StressedUnsanded,
    /// Heated without load, sanded mix.
    UnstressedSanded,
    /// Heated without load, unsanded mix.
    UnstressedUnsanded,
}

impl SemiLightweightCondition {
    /// Canonical key.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::StressedSanded => "stressed_sanded",
            Self::StressedUnsanded => "stressed_unsanded",
            Self::UnstressedSanded => "unstressed_sanded",
            Self::UnstressedUnsanded => "unstressed_unsanded",
        }
    }

    /// Returns all conditions.
    #[must_use]
    pub fn all() -> &'static [SemiLightweightCondition] {
        &[
            Self::StressedSanded,
            Self::StressedUnsanded,
            Self::UnstressedSanded,
            Self::UnstressedUnsanded,
        ]
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.name() == key)
    }
}

/// A concrete strength curve: aggregate family plus its scoped condition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case", tag = "material", content = "condition")]
pub enum ConcreteCurve {
    /// Carbonate aggregate concrete.
    Carbonate(NormalWeightCondition),
    /// Siliceous aggregate concrete.
    Siliceous(NormalWeightCondition),
    /// Semi-lightweight concrete.
    SemiLightweight(SemiLightweightCondition),
}

impl ConcreteCurve {
    /// The aggregate type this curve describes.
    #[must_use]
    pub fn aggregate(&self) -> AggregateType {
        match self {
            ConcreteCurve::Carbonate(_) => AggregateType::Carbonate,
            ConcreteCurve::Siliceous(_) => AggregateType::Siliceous,
            ConcreteCurve::SemiLightweight(_) => AggregateType::SemiLightweight,
        }
    }

    /// Canonical condition key.
    #[must_use]
    pub fn condition_name(&self) -> &'static str {
        match self {
            ConcreteCurve::Carbonate(c) | ConcreteCurve::Siliceous(c) => c.name(),
            ConcreteCurve::SemiLightweight(c) => c.name(),
        }
    }
}

impl fmt::Display for ConcreteCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.aggregate(), self.condition_name())
    }
}

/// Key of a strength-retention curve.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StrengthCurve {
    /// Concrete compressive strength.
    Concrete(ConcreteCurve),
    /// Reinforcing steel yield strength.
    Steel,
}

impl StrengthCurve {
    /// The material family of this curve.
    #[must_use]
    pub fn material(&self) -> StrengthMaterial {
        match self {
            StrengthCurve::Concrete(ConcreteCurve::Carbonate(_)) => StrengthMaterial::Carbonate,
            StrengthCurve::Concrete(ConcreteCurve::Siliceous(_)) => StrengthMaterial::Siliceous,
            StrengthCurve::Concrete(ConcreteCurve::SemiLightweight(_)) => {
                StrengthMaterial::SemiLightweight
            }
            StrengthCurve::Steel => StrengthMaterial::Steel,
        }
    }

    /// Canonical condition key, or `None` for steel.
    #[must_use]
    pub fn condition_name(&self) -> Option<&'static str> {
        match self {
            StrengthCurve::Concrete(c) => Some(c.condition_name()),
            StrengthCurve::Steel => None,
        }
    }

    /// Resolves a curve from string selectors.
    ///
    /// The condition is validated against the material's own vocabulary.
    /// Steel has a single curve and ignores the condition.
    pub fn parse(material: &str, condition: Option<&str>) -> FireResult<Self> {
        let material: StrengthMaterial = material.parse()?;
        material.curve(condition)
    }
}

impl From<ConcreteCurve> for StrengthCurve {
    fn from(curve: ConcreteCurve) -> Self {
        StrengthCurve::Concrete(curve)
    }
}

impl fmt::Display for StrengthCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthCurve::Concrete(c) => write!(f, "{c}"),
            StrengthCurve::Steel => write!(f, "steel"),
        }
    }
}

/// Material family selector for strength tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StrengthMaterial {
    /// Carbonate aggregate concrete.
    Carbonate,
    /// Siliceous aggregate concrete.
    Siliceous,
    /// Semi-lightweight concrete.
    SemiLightweight,
    /// Reinforcing steel.
    Steel,
}

impl StrengthMaterial {
    /// Canonical key.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            StrengthMaterial::Carbonate => "carbonate",
            StrengthMaterial::Siliceous => "siliceous",
            StrengthMaterial::SemiLightweight => "semi_lightweight",
            StrengthMaterial::Steel => "steel",
        }
    }

    /// Returns all materials with strength curves.
    #[must_use]
    pub fn all() -> &'static [StrengthMaterial] {
        &[
            StrengthMaterial::Carbonate,
            StrengthMaterial::Siliceous,
            StrengthMaterial::SemiLightweight,
            StrengthMaterial::Steel,
        ]
    }

    /// Condition keys accepted by this material (empty for steel).
    #[must_use]
    pub fn conditions(&self) -> Vec<&'static str> {
        match self {
            StrengthMaterial::Carbonate | StrengthMaterial::Siliceous => {
                NormalWeightCondition::all().iter().map(|c| c.name()).collect()
            }
            StrengthMaterial::SemiLightweight => {
                SemiLightweightCondition::all().iter().map(|c| c.name()).collect()
            }
            StrengthMaterial::Steel => Vec::new(),
        }
    }

    /// Every curve key of this material.
    #[must_use]
    pub fn curves(&self) -> Vec<StrengthCurve> {
        match self {
            StrengthMaterial::Carbonate => NormalWeightCondition::all()
                .iter()
                .map(|&c| ConcreteCurve::Carbonate(c).into())
                .collect(),
            StrengthMaterial::Siliceous => NormalWeightCondition::all()
                .iter()
                .map(|&c| ConcreteCurve::Siliceous(c).into())
                .collect(),
            StrengthMaterial::SemiLightweight => SemiLightweightCondition::all()
                .iter()
                .map(|&c| ConcreteCurve::SemiLightweight(c).into())
                .collect(),
            StrengthMaterial::Steel => vec![StrengthCurve::Steel],
        }
    }

    /// Resolves a condition string to a curve of this material.
    pub fn curve(&self, condition: Option<&str>) -> FireResult<StrengthCurve> {
        if *self == StrengthMaterial::Steel {
            return Ok(StrengthCurve::Steel);
        }

        let key = condition.map(normalize_key).unwrap_or_default();
        let curve = match self {
            StrengthMaterial::Carbonate => {
                NormalWeightCondition::from_key(&key).map(ConcreteCurve::Carbonate)
            }
            StrengthMaterial::Siliceous => {
                NormalWeightCondition::from_key(&key).map(ConcreteCurve::Siliceous)
            }
            StrengthMaterial::SemiLightweight => {
                SemiLightweightCondition::from_key(&key).map(ConcreteCurve::SemiLightweight)
            }
            StrengthMaterial::Steel => None,
        };

        curve.map(StrengthCurve::Concrete).ok_or_else(|| {
            FireError::unknown_category(
                format!("condition for {}", self.name()),
                condition.unwrap_or("<none>"),
                self.conditions(),
            )
        })
    }
}

impl fmt::Display for StrengthMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StrengthMaterial {
    type Err = FireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "carbonate" => Ok(StrengthMaterial::Carbonate),
            "siliceous" => Ok(StrengthMaterial::Siliceous),
            "semi_lightweight" | "semilightweight" => Ok(StrengthMaterial::SemiLightweight),
            "steel" => Ok(StrengthMaterial::Steel),
            _ => Err(FireError::unknown_category(
                "material",
                s,
                StrengthMaterial::all().iter().map(StrengthMaterial::name),
            )),
        }
    }
}
