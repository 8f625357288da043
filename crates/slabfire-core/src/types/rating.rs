//! Standard fire-resistance rating durations and restraint classes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FireError, FireResult};

/// A standard fire-resistance rating duration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum FireRating {
    /// 1 hour (60 min).
    OneHour,
    /// 1.5 hours (90 min).
    NinetyMinutes,
    /// 2 hours (120 min).
    TwoHours,
    /// 3 hours (180 min).
    ThreeHours,
    /// 4 hours (240 min).
    FourHours,
}

impl FireRating {
    /// Duration in minutes.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        match self {
            FireRating::OneHour => 60,
            FireRating::NinetyMinutes => 90,
            FireRating::TwoHours => 120,
            FireRating::ThreeHours => 180,
            FireRating::FourHours => 240,
        }
    }

    /// Duration in hours.
    #[must_use]
    pub fn hours(&self) -> f64 {
        f64::from(self.minutes()) / 60.0
    }

    /// Returns all standard ratings, shortest first.
    #[must_use]
    pub fn all() -> &'static [FireRating] {
        &[
            FireRating::OneHour,
            FireRating::NinetyMinutes,
            FireRating::TwoHours,
            FireRating::ThreeHours,
            FireRating::FourHours,
        ]
    }

    /// Supported durations in minutes.
    #[must_use]
    pub fn supported_minutes() -> Vec<u32> {
        Self::all().iter().map(FireRating::minutes).collect()
    }

    /// Resolves a duration in minutes.
    pub fn from_minutes(minutes: u32) -> FireResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|r| r.minutes() == minutes)
            .ok_or_else(|| FireError::UnsupportedDuration {
                minutes,
                supported: Self::supported_minutes(),
            })
    }
}

impl fmt::Display for FireRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}

/// Whether the slab's thermal expansion is restrained by surrounding construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Restraint {
    /// Expansion restrained by surrounding construction.
    Restrained,
    /// Free to expand.
    Unrestrained,
}

impl Restraint {
    /// Returns true for [`Restraint::Restrained`].
    #[must_use]
    pub fn is_restrained(&self) -> bool {
        matches!(self, Restraint::Restrained)
    }
}

impl From<bool> for Restraint {
    fn from(restrained: bool) -> Self {
        if restrained {
            Restraint::Restrained
        } else {
            Restraint::Unrestrained
        }
    }
}

impl fmt::Display for Restraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Restraint::Restrained => write!(f, "restrained"),
            Restraint::Unrestrained => write!(f, "unrestrained"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes() {
        assert_eq!(FireRating::supported_minutes(), vec![60, 90, 120, 180, 240]);
        assert_eq!(FireRating::NinetyMinutes.hours(), 1.5);
    }

    #[test]
    fn test_from_minutes() {
        assert_eq!(FireRating::from_minutes(180).unwrap(), FireRating::ThreeHours);
        assert_eq!(
            FireRating::from_minutes(150).unwrap_err(),
            FireError::UnsupportedDuration {
                minutes: 150,
                supported: vec![60, 90, 120, 180, 240],
            }
        );
    }

    #[test]
    fn test_restraint_from_bool() {
        assert!(Restraint::from(true).is_restrained());
        assert!(!Restraint::from(false).is_restrained());
    }
}
