//! Prescriptive fire-resistance ratings for concrete slabs.
//!
//! Minimum equivalent thickness and minimum clear cover to positive-moment
//! reinforcement, after ACI 216.1M. The tables are authoritative constants,
//! in millimetres, for the five standard durations.

use log::debug;
use serde::{Deserialize, Serialize};

use slabfire_core::{AggregateType, FireError, FireRating, FireResult, Restraint};

// =============================================================================
// TABLES
// =============================================================================

/// Minimum equivalent thickness (mm), by aggregate then rating.
const MIN_THICKNESS: [[f64; 5]; 4] = [
    // carbonate
    [80.0, 100.0, 115.0, 145.0, 170.0],
    // siliceous
    [90.0, 110.0, 125.0, 155.0, 175.0],
    // semi-lightweight
    [70.0, 85.0, 95.0, 115.0, 135.0],
    // lightweight
    [65.0, 80.0, 90.0, 110.0, 130.0],
];

/// Minimum cover (mm) for restrained slabs, every aggregate and rating.
const RESTRAINED_COVER: f64 = 20.0;

/// Minimum cover (mm) for unrestrained slabs, by aggregate then rating.
const UNRESTRAINED_COVER: [[f64; 5]; 4] = [
    // carbonate
    [20.0, 20.0, 20.0, 30.0, 30.0],
    // siliceous
    [20.0, 20.0, 25.0, 30.0, 40.0],
    // semi-lightweight
    [20.0, 20.0, 20.0, 30.0, 30.0],
    // lightweight
    [20.0, 20.0, 20.0, 30.0, 30.0],
];

fn aggregate_row(aggregate: AggregateType) -> usize {
    match aggregate {
        AggregateType::Carbonate => 0,
        AggregateType::Siliceous => 1,
        AggregateType::SemiLightweight => 2,
        AggregateType::Lightweight => 3,
    }
}

fn rating_column(rating: FireRating) -> usize {
    match rating {
        FireRating::OneHour => 0,
        FireRating::NinetyMinutes => 1,
        FireRating::TwoHours => 2,
        FireRating::ThreeHours => 3,
        FireRating::FourHours => 4,
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// Outcome of checking one slab against one rating duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    /// Aggregate type of the slab.
    pub aggregate: AggregateType,
    /// Restraint class.
    pub restraint: Restraint,
    /// Rating duration in minutes.
    pub duration: u32,
    /// Provided equivalent thickness (mm).
    pub thickness: f64,
    /// Provided clear cover (mm).
    pub cover: f64,
    /// Required minimum equivalent thickness (mm).
    pub required_thickness: f64,
    /// Required minimum cover (mm).
    pub required_cover: f64,
    /// `thickness >= required_thickness`.
    pub thickness_pass: bool,
    /// `cover >= required_cover`.
    pub cover_pass: bool,
    /// Both checks pass.
    pub pass: bool,
    /// What failed, if anything.
    pub failure_reason: Option<String>,
}

// =============================================================================
// ENGINE
// =============================================================================

/// Discrete lookup over the prescriptive rating tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingEngine;

impl RatingEngine {
    /// Creates an engine over the standard tables.
    pub fn new() -> Self {
        Self
    }

    /// Supported durations in minutes, shortest first.
    pub fn supported_durations(&self) -> Vec<u32> {
        FireRating::supported_minutes()
    }

    /// Minimum equivalent thickness (mm). Independent of restraint.
    pub fn required_thickness(&self, aggregate: AggregateType, rating: FireRating) -> f64 {
        MIN_THICKNESS[aggregate_row(aggregate)][rating_column(rating)]
    }

    /// Minimum clear cover (mm).
    pub fn required_cover(
        &self,
        aggregate: AggregateType,
        restraint: Restraint,
        rating: FireRating,
    ) -> f64 {
        match restraint {
            Restraint::Restrained => RESTRAINED_COVER,
            Restraint::Unrestrained => {
                UNRESTRAINED_COVER[aggregate_row(aggregate)][rating_column(rating)]
            }
        }
    }

    /// Checks a slab against each of `durations` (minutes).
    ///
    /// Every duration is validated before any is evaluated; one unsupported
    /// duration fails the whole call. Results follow the order of `durations`.
    pub fn evaluate(
        &self,
        aggregate: AggregateType,
        restraint: Restraint,
        thickness: f64,
        cover: f64,
        durations: &[u32],
    ) -> FireResult<Vec<RatingResult>> {
        check_dimension("thickness", thickness)?;
        check_dimension("cover", cover)?;
        let ratings = durations
            .iter()
            .map(|&d| FireRating::from_minutes(d))
            .collect::<FireResult<Vec<_>>>()?;

        let results: Vec<RatingResult> = ratings
            .into_iter()
            .map(|rating| self.check(aggregate, restraint, thickness, cover, rating))
            .collect();

        debug!(
            "Rating {} {} slab t={} mm c={} mm: {}/{} durations pass",
            restraint,
            aggregate,
            thickness,
            cover,
            results.iter().filter(|r| r.pass).count(),
            results.len()
        );
        Ok(results)
    }

    /// Longest duration in `durations` that the slab satisfies.
    ///
    /// Each duration is checked on its own; the tables are not assumed to be
    /// monotone. Returns `None` if no duration passes.
    pub fn maximum_rating(
        &self,
        aggregate: AggregateType,
        restraint: Restraint,
        thickness: f64,
        cover: f64,
        durations: &[u32],
    ) -> FireResult<Option<u32>> {
        let results = self.evaluate(aggregate, restraint, thickness, cover, durations)?;
        Ok(results.iter().filter(|r| r.pass).map(|r| r.duration).max())
    }

    fn check(
        &self,
        aggregate: AggregateType,
        restraint: Restraint,
        thickness: f64,
        cover: f64,
        rating: FireRating,
    ) -> RatingResult {
        let required_thickness = self.required_thickness(aggregate, rating);
        let required_cover = self.required_cover(aggregate, restraint, rating);
        let thickness_pass = thickness >= required_thickness;
        let cover_pass = cover >= required_cover;

        let mut reasons = Vec::new();
        if !thickness_pass {
            reasons.push(format!(
                "thickness {thickness} mm is less than the required {required_thickness} mm"
            ));
        }
        if !cover_pass {
            reasons.push(format!(
                "cover {cover} mm is less than the required {required_cover} mm"
            ));
        }

        RatingResult {
            aggregate,
            restraint,
            duration: rating.minutes(),
            thickness,
            cover,
            required_thickness,
            required_cover,
            thickness_pass,
            cover_pass,
            pass: thickness_pass && cover_pass,
            failure_reason: if reasons.is_empty() {
                None
            } else {
                Some(reasons.join("; "))
            },
        }
    }
}

fn check_dimension(name: &str, value: f64) -> FireResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FireError::domain(name, value, 0.0, f64::INFINITY))
    }
}
