//! # Slabfire Analytics
//!
//! Fire-resistance calculations for concrete slabs exposed to a standard
//! fire-test curve:
//!
//! - **Temperature**: [`SlabTemperatureModel`], nested time-then-depth
//!   interpolation over digitized depth-time surfaces
//! - **Strength**: [`StrengthModel`], retained strength fraction at
//!   temperature and its inverse, the critical temperature
//! - **Rating**: [`RatingEngine`], prescriptive minimum thickness and cover
//!   checks for the standard durations
//! - **Rebar**: [`RebarConditionFacade`], temperature and retained strengths
//!   at the reinforcement depth
//!
//! Models are immutable once built and are `Send + Sync`.
//!
//! ## Usage
//!
//! ```rust
//! use slabfire_analytics::prelude::*;
//! use slabfire_core::{AggregateType, Restraint};
//!
//! let engine = RatingEngine::new();
//! let results = engine.evaluate(
//!     AggregateType::Carbonate,
//!     Restraint::Unrestrained,
//!     170.0,
//!     30.0,
//!     &[120, 240],
//! )?;
//! assert!(results.iter().all(|r| r.pass));
//! # Ok::<(), slabfire_core::FireError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unused_self)]
#![allow(clippy::uninlined_format_args)]

pub mod rating;
pub mod rebar;
pub mod strength;
pub mod temperature;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::rating::{RatingEngine, RatingResult};
    pub use crate::rebar::{RebarCondition, RebarConditionFacade};
    pub use crate::strength::StrengthModel;
    pub use crate::temperature::SlabTemperatureModel;
}

pub use rating::{RatingEngine, RatingResult};
pub use rebar::{RebarCondition, RebarConditionFacade};
pub use strength::StrengthModel;
pub use temperature::SlabTemperatureModel;
