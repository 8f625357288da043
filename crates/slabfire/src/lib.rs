//! # Slabfire
//!
//! Fire-resistance calculations for concrete slabs exposed to a standard
//! fire-test curve.
//!
//! This crate re-exports the public API of the Slabfire workspace and adds
//! [`FireLibrary`], which builds every model from a [`DataConfig`] and
//! answers queries through string selectors:
//!
//! - temperature at depth after a given exposure time
//! - retained strength of concrete and steel at temperature, and its inverse
//! - prescriptive minimum thickness and cover ratings
//! - the condition of reinforcement at its cover depth
//!
//! ## Example
//!
//! ```rust
//! use slabfire::prelude::*;
//!
//! let surface = DepthTimeSurface::new(
//!     "carbonate",
//!     vec![
//!         (10.0, Curve::from_knots([(0.0, 20.0), (60.0, 600.0)])?),
//!         (30.0, Curve::from_knots([(0.0, 20.0), (60.0, 300.0)])?),
//!     ],
//! )?;
//! let library = FireLibrary::from_tables(
//!     temperature_tables([(AggregateType::Carbonate, surface)])?,
//!     strength_tables([(StrengthCurve::Steel, Curve::from_knots([(20.0, 1.0), (700.0, 0.2)])?)])?,
//! );
//!
//! assert_eq!(library.temperature_at(60.0, 20.0, "carbonate", None)?, 450.0);
//! assert_eq!(library.maximum_rating("carbonate", false, 170.0, 30.0, None)?, Some(240));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod library;

pub use error::{LibraryError, LibraryResult};
pub use library::FireLibrary;

pub use slabfire_analytics::{
    RatingEngine, RatingResult, RebarCondition, RebarConditionFacade, SlabTemperatureModel,
    StrengthModel,
};
pub use slabfire_config::{ConfigError, DataConfig, Validate, ValidationError};
pub use slabfire_core::{
    convert_temperature, AggregateType, ConcreteCurve, FireError, FireRating, FireResult,
    NormalWeightCondition, Restraint, SemiLightweightCondition, StrengthCurve, StrengthMaterial,
    TemperatureUnit,
};
pub use slabfire_curves::{
    strength_tables, temperature_tables, CurveError, CurveFamily, DepthTimeSurface,
    StrengthTables, TemperatureTables,
};
pub use slabfire_math::{Curve, MathError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{LibraryError, LibraryResult};
    pub use crate::library::FireLibrary;
    pub use slabfire_analytics::prelude::*;
    pub use slabfire_config::DataConfig;
    pub use slabfire_core::prelude::*;
    pub use slabfire_curves::{
        strength_tables, temperature_tables, DepthTimeSurface, StrengthTables, TemperatureTables,
    };
    pub use slabfire_math::Curve;
}
