//! # Slabfire Core
//!
//! Core types and the error taxonomy for the Slabfire fire-resistance library.
//!
//! This crate provides the foundational building blocks used throughout Slabfire:
//!
//! - **Types**: [`AggregateType`], [`StrengthCurve`] and its material-scoped
//!   conditions, [`FireRating`], [`Restraint`]
//! - **Units**: [`TemperatureUnit`] with exact affine conversion
//! - **Errors**: [`FireError`], shared by every calculation
//!
//! ## Example
//!
//! ```rust
//! use slabfire_core::prelude::*;
//!
//! let aggregate: AggregateType = "carbonate".parse().unwrap();
//! let curve = StrengthCurve::parse("siliceous", Some("stressed")).unwrap();
//! let unit: TemperatureUnit = "F".parse().unwrap();
//!
//! assert_eq!(aggregate, AggregateType::Carbonate);
//! assert_eq!(curve.to_string(), "siliceous/stressed");
//! assert_eq!(unit.to_celsius(212.0), 100.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;
pub mod units;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FireError, FireResult};
    pub use crate::types::{
        AggregateType, ConcreteCurve, FireRating, NormalWeightCondition, Restraint,
        SemiLightweightCondition, StrengthCurve, StrengthMaterial,
    };
    pub use crate::units::{convert_temperature, TemperatureUnit};
}

// Re-export commonly used types at crate root
pub use error::{FireError, FireResult};
pub use types::{
    AggregateType, ConcreteCurve, FireRating, NormalWeightCondition, Restraint,
    SemiLightweightCondition, StrengthCurve, StrengthMaterial,
};
pub use units::{convert_temperature, TemperatureUnit};
