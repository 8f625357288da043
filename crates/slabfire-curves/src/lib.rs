//! # Slabfire Curves
//!
//! In-memory curve tables for the Slabfire fire-resistance library.
//!
//! - [`CurveFamily`]: read-only mapping from a discrete key to a curve
//! - [`DepthTimeSurface`]: one temperature-versus-time curve per digitized depth
//! - [`loader`]: long-format CSV readers producing the above
//!
//! Tables are built once and only read afterwards; every type here is
//! `Send + Sync` and can be shared by reference across threads.
//!
//! ## Example
//!
//! ```rust
//! use slabfire_core::{AggregateType, TemperatureUnit};
//! use slabfire_curves::{loader, temperature_tables};
//!
//! let csv = "depth,time,temperature\n10,0,20\n10,60,650\n25,0,20\n25,60,400\n";
//! let surface = loader::read_depth_time_surface("carbonate", csv.as_bytes(), TemperatureUnit::Celsius)?;
//! let tables = temperature_tables([(AggregateType::Carbonate, surface)])?;
//!
//! assert_eq!(tables.get(&AggregateType::Carbonate)?.depths(), &[10.0, 25.0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod family;
pub mod loader;
pub mod surface;
pub mod tables;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::family::CurveFamily;
    pub use crate::loader::{
        load_depth_time_surface, load_strength_curves, read_depth_time_surface,
        read_strength_curves,
    };
    pub use crate::surface::{DepthBracket, DepthTimeSurface};
    pub use crate::tables::{strength_tables, temperature_tables, StrengthTables, TemperatureTables};
}

pub use error::{CurveError, CurveResult};
pub use family::CurveFamily;
pub use surface::{DepthBracket, DepthTimeSurface};
pub use tables::{strength_tables, temperature_tables, StrengthTables, TemperatureTables};
