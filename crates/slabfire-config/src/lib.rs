//! # Slabfire Configuration
//!
//! TOML configuration naming the digitized tables a Slabfire library is
//! built from.
//!
//! # Example
//!
//! ```rust
//! use slabfire_config::{DataConfig, Validate};
//! use slabfire_core::{AggregateType, TemperatureUnit};
//!
//! let config = DataConfig::from_toml_str(r#"
//!     temperature_unit = "fahrenheit"
//!     base_dir = "/opt/slabfire/data"
//!
//!     [temperature]
//!     carbonate = "temperature_carbonate.csv"
//!
//!     [strength]
//!     steel = "strength_steel.csv"
//! "#).unwrap();
//!
//! assert!(config.is_valid());
//! assert_eq!(config.unit().unwrap(), TemperatureUnit::Fahrenheit);
//! assert_eq!(config.temperature_sources().unwrap()[0].0, AggregateType::Carbonate);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod data;
pub mod error;

pub use data::DataConfig;
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
