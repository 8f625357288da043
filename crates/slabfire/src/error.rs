//! Errors raised while building a [`FireLibrary`](crate::FireLibrary).

use slabfire_config::ConfigError;
use slabfire_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for library construction.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Failure to build a library from configuration or tables.
///
/// Calculations on a built library return
/// [`FireError`](slabfire_core::FireError) directly.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// The configuration is unreadable or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A table could not be loaded.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
