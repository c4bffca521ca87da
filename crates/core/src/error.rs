//! Error types for the particle-fields core.
//!
//! The physics itself never fails; these errors only come from the
//! configuration, scene and I/O boundary.

use thiserror::Error;

/// Errors produced while building or configuring a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// Width or height was zero, negative, or not finite.
    #[error("invalid dimensions: width and height must be positive and finite")]
    InvalidDimensions,

    /// A configuration value was outside its accepted range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),
}
