//! Errors surfaced by the `particle-fields` binary, each with its own exit code.
//!
//! - 0:  success
//! - 2:  clap rejected the arguments
//! - 10: the simulation refused its setup (dimensions, config, scene, colors)
//! - 11: a config, scene or PNG file could not be read or written
//! - 12: a command-line value could not be parsed
//! - 13: a result could not be encoded as JSON

use particle_fields_core::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Setup rejected by the core (bad dimensions, config or scene).
    #[error("{0}")]
    Sim(SimError),
    /// Reading or writing a file failed.
    #[error("{0}")]
    Io(String),
    /// A `--field` or config argument did not parse.
    #[error("{0}")]
    Input(String),
    /// JSON output could not be produced.
    #[error("{0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Exit code for the process when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Sim(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

/// File failures inside the core (PNG writes) keep the I/O exit code.
impl From<SimError> for CliError {
    fn from(e: SimError) -> Self {
        match e {
            SimError::Io(msg) => CliError::Io(msg),
            other => CliError::Sim(other),
        }
    }
}
