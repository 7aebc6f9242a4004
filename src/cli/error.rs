//! CLI-level errors (wraps infrastructure and application errors)

use clap::error::ErrorKind;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::exitcode;
use crate::infrastructure::{HistorianError, InfraError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    /// Malformed command line, or a help/version request
    #[error("{0}")]
    Parse(clap::Error),

    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Application(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exitcode::OK,
                _ => exitcode::FAILURE,
            },
            CliError::Application(e) => application_exit_code(e),
            CliError::Infra(e) => match e {
                InfraError::Application(e) => application_exit_code(e),
                InfraError::Io { .. } => exitcode::IOERR,
                InfraError::Replay { .. } => exitcode::DATAERR,
            },
        }
    }
}

fn application_exit_code(e: &ApplicationError) -> i32 {
    match e {
        ApplicationError::Historian(HistorianError::Connection { .. }) => exitcode::UNAVAILABLE,
        ApplicationError::Historian(HistorianError::Query { .. }) => exitcode::SOFTWARE,
        ApplicationError::Domain(_) => exitcode::SOFTWARE,
        ApplicationError::Config { .. } => exitcode::CONFIG,
    }
}
