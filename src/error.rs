//! Error types for the check-commits CLI.
//!
//! Uses thiserror for derive macros. Every variant here is fatal: the process
//! reports it and exits. Check failures under continue-on-error never become
//! errors; they are recorded in the run summary instead.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for check-commits operations.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Invalid arguments, invalid config, or an unusable repository directory.
    #[error("{0}")]
    UserError(String),

    /// The revision range could not be listed.
    #[error("failed to get list of commits between \"{start}\" and \"{end}\": {message}")]
    RangeResolution {
        start: String,
        end: String,
        message: String,
    },

    /// The working tree could not be switched to a revision.
    #[error("could not checkout commit with hash {revision}: {message}")]
    Checkout { revision: String, message: String },

    /// An external command could not be started at all.
    #[error("couldn't run \"{command}\": {message} (are you in the root dir of the repo?)")]
    Launch { command: String, message: String },

    /// The patch scratch directory could not be created or removed.
    #[error("scratch directory '{}': {message}", .path.display())]
    Scratch { path: PathBuf, message: String },

    /// A check failed while the exit-on-error policy was in effect.
    #[error("check '{stage}' failed for commit {revision}; stopping (exit-on-error)")]
    Aborted { stage: String, revision: String },
}

impl CheckError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::UserError(_) => exit_codes::USER_ERROR,
            CheckError::RangeResolution { .. } => exit_codes::GIT_FAILURE,
            CheckError::Checkout { .. } => exit_codes::GIT_FAILURE,
            CheckError::Launch { .. } => exit_codes::ENVIRONMENT_FAILURE,
            CheckError::Scratch { .. } => exit_codes::ENVIRONMENT_FAILURE,
            CheckError::Aborted { .. } => exit_codes::CHECK_FAILURE,
        }
    }
}

/// Result type alias for check-commits operations.
pub type Result<T> = std::result::Result<T, CheckError>;
