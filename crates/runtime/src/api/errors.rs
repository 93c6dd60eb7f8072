//! Unified error types surfaced by the runtime API.
//!
//! Per-action failures never reach this level; they are logged by the executor
//! and the sequence continues. What remains is engine assembly and
//! configuration loading.
use std::path::PathBuf;

use thiserror::Error;

use menu_core::{ErrorSeverity, MenuError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("engine requires a {0} collaborator before building")]
    MissingCollaborator(&'static str),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config RON")]
    ConfigParse(#[source] ron::error::SpannedError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl MenuError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::MissingCollaborator(_) => ErrorSeverity::Internal,
            RuntimeError::ConfigRead { .. }
            | RuntimeError::ConfigParse(_)
            | RuntimeError::InvalidConfig(_) => ErrorSeverity::Configuration,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::MissingCollaborator(_) => "RUNTIME_MISSING_COLLABORATOR",
            RuntimeError::ConfigRead { .. } => "RUNTIME_CONFIG_READ",
            RuntimeError::ConfigParse(_) => "RUNTIME_CONFIG_PARSE",
            RuntimeError::InvalidConfig(_) => "RUNTIME_INVALID_CONFIG",
        }
    }
}
