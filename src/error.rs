use thiserror::Error;

use crate::precondition::Precondition;

/// Unified error type for dist-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Precondition failed: {0}")]
    Precondition(#[from] Precondition),

    #[error("Command `{command}` failed: {status}")]
    CommandFailed { command: String, status: String },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in dist-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseError::Manifest(msg.into())
    }

    /// Create a command failure for `command` ending with `status`
    pub fn command_failed(command: impl Into<String>, status: impl ToString) -> Self {
        ReleaseError::CommandFailed {
            command: command.into(),
            status: status.to_string(),
        }
    }

    /// Whether the error was raised before any side effect took place
    pub fn is_precondition(&self) -> bool {
        matches!(self, ReleaseError::Precondition(_))
    }
}
