//! Error types for command dispatch, the registration generator and tool configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Outcome classes of a command action, used to pick the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The user invoked the command wrongly; usage text is shown.
    UsageError,
    /// `-h`/`--help` was given; help has already been printed.
    HelpRequested,
    /// Any other failure inside the action.
    Other,
}

/// Error returned by a command action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("usage error")]
    Usage,

    #[error("help requested")]
    HelpRequested,

    #[error("{0}")]
    Other(String),
}

impl ActionError {
    /// Wrap any displayable failure as an unexpected error.
    pub fn other(err: impl std::fmt::Display) -> Self {
        ActionError::Other(err.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::Usage => ErrorKind::UsageError,
            ActionError::HelpRequested => ErrorKind::HelpRequested,
            ActionError::Other(_) => ErrorKind::Other,
        }
    }
}

impl From<std::io::Error> for ActionError {
    fn from(err: std::io::Error) -> Self {
        ActionError::other(err)
    }
}

impl From<std::num::ParseIntError> for ActionError {
    fn from(err: std::num::ParseIntError) -> Self {
        ActionError::other(err)
    }
}

impl From<String> for ActionError {
    fn from(msg: String) -> Self {
        ActionError::Other(msg)
    }
}

impl From<&str> for ActionError {
    fn from(msg: &str) -> Self {
        ActionError::Other(msg.to_string())
    }
}

/// Errors from the doc-comment registration generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    #[error("failed to write generated code: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration and logging setup errors for the generator tool.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
