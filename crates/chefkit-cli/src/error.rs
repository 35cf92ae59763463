//! CLI-specific error types and mappings.
//!
//! Maps download and source errors to exit codes. The message shown to the
//! user is the library error's own text.

use chefkit_core::{CookbookDownloadError, CookbookSourceError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested cookbook or version does not exist on the server.
    #[error("{0}")]
    NotFound(String),

    /// The server failed or could not be reached.
    #[error("{0}")]
    Remote(String),

    /// Local filesystem error.
    #[error("{0}")]
    Io(String),

    /// Configuration error (bad server URL, client setup).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Remote(_) => 69,   // EX_UNAVAILABLE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CookbookSourceError> for CliError {
    fn from(err: CookbookSourceError) -> Self {
        if err.is_not_found() {
            return Self::NotFound(err.to_string());
        }
        match err {
            CookbookSourceError::InvalidRequest { .. } => Self::Config(err.to_string()),
            CookbookSourceError::Io { .. } => Self::Io(err.to_string()),
            CookbookSourceError::Status { .. }
            | CookbookSourceError::Transport { .. }
            | CookbookSourceError::Decode { .. } => Self::Remote(err.to_string()),
        }
    }
}

impl From<CookbookDownloadError> for CliError {
    fn from(err: CookbookDownloadError) -> Self {
        match err {
            CookbookDownloadError::Source(source) => source.into(),
            CookbookDownloadError::InvalidName { .. } => Self::Remote(err.to_string()),
            CookbookDownloadError::WorkingDirectory(_)
            | CookbookDownloadError::CreateDirectory { .. } => Self::Io(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
