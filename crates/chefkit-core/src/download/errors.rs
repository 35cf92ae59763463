//! Download pipeline error types.
//!
//! Every variant displays exactly what the underlying failure displays; the
//! variant only records which step failed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::ports::CookbookSourceError;

/// Error type for cookbook download operations.
#[derive(Debug, Error)]
pub enum CookbookDownloadError {
    /// The process working directory could not be determined.
    #[error(transparent)]
    WorkingDirectory(io::Error),

    /// A destination directory could not be created.
    #[error("{}: {source}", path.display())]
    CreateDirectory {
        /// The directory being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A manifest name that is not a single plain path component.
    #[error("invalid cookbook path component {name:?}")]
    InvalidName {
        /// The offending cookbook or file name
        name: String,
    },

    /// The remote source failed (manifest fetch or file transfer).
    #[error(transparent)]
    Source(#[from] CookbookSourceError),
}

impl CookbookDownloadError {
    /// Build a directory creation error for `path`.
    pub fn create_directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDirectory {
            path: path.into(),
            source,
        }
    }

    /// Build an invalid name error for `name`.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// The source error, when the failure came from the remote side.
    #[must_use]
    pub const fn source_error(&self) -> Option<&CookbookSourceError> {
        match self {
            Self::Source(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for cookbook download operations.
pub type CookbookDownloadResult<T> = Result<T, CookbookDownloadError>;
