//! Internal error types for Chef server operations.
//!
//! These errors are internal to `chefkit-http` and are mapped to
//! `CookbookSourceError` at the port boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Chef server operations.
pub type HttpResult<T> = Result<T, ChefHttpError>;

/// Errors related to Chef server HTTP operations.
#[derive(Debug, Error)]
pub enum ChefHttpError {
    /// Request completed with a non-2xx status.
    #[error("GET {url}: {status}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// A URL could not be parsed.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        /// The offending input
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// A request could not be built for another reason.
    #[error("invalid request for {url}: {message}")]
    InvalidRequest {
        /// The URL involved
        url: String,
        /// What was wrong
        message: String,
    },

    /// Network or HTTP client error.
    #[error("GET {url}: {source}")]
    Network {
        /// The URL that was requested
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// JSON parsing error.
    #[error("invalid manifest from {url}: {source}")]
    JsonParse {
        /// The URL that was requested
        url: String,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// Local file error while writing a download.
    #[error("{}: {source}", path.display())]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl ChefHttpError {
    /// Build a local I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
