//! Remote cookbook source port.
//!
//! The download pipeline reaches the server only through this trait: one
//! call to fetch a version manifest, one call per file to transfer. The
//! default implementation lives in `chefkit-http`.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CookbookManifest;

/// Errors surfaced by a [`CookbookSourcePort`].
///
/// The download pipeline passes these through to its caller without
/// rewording them.
#[derive(Debug, Error)]
pub enum CookbookSourceError {
    /// The request could not be built (malformed URL, bad base URL).
    #[error("invalid request for {url}: {message}")]
    InvalidRequest {
        /// The URL that could not be turned into a request
        url: String,
        /// Why it was rejected
        message: String,
    },

    /// The server answered with a non-2xx status.
    #[error("GET {url}: {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The request could not be executed or the body could not be read.
    #[error("GET {url}: {message}")]
    Transport {
        /// The URL that was requested
        url: String,
        /// Description of the transport failure
        message: String,
    },

    /// The response body was not a valid manifest.
    #[error("invalid manifest from {url}: {message}")]
    Decode {
        /// The URL that was requested
        url: String,
        /// Decoder message
        message: String,
    },

    /// The destination file could not be created or written.
    #[error("{}: {source}", path.display())]
    Io {
        /// The local path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl CookbookSourceError {
    /// Build an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// HTTP status code, when the failure was a non-2xx response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Result type alias for cookbook source operations.
pub type CookbookSourceResult<T> = Result<T, CookbookSourceError>;

/// Port trait for the remote cookbook API.
///
/// # Design
///
/// - Uses core-owned types, not wire types
/// - Returns [`CookbookSourceError`] for all failures
/// - No retry: one call, one request
#[async_trait]
pub trait CookbookSourcePort: Send + Sync {
    /// Fetch the manifest for `name` at the already-resolved `version` token.
    ///
    /// # Arguments
    ///
    /// * `name` - Cookbook name (e.g., `apache`)
    /// * `version` - Version token (e.g., `0.1.0` or `_latest`)
    async fn fetch_manifest(&self, name: &str, version: &str)
    -> CookbookSourceResult<CookbookManifest>;

    /// Download `url` into `destination`, creating or truncating the file.
    ///
    /// The file is fully written before this returns `Ok`.
    async fn fetch_file(&self, url: &str, destination: &Path) -> CookbookSourceResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn CookbookSourcePort>) {}

    #[test]
    fn test_status_error_mentions_code() {
        let err = CookbookSourceError::Status {
            status: 404,
            url: "http://localhost/cookbooks/foo/2.1.0".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("/cookbooks/foo/2.1.0"));
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = CookbookSourceError::io(
            "/tmp/foo-0.2.1/metadata.rb",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/foo-0.2.1/metadata.rb"));
        assert!(msg.contains("permission denied"));
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_transport_error_display() {
        let err = CookbookSourceError::Transport {
            url: "http://localhost/bookshelf/foo".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "GET http://localhost/bookshelf/foo: connection refused"
        );
    }
}
