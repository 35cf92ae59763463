//! Port trait implementation for `ChefClient`.
//!
//! Implements the core-owned `CookbookSourcePort` trait and converts
//! internal errors into the port's vocabulary.

use std::path::Path;

use async_trait::async_trait;
use chefkit_core::{CookbookManifest, CookbookSourceError, CookbookSourcePort, CookbookSourceResult};

use crate::client::ChefClient;
use crate::error::ChefHttpError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ChefHttpError` to core `CookbookSourceError`.
pub(crate) fn map_error(err: ChefHttpError) -> CookbookSourceError {
    match err {
        ChefHttpError::ApiRequestFailed { status, url } => {
            CookbookSourceError::Status { status, url }
        }
        ChefHttpError::InvalidUrl { url, source } => CookbookSourceError::InvalidRequest {
            url,
            message: source.to_string(),
        },
        ChefHttpError::InvalidRequest { url, message } => {
            CookbookSourceError::InvalidRequest { url, message }
        }
        ChefHttpError::Network { url, source } => CookbookSourceError::Transport {
            url,
            message: source.to_string(),
        },
        ChefHttpError::ClientBuild(source) => CookbookSourceError::InvalidRequest {
            url: String::new(),
            message: source.to_string(),
        },
        ChefHttpError::JsonParse { url, source } => CookbookSourceError::Decode {
            url,
            message: source.to_string(),
        },
        ChefHttpError::Io { path, source } => CookbookSourceError::Io { path, source },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> CookbookSourcePort for ChefClient<B> {
    async fn fetch_manifest(
        &self,
        name: &str,
        version: &str,
    ) -> CookbookSourceResult<CookbookManifest> {
        self.get_version(name, version).await.map_err(map_error)
    }

    async fn fetch_file(&self, url: &str, destination: &Path) -> CookbookSourceResult<()> {
        self.download_file(url, destination)
            .await
            .map(|_| ())
            .map_err(map_error)
    }
}
