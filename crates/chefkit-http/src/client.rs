//! Chef server client for fetching cookbook manifests and files.

use std::path::Path;

use chefkit_core::{CookbookManifest, CookbookSourceResult};
use tracing::debug;

use crate::config::ChefClientConfig;
use crate::error::HttpResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ChefConfig;
use crate::port::map_error;
use crate::url::{build_cookbook_version_url, parse_download_url};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Chef server client using the reqwest HTTP backend.
pub type DefaultChefClient = ChefClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the cookbook endpoints of a Chef server.
///
/// Generic over the HTTP backend so tests can swap in a fake. External code
/// should use `DefaultChefClient::new()` and the `CookbookSourcePort` trait.
pub struct ChefClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ChefConfig,
}

impl DefaultChefClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the base URL does not parse or the HTTP client cannot be
    /// built.
    pub fn new(config: &ChefClientConfig) -> CookbookSourceResult<Self> {
        let config = ChefConfig::from_public(config).map_err(map_error)?;
        let backend = ReqwestBackend::new(&config).map_err(map_error)?;
        Ok(Self { backend, config })
    }
}

impl<B: HttpBackend> ChefClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ChefConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// GET `/cookbooks/{name}/{version}` and decode the manifest.
    pub(crate) async fn get_version(
        &self,
        name: &str,
        version: &str,
    ) -> HttpResult<CookbookManifest> {
        let url = build_cookbook_version_url(&self.config, name, version)?;
        debug!(cookbook = name, version, url = %url, "Fetching cookbook manifest");
        self.backend.get_json(&url).await
    }

    /// Stream one manifest item URL into `destination`.
    pub(crate) async fn download_file(&self, raw_url: &str, destination: &Path) -> HttpResult<u64> {
        let url = parse_download_url(raw_url)?;
        let written = self.backend.download_to_file(&url, destination).await?;
        debug!(url = %url, path = %destination.display(), bytes = written, "Downloaded cookbook file");
        Ok(written)
    }
}
