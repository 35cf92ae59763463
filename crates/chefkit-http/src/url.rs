//! URL construction helpers for the Chef server API.
//!
//! Pure functions so every endpoint is built the same way.

use url::Url;

use crate::error::{ChefHttpError, HttpResult};
use crate::models::ChefConfig;

/// Build `{base}/cookbooks/{name}/{version}`.
///
/// Name and version are percent-encoded as single path segments; a trailing
/// slash on the base URL is tolerated.
pub fn build_cookbook_version_url(
    config: &ChefConfig,
    name: &str,
    version: &str,
) -> HttpResult<Url> {
    let mut url = config.base_url.clone();
    url.path_segments_mut()
        .map_err(|()| ChefHttpError::InvalidRequest {
            url: config.base_url.to_string(),
            message: "server URL cannot be used as a base".to_string(),
        })?
        .pop_if_empty()
        .extend(["cookbooks", name, version]);
    Ok(url)
}

/// Parse an absolute download URL from a manifest item.
pub fn parse_download_url(raw: &str) -> HttpResult<Url> {
    Url::parse(raw).map_err(|source| ChefHttpError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}
