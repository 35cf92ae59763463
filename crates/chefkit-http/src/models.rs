//! Internal configuration for the Chef server client.
//!
//! External consumers configure the client through `ChefClientConfig`.

use std::time::Duration;

use url::Url;

use crate::config::ChefClientConfig;
use crate::error::{ChefHttpError, HttpResult};

/// Validated client configuration.
#[derive(Debug, Clone)]
pub struct ChefConfig {
    /// Parsed server base URL
    pub base_url: Url,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Value of the `X-Chef-Version` header
    pub chef_version: String,
}

impl ChefConfig {
    /// Validate a public config.
    pub fn from_public(config: &ChefClientConfig) -> HttpResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|source| ChefHttpError::InvalidUrl {
            url: config.base_url.clone(),
            source,
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ChefHttpError::InvalidRequest {
                url: config.base_url.clone(),
                message: "server URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            base_url,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            chef_version: config.chef_version.clone(),
        })
    }
}

#[cfg(test)]
impl Default for ChefConfig {
    fn default() -> Self {
        Self::from_public(&ChefClientConfig::default()).expect("default server URL is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_public_parses_base_url() {
        let config = ChefConfig::from_public(
            &ChefClientConfig::new().with_base_url("https://chef.example.com/organizations/acme"),
        )
        .unwrap();
        assert_eq!(config.base_url.host_str(), Some("chef.example.com"));
        assert_eq!(config.base_url.path(), "/organizations/acme");
    }

    #[test]
    fn test_from_public_rejects_garbage() {
        let result = ChefConfig::from_public(&ChefClientConfig::new().with_base_url("not a url"));
        assert!(matches!(result, Err(ChefHttpError::InvalidUrl { .. })));
    }

    #[test]
    fn test_from_public_rejects_non_base_url() {
        let result =
            ChefConfig::from_public(&ChefClientConfig::new().with_base_url("mailto:chef@example.com"));
        assert!(matches!(result, Err(ChefHttpError::InvalidRequest { .. })));
    }
}
