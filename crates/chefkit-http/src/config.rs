//! Public configuration for the Chef server client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// Server URL used when none is configured (a local chef-zero).
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8889";

/// Value sent in the `X-Chef-Version` header.
pub const DEFAULT_CHEF_VERSION: &str = "18.0.0";

/// Configuration for the Chef server client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use chefkit_http::ChefClientConfig;
/// use std::time::Duration;
///
/// let config = ChefClientConfig::new()
///     .with_base_url("https://chef.example.com/organizations/acme")
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ChefClientConfig {
    /// Base URL of the server (organization URL for Chef Infra Server)
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout, applied to each request including body transfer
    pub(crate) timeout: Duration,
    /// Value of the `X-Chef-Version` header
    pub(crate) chef_version: String,
}

impl Default for ChefClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            user_agent: concat!("chefkit/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            chef_version: DEFAULT_CHEF_VERSION.to_string(),
        }
    }
}

impl ChefClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server base URL.
    ///
    /// Defaults to [`DEFAULT_SERVER_URL`].
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `X-Chef-Version` header value.
    #[must_use]
    pub fn with_chef_version(mut self, version: impl Into<String>) -> Self {
        self.chef_version = version.into();
        self
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
