//! HTTP backend abstraction for the Chef server API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and never retries: one call, one request.

use std::path::Path;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

use crate::error::{ChefHttpError, HttpResult};
use crate::models::ChefConfig;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON and stream bodies to disk.
///
/// This is an implementation detail - external code should use the
/// `CookbookSourcePort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HttpResult<T>;

    /// Stream the body of `url` into `destination`, returning bytes written.
    ///
    /// The file is created (or truncated) only after a 2xx status arrives.
    async fn download_to_file(&self, url: &Url, destination: &Path) -> HttpResult<u64>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ChefConfig) -> HttpResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&config.chef_version) {
            headers.insert(HeaderName::from_static("x-chef-version"), value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(ChefHttpError::ClientBuild)?;

        Ok(Self { client })
    }

    /// Issue a GET and reject non-2xx responses.
    async fn send(&self, url: &Url) -> HttpResult<reqwest::Response> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ChefHttpError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "GET");
        if !status.is_success() {
            return Err(ChefHttpError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HttpResult<T> {
        let response = self.send(url).await?;
        let body = response
            .bytes()
            .await
            .map_err(|source| ChefHttpError::Network {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| ChefHttpError::JsonParse {
            url: url.to_string(),
            source,
        })
    }

    async fn download_to_file(&self, url: &Url, destination: &Path) -> HttpResult<u64> {
        let response = self.send(url).await?;

        let mut file = tokio::fs::File::create(destination)
            .await
            .map_err(|e| ChefHttpError::io(destination, e))?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|source| ChefHttpError::Network {
                url: url.to_string(),
                source,
            })?;
            file.write_all(&chunk)
                .await
                .map_err(|e| ChefHttpError::io(destination, e))?;
            written += chunk.len() as u64;
        }

        // Pending writes on a tokio file only land once flushed.
        file.flush()
            .await
            .map_err(|e| ChefHttpError::io(destination, e))?;

        Ok(written)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_backend_creation() {
        let config = ChefConfig::default();
        assert!(ReqwestBackend::new(&config).is_ok());
    }

    #[test]
    fn test_reqwest_backend_tolerates_bad_chef_version_header() {
        let config = ChefConfig {
            chef_version: "18.0.0\n".to_string(),
            ..ChefConfig::default()
        };
        assert!(ReqwestBackend::new(&config).is_ok());
    }

    mod fake_backend_tests {
        use super::super::testing::*;
        use super::*;
        use serde_json::json;

        #[tokio::test]
        async fn test_fake_backend_returns_canned_json() {
            let backend = FakeBackend::new().with_response(
                "http://localhost/cookbooks/foo/0.2.1",
                CannedResponse::Json(json!({"name": "foo-0.2.1"})),
            );

            let url = Url::parse("http://localhost/cookbooks/foo/0.2.1").unwrap();
            let result: serde_json::Value = backend.get_json(&url).await.unwrap();

            assert_eq!(result["name"], "foo-0.2.1");
            assert_eq!(backend.requests(), vec![url.to_string()]);
        }

        #[tokio::test]
        async fn test_fake_backend_returns_404_for_unknown_url() {
            let backend = FakeBackend::new();
            let url = Url::parse("http://localhost/unknown").unwrap();

            let result: HttpResult<serde_json::Value> = backend.get_json(&url).await;
            assert!(matches!(
                result,
                Err(ChefHttpError::ApiRequestFailed { status: 404, .. })
            ));
        }

        #[tokio::test]
        async fn test_fake_backend_writes_body() {
            let dir = tempfile::tempdir().unwrap();
            let dest = dir.path().join("metadata.rb");
            let backend = FakeBackend::new().with_response(
                "http://localhost/bookshelf/metadata_rb",
                CannedResponse::Body(b"name 'foo'".to_vec()),
            );

            let url = Url::parse("http://localhost/bookshelf/metadata_rb").unwrap();
            let written = backend.download_to_file(&url, &dest).await.unwrap();

            assert_eq!(written, 10);
            assert_eq!(std::fs::read_to_string(&dest).unwrap(), "name 'foo'");
        }
    }
}
