//! CLI bootstrap - the composition root.
//!
//! This is the only place where the HTTP adapter is instantiated. Handlers
//! receive a [`CliContext`] and build downloaders from the source it holds.

use std::sync::Arc;
use std::time::Duration;

use chefkit_core::{CookbookEventEmitter, CookbookSourcePort, DownloadConfig};
use chefkit_download::CookbookDownloader;
use chefkit_http::{ChefClientConfig, DefaultChefClient};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Chef server base URL.
    pub server_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Build from parsed arguments (flags already merged with env vars).
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            server_url: cli.server_url.clone(),
            timeout: Duration::from_secs(cli.timeout_secs),
        }
    }

    /// HTTP client configuration for this CLI config.
    pub fn client_config(&self) -> ChefClientConfig {
        ChefClientConfig::new()
            .with_base_url(self.server_url.clone())
            .with_timeout(self.timeout)
    }
}

/// Composed context for CLI commands.
pub struct CliContext {
    /// The remote cookbook source.
    pub source: Arc<dyn CookbookSourcePort>,
}

impl CliContext {
    /// Wrap an existing source.
    pub fn with_source(source: Arc<dyn CookbookSourcePort>) -> Self {
        Self { source }
    }

    /// A downloader over this context's source.
    pub fn downloader(
        &self,
        config: DownloadConfig,
        emitter: Arc<dyn CookbookEventEmitter>,
    ) -> CookbookDownloader {
        CookbookDownloader::new(Arc::clone(&self.source))
            .with_config(config)
            .with_emitter(emitter)
    }
}

/// Build the CLI context from configuration.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let client = DefaultChefClient::new(&config.client_config())?;
    Ok(CliContext::with_source(Arc::new(client)))
}
