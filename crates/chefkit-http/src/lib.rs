//! Chef server HTTP client for chefkit.
//!
//! Implements [`chefkit_core::CookbookSourcePort`] on top of reqwest:
//! manifest retrieval from `/cookbooks/{name}/{version}` and streaming file
//! transfers from the URLs the manifest lists.
//!
//! ```no_run
//! use std::sync::Arc;
//! use chefkit_core::CookbookSourcePort;
//! use chefkit_http::{ChefClientConfig, DefaultChefClient};
//!
//! # fn main() -> Result<(), chefkit_core::CookbookSourceError> {
//! let config = ChefClientConfig::new().with_base_url("https://chef.example.com/organizations/acme");
//! let source: Arc<dyn CookbookSourcePort> = Arc::new(DefaultChefClient::new(&config)?);
//! # let _ = source;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultChefClient is meant to be used through CookbookSourcePort, not its
// internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultChefClient;

// Configuration
pub use config::{ChefClientConfig, DEFAULT_CHEF_VERSION, DEFAULT_SERVER_URL};

// Silence unused dev-dependency warnings (used by integration tests)
#[cfg(test)]
use axum as _;
#[cfg(test)]
use chefkit_download as _;
#[cfg(test)]
use tempfile as _;
