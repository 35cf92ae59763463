//! Core domain types and port definitions for chefkit.
//!
//! This crate owns the cookbook data model, the category table that drives
//! on-disk layout, the version resolver, and the port traits that adapters
//! implement. It performs no I/O of its own.
//!
//! # Structure
//!
//! - [`domain`] - Cookbook manifest, items, categories, and version tokens
//! - [`download`] - Download configuration and error types
//! - [`events`] - Progress events emitted while materializing a cookbook
//! - [`ports`] - Trait abstractions for the remote source and event delivery
//! - `testing` - Scripted port doubles (`test-utils` feature)

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod download;
pub mod events;
pub mod ports;

#[cfg(feature = "test-utils")]
pub mod testing;

// Re-export commonly used types for convenience
pub use domain::{
    CATEGORY_TABLE, Category, CategoryEntry, CookbookItem, CookbookManifest, Destination,
    LATEST_VERSION, resolve_version,
};
pub use download::{
    CookbookDownloadError, CookbookDownloadResult, DEFAULT_DIRECTORY_MODE, DownloadConfig,
};
pub use events::CookbookEvent;
pub use ports::{
    CookbookEventEmitter, CookbookSourceError, CookbookSourcePort, CookbookSourceResult,
    NoopCookbookEmitter,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
