//! Cookbook materialization for chefkit.
//!
//! Given a [`CookbookSourcePort`], [`CookbookDownloader`] fetches a version
//! manifest and writes every listed file into
//! `<local_dir>/<cookbook_name>-<version>/`, one subdirectory per category
//! (root files go straight into the cookbook directory).
//!
//! # Structure
//!
//! - `plan` - Maps a manifest onto destination directories
//! - `category` - Downloads the items of one category in order
//! - `parallel` - Bounded-concurrency transfer across all categories
//! - `orchestrator` - The public entry points
//!
//! Failures abort immediately. Nothing already written is removed.

#![deny(unused_crate_dependencies)]

mod category;
mod fs;
mod orchestrator;
mod parallel;
mod plan;

pub use category::CategoryDownloader;
pub use orchestrator::CookbookDownloader;
pub use plan::{CategoryPlan, DownloadPlan};

// Re-export core types for convenience
pub use chefkit_core::{
    CookbookDownloadError, CookbookDownloadResult, CookbookEvent, CookbookEventEmitter,
    CookbookSourcePort, DownloadConfig,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;
