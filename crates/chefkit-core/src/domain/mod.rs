//! Cookbook domain model.
//!
//! Pure data types with no I/O. The manifest mirrors what the server returns
//! for a single cookbook version; the category table decides where each
//! group of files lands on disk.

mod category;
mod cookbook;
mod version;

pub use category::{CATEGORY_TABLE, Category, CategoryEntry, Destination};
pub use cookbook::{CookbookItem, CookbookManifest};
pub use version::{LATEST_VERSION, resolve_version};
