//! Manifest categories and the table that maps them onto disk.
//!
//! Every category is a row in [`CATEGORY_TABLE`]: which manifest list it
//! reads and where its files land relative to the cookbook root. Adding a
//! category means adding a variant and a row, nothing else.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::cookbook::{CookbookItem, CookbookManifest};

/// One of the fixed semantic file groupings within a cookbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RootFiles,
    Files,
    Templates,
    Attributes,
    Recipes,
    Definitions,
    Libraries,
    Providers,
    Resources,
}

impl Category {
    /// Wire/label name, identical to the manifest key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RootFiles => "root_files",
            Self::Files => "files",
            Self::Templates => "templates",
            Self::Attributes => "attributes",
            Self::Recipes => "recipes",
            Self::Definitions => "definitions",
            Self::Libraries => "libraries",
            Self::Providers => "providers",
            Self::Resources => "resources",
        }
    }

    /// The table row describing this category.
    #[must_use]
    pub fn entry(self) -> &'static CategoryEntry {
        // Variants are declared in table order.
        &CATEGORY_TABLE[self as usize]
    }

    /// Parse a manifest key back into a category.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        CATEGORY_TABLE
            .iter()
            .map(|entry| entry.category)
            .find(|category| category.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a category's files are written relative to the cookbook root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Directly into the cookbook root directory.
    CookbookRoot,
    /// Into the named subdirectory of the cookbook root.
    Subdirectory(&'static str),
}

impl Destination {
    /// Resolve against a concrete cookbook root.
    #[must_use]
    pub fn resolve(&self, cookbook_root: &Path) -> PathBuf {
        match self {
            Self::CookbookRoot => cookbook_root.to_path_buf(),
            Self::Subdirectory(dir) => cookbook_root.join(dir),
        }
    }
}

/// A row of the category table.
pub struct CategoryEntry {
    /// The category this row describes.
    pub category: Category,
    /// Accessor for the category's items in a manifest.
    pub items: fn(&CookbookManifest) -> &[CookbookItem],
    /// Destination rule.
    pub destination: Destination,
}

impl fmt::Debug for CategoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryEntry")
            .field("category", &self.category)
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

fn root_files(manifest: &CookbookManifest) -> &[CookbookItem] {
    &manifest.root_files
}

fn files(manifest: &CookbookManifest) -> &[CookbookItem] {
    &manifest.files
}

fn templates(manifest: &CookbookManifest) -> &[CookbookItem] {
    &manifest.templates
}

fn attributes(manifest: &CookbookManifest) -> &[CookbookItem] {
    &manifest.attributes
}

fn recipes(manifest: &CookbookManifest) -> &[CookbookItem] {
    &manifest.recipes
}

fn definitions(manifest: &CookbookManifest) -> &[CookbookItem] {
    &manifest.definitions
}

fn libraries(manifest: &CookbookManifest) -> &[CookbookItem] {
    &manifest.libraries
}

fn providers(manifest: &CookbookManifest) -> &[CookbookItem] {
    &manifest.providers
}

fn resources(manifest: &CookbookManifest) -> &[CookbookItem] {
    &manifest.resources
}

/// All categories in processing order.
///
/// Order only matters for what is left on disk after a partial failure.
pub static CATEGORY_TABLE: [CategoryEntry; 9] = [
    CategoryEntry {
        category: Category::RootFiles,
        items: root_files,
        destination: Destination::CookbookRoot,
    },
    CategoryEntry {
        category: Category::Files,
        items: files,
        destination: Destination::Subdirectory("files"),
    },
    CategoryEntry {
        category: Category::Templates,
        items: templates,
        destination: Destination::Subdirectory("templates"),
    },
    CategoryEntry {
        category: Category::Attributes,
        items: attributes,
        destination: Destination::Subdirectory("attributes"),
    },
    CategoryEntry {
        category: Category::Recipes,
        items: recipes,
        destination: Destination::Subdirectory("recipes"),
    },
    CategoryEntry {
        category: Category::Definitions,
        items: definitions,
        destination: Destination::Subdirectory("definitions"),
    },
    CategoryEntry {
        category: Category::Libraries,
        items: libraries,
        destination: Destination::Subdirectory("libraries"),
    },
    CategoryEntry {
        category: Category::Providers,
        items: providers,
        destination: Destination::Subdirectory("providers"),
    },
    CategoryEntry {
        category: Category::Resources,
        items: resources,
        destination: Destination::Subdirectory("resources"),
    },
];
