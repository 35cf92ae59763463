//! Destination planning for a cookbook download.
//!
//! Turns a manifest plus a target directory into the list of category
//! directories and file paths the pipeline will write, without touching
//! the filesystem.

use std::path::{Component, Path, PathBuf};

use chefkit_core::{
    CATEGORY_TABLE, Category, CookbookDownloadError, CookbookDownloadResult, CookbookItem,
    CookbookManifest,
};

/// Accept `name` only if it is exactly one normal path component.
///
/// Rejects empty names, `.`/`..`, separators and absolute paths, so nothing
/// joined from a manifest can land outside its parent directory.
pub(crate) fn plain_name(name: &str) -> CookbookDownloadResult<&str> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(name),
        _ => Err(CookbookDownloadError::invalid_name(name)),
    }
}

/// One category's share of the download.
#[derive(Debug, Clone)]
pub struct CategoryPlan<'a> {
    /// The category.
    pub category: Category,
    /// Directory the category's files are written into.
    pub destination: PathBuf,
    /// Items to fetch, in manifest order.
    pub items: &'a [CookbookItem],
}

impl CategoryPlan<'_> {
    /// Whether this category has nothing to fetch.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Local path for `item`.
    #[must_use]
    pub fn file_path(&self, item: &CookbookItem) -> PathBuf {
        self.destination.join(&item.name)
    }
}

/// The complete on-disk layout for one manifest.
#[derive(Debug, Clone)]
pub struct DownloadPlan<'a> {
    /// `<local_dir>/<manifest.name>`.
    pub cookbook_path: PathBuf,
    /// Every category in table order, including empty ones.
    pub categories: Vec<CategoryPlan<'a>>,
}

impl<'a> DownloadPlan<'a> {
    /// Plan the download of `manifest` into `local_dir`.
    ///
    /// The cookbook directory is named after the manifest's `name` field as
    /// returned by the server.
    ///
    /// # Errors
    ///
    /// Returns [`CookbookDownloadError::InvalidName`] if the manifest name or
    /// any item name is not a single plain path component.
    pub fn new(manifest: &'a CookbookManifest, local_dir: &Path) -> CookbookDownloadResult<Self> {
        let cookbook_path = local_dir.join(plain_name(&manifest.name)?);
        let categories = CATEGORY_TABLE
            .iter()
            .map(|entry| CategoryPlan {
                category: entry.category,
                destination: entry.destination.resolve(&cookbook_path),
                items: (entry.items)(manifest),
            })
            .collect::<Vec<_>>();

        for plan in &categories {
            for item in plan.items {
                plain_name(&item.name)?;
            }
        }

        Ok(Self {
            cookbook_path,
            categories,
        })
    }

    /// Categories that have at least one item, in table order.
    pub fn non_empty(&self) -> impl Iterator<Item = &CategoryPlan<'a>> {
        self.categories.iter().filter(|plan| !plan.is_empty())
    }

    /// Number of files across all categories.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.categories.iter().map(|plan| plan.items.len()).sum()
    }
}
