//! Sequential download of a single category.

use std::path::Path;

use chefkit_core::{
    Category, CookbookDownloadResult, CookbookEvent, CookbookEventEmitter, CookbookItem,
    CookbookSourcePort,
};
use tracing::{debug, info};

use crate::fs::ensure_directory;
use crate::plan::plain_name;

/// Downloads every item of one category into one directory.
///
/// Borrowed collaborators keep this cheap to build per cookbook.
pub struct CategoryDownloader<'a> {
    source: &'a dyn CookbookSourcePort,
    emitter: &'a dyn CookbookEventEmitter,
    directory_mode: u32,
}

impl<'a> CategoryDownloader<'a> {
    #[must_use]
    pub const fn new(
        source: &'a dyn CookbookSourcePort,
        emitter: &'a dyn CookbookEventEmitter,
        directory_mode: u32,
    ) -> Self {
        Self {
            source,
            emitter,
            directory_mode,
        }
    }

    /// Fetch `items` into `destination_dir`, in order.
    ///
    /// An empty list is a no-op: no event, no directory. Otherwise the
    /// directory is created (with parents) and each item is written to
    /// `destination_dir/<item.name>`. The first failure is returned as-is
    /// and the remaining items are not attempted.
    ///
    /// # Errors
    ///
    /// Returns [`CookbookDownloadError::InvalidName`] before any I/O if an
    /// item name is not a single plain path component. Otherwise returns the
    /// directory creation or transfer error that stopped the category.
    ///
    /// [`CookbookDownloadError::InvalidName`]: chefkit_core::CookbookDownloadError::InvalidName
    pub async fn download(
        &self,
        items: &[CookbookItem],
        category: Category,
        destination_dir: &Path,
    ) -> CookbookDownloadResult<()> {
        if items.is_empty() {
            return Ok(());
        }
        for item in items {
            plain_name(&item.name)?;
        }

        info!(%category, files = items.len(), "Downloading {category}");
        self.emitter.emit(CookbookEvent::CategoryStarted { category });

        ensure_directory(destination_dir, self.directory_mode).await?;

        for item in items {
            let path = destination_dir.join(&item.name);
            debug!(url = %item.url, path = %path.display(), "Fetching file");
            self.source.fetch_file(&item.url, &path).await?;
            self.emitter
                .emit(CookbookEvent::FileDownloaded { category, path });
        }

        Ok(())
    }
}
