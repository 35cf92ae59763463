//! Cookbook download events - discriminated union for pipeline progress.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// Single discriminated union for all cookbook download events.
///
/// Serialized with a `type` tag so non-Rust consumers can switch on it:
///
/// ```text
/// { "type": "download_started", "cookbook_name": "foo", "version": "0.2.1", "total_files": 2 }
/// { "type": "category_started", "category": "recipes" }
/// { "type": "file_downloaded", "category": "recipes", "path": "/tmp/foo-0.2.1/recipes/default.rb" }
/// { "type": "download_completed", "path": "/tmp/foo-0.2.1" }
/// { "type": "download_failed", "error": "GET ...: 404" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CookbookEvent {
    /// The manifest was fetched and transfers are about to begin.
    DownloadStarted {
        /// Bare cookbook name from the manifest.
        cookbook_name: String,
        /// Cookbook version from the manifest.
        version: String,
        /// Number of files across all categories.
        total_files: usize,
    },

    /// A non-empty category is being downloaded.
    CategoryStarted {
        /// The category.
        category: Category,
    },

    /// One file was fully written.
    FileDownloaded {
        /// The category the file belongs to.
        category: Category,
        /// Local path of the written file.
        path: PathBuf,
    },

    /// Every category finished.
    DownloadCompleted {
        /// The cookbook directory.
        path: PathBuf,
    },

    /// The pipeline aborted.
    DownloadFailed {
        /// Display text of the error returned to the caller.
        error: String,
    },
}

impl CookbookEvent {
    /// Event name as used in the serialized `type` tag.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::DownloadStarted { .. } => "download_started",
            Self::CategoryStarted { .. } => "category_started",
            Self::FileDownloaded { .. } => "file_downloaded",
            Self::DownloadCompleted { .. } => "download_completed",
            Self::DownloadFailed { .. } => "download_failed",
        }
    }
}
