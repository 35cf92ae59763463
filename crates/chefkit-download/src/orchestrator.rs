//! Public entry points for downloading a cookbook.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chefkit_core::{
    CookbookDownloadError, CookbookDownloadResult, CookbookEvent, CookbookEventEmitter,
    CookbookManifest, CookbookSourcePort, DownloadConfig, NoopCookbookEmitter, resolve_version,
};
use tracing::{debug, info, warn};

use crate::category::CategoryDownloader;
use crate::parallel;
use crate::plan::DownloadPlan;

/// Materializes cookbook versions on local disk.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use std::sync::Arc;
///
/// use chefkit_core::CookbookSourcePort;
/// use chefkit_download::CookbookDownloader;
///
/// # async fn example(source: Arc<dyn CookbookSourcePort>) -> Result<(), Box<dyn std::error::Error>> {
/// let downloader = CookbookDownloader::new(source);
/// let path = downloader.download_at("apache", "latest", Path::new("/srv/cookbooks")).await?;
/// println!("Cookbook downloaded to {}", path.display());
/// # Ok(())
/// # }
/// ```
pub struct CookbookDownloader {
    source: Arc<dyn CookbookSourcePort>,
    emitter: Arc<dyn CookbookEventEmitter>,
    config: DownloadConfig,
}

impl CookbookDownloader {
    /// Create a downloader with no progress reporting and sequential transfers.
    #[must_use]
    pub fn new(source: Arc<dyn CookbookSourcePort>) -> Self {
        Self {
            source,
            emitter: Arc::new(NoopCookbookEmitter::new()),
            config: DownloadConfig::default(),
        }
    }

    /// Deliver progress events to `emitter`.
    #[must_use]
    pub fn with_emitter(mut self, emitter: Arc<dyn CookbookEventEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: DownloadConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &DownloadConfig {
        &self.config
    }

    /// Download `name` at `version` into the process working directory.
    ///
    /// # Errors
    ///
    /// Fails if the working directory cannot be determined, otherwise as
    /// [`download_at`](Self::download_at).
    pub async fn download(&self, name: &str, version: &str) -> CookbookDownloadResult<PathBuf> {
        let local_dir = std::env::current_dir().map_err(CookbookDownloadError::WorkingDirectory)?;
        self.download_at(name, version, &local_dir).await
    }

    /// Download `name` at `version` into `local_dir/<cookbook_name>-<version>`.
    ///
    /// `version` may be empty or `latest` to request the newest version.
    /// Existing files at the destination are overwritten. On failure,
    /// whatever was already written stays on disk.
    ///
    /// Returns the cookbook directory path. When the manifest lists no
    /// files that directory is not created.
    ///
    /// # Errors
    ///
    /// Returns the first manifest, name, directory, or transfer error, unchanged.
    pub async fn download_at(
        &self,
        name: &str,
        version: &str,
        local_dir: &Path,
    ) -> CookbookDownloadResult<PathBuf> {
        let result = self.materialize(name, version, local_dir).await;
        if let Err(err) = &result {
            warn!(cookbook = %name, error = %err, "Cookbook download failed");
            self.emitter.emit(CookbookEvent::DownloadFailed {
                error: err.to_string(),
            });
        }
        result
    }

    /// Fetch the manifest for `name` at `version` without downloading files.
    ///
    /// # Errors
    ///
    /// Returns the source error unchanged.
    pub async fn manifest(
        &self,
        name: &str,
        version: &str,
    ) -> CookbookDownloadResult<CookbookManifest> {
        let version = resolve_version(version);
        debug!(cookbook = %name, %version, "Fetching cookbook manifest");
        Ok(self.source.fetch_manifest(name, version).await?)
    }

    async fn materialize(
        &self,
        name: &str,
        version: &str,
        local_dir: &Path,
    ) -> CookbookDownloadResult<PathBuf> {
        let manifest = self.manifest(name, version).await?;

        if !manifest.validate_name() {
            warn!(
                name = %manifest.name,
                expected = %manifest.expected_name(),
                "Cookbook name does not match cookbook_name-version"
            );
        }

        info!(
            "Downloading {} cookbook version {}",
            manifest.cookbook_name, manifest.version
        );

        let plan = DownloadPlan::new(&manifest, local_dir)?;
        self.emitter.emit(CookbookEvent::DownloadStarted {
            cookbook_name: manifest.cookbook_name.clone(),
            version: manifest.version.clone(),
            total_files: plan.total_files(),
        });

        if self.config.is_sequential() {
            let categories = CategoryDownloader::new(
                self.source.as_ref(),
                self.emitter.as_ref(),
                self.config.directory_mode(),
            );
            for category in &plan.categories {
                categories
                    .download(category.items, category.category, &category.destination)
                    .await?;
            }
        } else {
            parallel::download_all(
                self.source.as_ref(),
                self.emitter.as_ref(),
                &plan,
                self.config.concurrency(),
                self.config.directory_mode(),
            )
            .await?;
        }

        info!("Cookbook downloaded to {}", plan.cookbook_path.display());
        self.emitter.emit(CookbookEvent::DownloadCompleted {
            path: plan.cookbook_path.clone(),
        });

        Ok(plan.cookbook_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chefkit_core::testing::{RecordingEmitter, ScriptedSource, SourceCall};
    use chefkit_core::CookbookItem;

    fn manifest() -> CookbookManifest {
        CookbookManifest {
            name: "foo-0.2.1".to_string(),
            cookbook_name: "foo".to_string(),
            version: "0.2.1".to_string(),
            root_files: vec![CookbookItem {
                name: "metadata.rb".to_string(),
                url: "http://localhost/bookshelf/foo/metadata_rb".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_version_requests_latest() {
        let temp = tempfile::tempdir().unwrap();
        let source = Arc::new(
            ScriptedSource::new("http://localhost")
                .with_manifest("foo", "_latest", manifest())
                .with_file("http://localhost/bookshelf/foo/metadata_rb", "name 'foo'"),
        );
        let downloader = CookbookDownloader::new(source.clone());

        for version in ["", "latest", "_latest"] {
            downloader.download_at("foo", version, temp.path()).await.unwrap();
        }

        let manifests: Vec<SourceCall> = source
            .calls()
            .into_iter()
            .filter(|call| matches!(call, SourceCall::Manifest { .. }))
            .collect();
        assert_eq!(manifests.len(), 3);
        assert!(manifests.iter().all(|call| *call
            == SourceCall::Manifest {
                name: "foo".to_string(),
                version: "_latest".to_string(),
            }));
    }

    #[tokio::test]
    async fn test_failure_emits_download_failed_with_error_text() {
        let temp = tempfile::tempdir().unwrap();
        let source = Arc::new(ScriptedSource::new("http://localhost"));
        let emitter = Arc::new(RecordingEmitter::new());
        let downloader = CookbookDownloader::new(source).with_emitter(emitter.clone());

        let err = downloader
            .download_at("foo", "2.1.0", temp.path())
            .await
            .unwrap_err();

        assert_eq!(
            emitter.events(),
            vec![CookbookEvent::DownloadFailed {
                error: err.to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_manifest_does_not_touch_disk() {
        let source = Arc::new(
            ScriptedSource::new("http://localhost").with_manifest("foo", "0.2.1", manifest()),
        );
        let downloader = CookbookDownloader::new(source.clone());

        let fetched = downloader.manifest("foo", "0.2.1").await.unwrap();

        assert_eq!(fetched.name, "foo-0.2.1");
        assert!(source.file_urls().is_empty());
    }

    #[test]
    fn test_builder_sets_config() {
        let source = Arc::new(ScriptedSource::new("http://localhost"));
        let downloader = CookbookDownloader::new(source)
            .with_config(DownloadConfig::new().with_concurrency(4));

        assert_eq!(downloader.config().concurrency(), 4);
    }
}
