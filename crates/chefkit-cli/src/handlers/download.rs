//! Download command handler.
//!
//! Plain mode writes straight into `<dir>/<cookbook>-<version>` and leaves
//! partial results on failure. Staged mode downloads into a hidden scratch
//! directory inside `<dir>` and renames it into place only after every file
//! succeeded, replacing any previous copy.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use chefkit_core::{CookbookEventEmitter, DownloadConfig};
use chefkit_download::CookbookDownloader;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::ConsoleEmitter;

const STAGING_PREFIX: &str = ".chefkit-staging-";

/// Arguments for the download command.
#[derive(Debug, Clone)]
pub struct DownloadArgs<'a> {
    pub name: &'a str,
    pub version: Option<&'a str>,
    pub dir: Option<PathBuf>,
    pub concurrency: usize,
    pub staged: bool,
}

/// Execute the download command with terminal progress.
pub async fn execute(ctx: &CliContext, args: DownloadArgs<'_>) -> Result<()> {
    let path = download(ctx, &args, Arc::new(ConsoleEmitter::new())).await?;
    println!("Cookbook downloaded to {}", path.display());
    Ok(())
}

/// Run the download and return the final cookbook directory.
pub async fn download(
    ctx: &CliContext,
    args: &DownloadArgs<'_>,
    emitter: Arc<dyn CookbookEventEmitter>,
) -> Result<PathBuf, CliError> {
    let config = DownloadConfig::new().with_concurrency(args.concurrency);
    let downloader = ctx.downloader(config, emitter);
    let version = args.version.unwrap_or_default();

    match (&args.dir, args.staged) {
        (None, false) => Ok(downloader.download(args.name, version).await?),
        (Some(dir), false) => Ok(downloader.download_at(args.name, version, dir).await?),
        (dir, true) => {
            let target = match dir {
                Some(dir) => dir.clone(),
                None => std::env::current_dir()?,
            };
            staged_download(&downloader, args.name, version, &target).await
        }
    }
}

async fn staged_download(
    downloader: &CookbookDownloader,
    name: &str,
    version: &str,
    target: &Path,
) -> Result<PathBuf, CliError> {
    tokio::fs::create_dir_all(target).await?;
    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(target)?;
    debug!(staging = %staging.path().display(), "Staging cookbook download");

    let staged = downloader.download_at(name, version, staging.path()).await?;
    let Some(dir_name) = staged.file_name() else {
        return Err(CliError::Io(format!(
            "{}: not a cookbook directory",
            staged.display()
        )));
    };
    let final_path = target.join(dir_name);

    // A manifest with no files never creates its directory.
    if !tokio::fs::try_exists(&staged).await? {
        return Ok(final_path);
    }

    if tokio::fs::try_exists(&final_path).await? {
        debug!(path = %final_path.display(), "Replacing existing cookbook");
        tokio::fs::remove_dir_all(&final_path).await?;
    }
    tokio::fs::rename(&staged, &final_path).await?;

    Ok(final_path)
}
