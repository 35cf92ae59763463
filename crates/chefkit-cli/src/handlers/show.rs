//! Show command handler.
//!
//! Prints a cookbook version's file inventory without downloading anything.

use std::sync::Arc;

use anyhow::Result;
use chefkit_core::{CookbookManifest, DownloadConfig, NoopCookbookEmitter};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_inventory;

/// Execute the show command.
pub async fn execute(ctx: &CliContext, name: &str, version: Option<&str>) -> Result<()> {
    let manifest = fetch(ctx, name, version).await?;
    println!("{}", format_inventory(&manifest));
    Ok(())
}

/// Fetch the manifest for `name` at `version` (default: latest).
pub async fn fetch(
    ctx: &CliContext,
    name: &str,
    version: Option<&str>,
) -> Result<CookbookManifest, CliError> {
    let downloader = ctx.downloader(DownloadConfig::new(), Arc::new(NoopCookbookEmitter));
    Ok(downloader
        .manifest(name, version.unwrap_or_default())
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chefkit_core::testing::ScriptedSource;

    fn context() -> (Arc<ScriptedSource>, CliContext) {
        let manifest = CookbookManifest {
            name: "foo-0.2.1".to_string(),
            cookbook_name: "foo".to_string(),
            version: "0.2.1".to_string(),
            ..Default::default()
        };
        let source = Arc::new(
            ScriptedSource::new("http://localhost:8889").with_manifest("foo", "_latest", manifest),
        );
        let ctx = CliContext::with_source(source.clone());
        (source, ctx)
    }

    #[tokio::test]
    async fn test_missing_version_fetches_latest() {
        let (source, ctx) = context();

        let manifest = fetch(&ctx, "foo", None).await.unwrap();

        assert_eq!(manifest.name, "foo-0.2.1");
        assert!(source.file_urls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_cookbook_is_not_found() {
        let (_source, ctx) = context();

        let err = fetch(&ctx, "bar", Some("1.0.0")).await.unwrap_err();

        assert!(matches!(err, CliError::NotFound(_)));
        assert!(err.to_string().contains("404"));
    }
}
