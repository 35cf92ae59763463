//! Directory creation.

use std::path::Path;

use chefkit_core::{CookbookDownloadError, CookbookDownloadResult};
use tokio::fs::DirBuilder;

/// Create `path` and any missing parents. Existing directories are fine.
pub(crate) async fn ensure_directory(path: &Path, mode: u32) -> CookbookDownloadResult<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(mode);
    #[cfg(not(unix))]
    let _ = mode;

    builder
        .create(path)
        .await
        .map_err(|e| CookbookDownloadError::create_directory(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chefkit_core::DEFAULT_DIRECTORY_MODE;

    #[tokio::test]
    async fn test_creates_nested_directories() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("foo-0.2.1").join("recipes");

        ensure_directory(&path, DEFAULT_DIRECTORY_MODE).await.unwrap();

        assert!(path.is_dir());
    }

    #[tokio::test]
    async fn test_existing_directory_is_not_an_error() {
        let temp = tempfile::tempdir().unwrap();

        ensure_directory(temp.path(), DEFAULT_DIRECTORY_MODE)
            .await
            .unwrap();
        ensure_directory(temp.path(), DEFAULT_DIRECTORY_MODE)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_file_in_the_way_reports_the_path() {
        let temp = tempfile::tempdir().unwrap();
        let blocker = temp.path().join("foo-0.2.1");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = ensure_directory(&blocker.join("recipes"), DEFAULT_DIRECTORY_MODE)
            .await
            .unwrap_err();

        assert!(matches!(err, CookbookDownloadError::CreateDirectory { .. }));
        assert!(err.to_string().contains("foo-0.2.1"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_applies_directory_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("private");

        ensure_directory(&path, 0o700).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
