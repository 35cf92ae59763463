//! Download pipeline configuration.

use std::num::NonZeroUsize;

/// Permission bits for created directories (owner rwx, group/other r-x).
pub const DEFAULT_DIRECTORY_MODE: u32 = 0o755;

/// Configuration for the cookbook download pipeline.
///
/// # Example
///
/// ```
/// use chefkit_core::DownloadConfig;
///
/// let config = DownloadConfig::new().with_concurrency(4);
/// assert_eq!(config.concurrency(), 4);
/// assert!(!config.is_sequential());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadConfig {
    concurrency: NonZeroUsize,
    directory_mode: u32,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            concurrency: NonZeroUsize::MIN,
            directory_mode: DEFAULT_DIRECTORY_MODE,
        }
    }
}

impl DownloadConfig {
    /// Sequential transfers, 0755 directories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of in-flight file transfers.
    ///
    /// `0` is treated as `1`. Defaults to 1 (strictly sequential).
    #[must_use]
    pub const fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = match NonZeroUsize::new(concurrency) {
            Some(n) => n,
            None => NonZeroUsize::MIN,
        };
        self
    }

    /// Permission bits applied to created directories on Unix.
    #[must_use]
    pub const fn with_directory_mode(mut self, mode: u32) -> Self {
        self.directory_mode = mode;
        self
    }

    /// Maximum number of in-flight file transfers.
    #[must_use]
    pub const fn concurrency(&self) -> usize {
        self.concurrency.get()
    }

    /// Permission bits applied to created directories.
    #[must_use]
    pub const fn directory_mode(&self) -> u32 {
        self.directory_mode
    }

    /// Whether transfers run one at a time.
    #[must_use]
    pub const fn is_sequential(&self) -> bool {
        self.concurrency.get() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DownloadConfig::new();
        assert_eq!(config.concurrency(), 1);
        assert_eq!(config.directory_mode(), 0o755);
        assert!(config.is_sequential());
    }

    #[test]
    fn test_zero_concurrency_clamps_to_one() {
        let config = DownloadConfig::new().with_concurrency(0);
        assert_eq!(config.concurrency(), 1);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DownloadConfig::new()
            .with_concurrency(8)
            .with_directory_mode(0o700);
        assert_eq!(config.concurrency(), 8);
        assert_eq!(config.directory_mode(), 0o700);
    }
}
