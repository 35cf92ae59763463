//! Download configuration and error types.
//!
//! - `config` - Tunables for the download pipeline (`DownloadConfig`)
//! - `errors` - Error type returned by the pipeline (`CookbookDownloadError`)

mod config;
mod errors;

pub use config::{DEFAULT_DIRECTORY_MODE, DownloadConfig};
pub use errors::{CookbookDownloadError, CookbookDownloadResult};
