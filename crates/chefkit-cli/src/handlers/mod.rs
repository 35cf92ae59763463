//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Translate CLI input into downloader calls
//! - Format output for the terminal
//!
//! The testable core of each handler returns [`crate::CliError`] so exit
//! codes survive the trip through `anyhow`.

pub mod download;
pub mod show;
