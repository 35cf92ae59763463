//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;
use clap::builder::RangedU64ValueParser;

/// Available commands for the chefkit tool.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a cookbook version into a local directory
    Download {
        /// Cookbook name (e.g., "apache")
        name: String,
        /// Cookbook version; omit or use "latest" for the newest version
        version: Option<String>,
        /// Directory to download into (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Maximum number of files transferred at once
        #[arg(
            short = 'j',
            long,
            default_value_t = 1,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=64)
        )]
        concurrency: usize,
        /// Download into a temporary directory and move into place only on success
        #[arg(long)]
        staged: bool,
    },

    /// Show the files a cookbook version contains without downloading them
    Show {
        /// Cookbook name
        name: String,
        /// Cookbook version; omit or use "latest" for the newest version
        version: Option<String>,
    },
}
