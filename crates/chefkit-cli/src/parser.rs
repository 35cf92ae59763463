//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use chefkit_http::DEFAULT_SERVER_URL;

use crate::commands::Commands;

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Command-line interface for downloading cookbooks from a Chef server.
#[derive(Parser)]
#[command(name = "chefkit")]
#[command(about = "Download cookbooks from a Chef server")]
#[command(version)]
pub struct Cli {
    /// Chef server base URL (including any organization path)
    #[arg(
        long = "server-url",
        env = "CHEF_SERVER_URL",
        global = true,
        default_value = DEFAULT_SERVER_URL
    )]
    pub server_url: String,

    /// Per-request timeout in seconds
    #[arg(
        long = "timeout-secs",
        env = "CHEFKIT_TIMEOUT_SECS",
        global = true,
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
