//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

const QUIET_DIRECTIVES: &str = "warn";
const VERBOSE_DIRECTIVES: &str =
    "warn,chefkit_cli=debug,chefkit_core=debug,chefkit_download=debug,chefkit_http=debug";

/// Filter used when `RUST_LOG` is not set.
pub const fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVES
    } else {
        QUIET_DIRECTIVES
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
