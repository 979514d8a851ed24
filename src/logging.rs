//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout only carries progress lines and the report.

use crate::constants::logging::{DEFAULT_FILTER, VERBOSE_FILTER};
use tracing_subscriber::EnvFilter;

/// Filter directives to use when `RUST_LOG` is not set
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }
}

/// Install the global subscriber; `RUST_LOG` takes precedence over `verbose`
///
/// Calling this twice is harmless, the second subscriber is ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
