//! Logging setup
//!
//! Call [`init`] once at the start of `main`. Events go to stderr so they
//! never mix with trees written to stdout.

use tracing_subscriber::EnvFilter;

/// Default filter without `--verbose`
const DEFAULT_FILTER: &str = "warn";

/// Default filter with `--verbose`
const VERBOSE_FILTER: &str = "debug";

/// Initializes the global tracing subscriber
///
/// `RUST_LOG` takes precedence over both defaults.
pub fn init(verbose: bool) {
    let env_filter = match std::env::var("RUST_LOG") {
        Ok(val) => EnvFilter::new(val),
        Err(_) => EnvFilter::new(default_filter(verbose)),
    };

    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}
