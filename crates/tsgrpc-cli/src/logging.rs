//! Tracing setup for the plugin binary

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`EnvFilter` syntax)
pub const LOG_ENV: &str = "TSGRPC_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Initialize logging to stderr
///
/// Stdout carries the plugin response, so log output must never go there. The filter is read
/// from [`LOG_ENV`], falling back to `warn`. Calling this more than once is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Ignore the error if a global subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
