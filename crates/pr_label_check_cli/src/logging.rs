//! Log subscriber setup for the binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;

/// Environment variable holding an `EnvFilter` directive, e.g. `debug` or
/// `pr_label_check_core=trace`.
pub const LOG_ENV_VAR: &str = "PR_LABEL_CHECK_LOG";

/// Picks the level used when [`LOG_ENV_VAR`] is not set.
///
/// GitHub Actions sets `RUNNER_DEBUG=1` when a run is re-run with debug logging.
pub fn default_log_level(runner_debug: Option<&str>) -> &'static str {
    match runner_debug {
        Some("1") => "debug",
        _ => "info",
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// workflow commands.
pub fn init_logging() {
    let runner_debug = std::env::var("RUNNER_DEBUG").ok();
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(runner_debug.as_deref())));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
