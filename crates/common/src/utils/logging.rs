use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,policy_validator::validation=debug";

fn filter_or(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_FILTER)))
}

/// Initialize tracing subscriber with compact human-readable output.
/// - Respects `RUST_LOG` if set, otherwise `fallback` or the crate default
/// - Writes to stdout
/// - A second call is a no-op
pub fn init_logging_default(fallback: Option<&str>) {
    let _ = fmt()
        .with_env_filter(filter_or(fallback))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
pub fn init_logging_json(fallback: Option<&str>) {
    let _ = fmt()
        .with_env_filter(filter_or(fallback))
        .with_target(true)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Subscriber for tests: captured by the test harness, never panics on reuse.
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(filter_or(Some("debug")))
        .with_test_writer()
        .try_init();
}
