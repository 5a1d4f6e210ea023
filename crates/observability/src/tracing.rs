//! Tracing/logging initialization.
//!
//! Logs are JSON lines with timestamps. The filter comes from `RUST_LOG` when set,
//! otherwise from the directive passed to [`init`].

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Resolve the active filter: `RUST_LOG` wins, `fallback` otherwise.
pub fn filter_from_env(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env(fallback))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
