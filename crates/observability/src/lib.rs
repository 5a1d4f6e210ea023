//! Tracing/logging setup shared by valuekit binaries.

/// Initialize process-wide tracing with the default filter (`info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
