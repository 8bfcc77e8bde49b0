//! Tracing/logging setup shared by the storefront binaries and the browser
//! entry point.

/// Initialize process-wide tracing with `default_filter` as the fallback
/// directive set.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_with_filter(default_filter: &str) {
    tracing::init(default_filter);
}

/// Tracing configuration (filters, writers).
pub mod tracing;
