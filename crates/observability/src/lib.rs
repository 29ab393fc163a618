//! Tracing/logging setup shared by every process embedding the repricer.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide tracing: `info` by default, format from
/// `FLEAMARKET_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info", LogFormat::from_env());
}

/// Like [`init`], with a custom default filter used when `RUST_LOG` is unset.
pub fn init_with_default(default_filter: &str) {
    tracing::init(default_filter, LogFormat::from_env());
}

/// Like [`init_with_default`], with an explicit output format.
pub fn init_with_format(default_filter: &str, format: LogFormat) {
    tracing::init(default_filter, format);
}
