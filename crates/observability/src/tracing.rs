//! Subscriber setup for the repricer's diagnostics.

use tracing_subscriber::EnvFilter;

/// Output shape of log lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, for log shippers.
    #[default]
    Json,
    /// Human-readable single lines, for a host console.
    Compact,
}

impl LogFormat {
    /// Read `FLEAMARKET_LOG_FORMAT` (`json` | `compact`); anything else is JSON.
    pub fn from_env() -> Self {
        match std::env::var("FLEAMARKET_LOG_FORMAT") {
            Ok(v) => Self::parse(&v),
            Err(_) => Self::Json,
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("compact") {
            Self::Compact
        } else {
            Self::Json
        }
    }
}

/// Build the filter: `RUST_LOG` when set and valid, else `default_filter`.
pub fn filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the process-wide subscriber. Later calls are no-ops.
pub fn init(default_filter: &str, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .with_target(false);

    // Item ids ride along as fields; the repricer's messages stay plain text.
    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}
