//! Logging initialisation primitives and configuration.
//!
//! # Design
//! - Centralises logging setup behind a single entry point.
//! - The default `Host` format writes prefixed lines to stdout, where the host collects
//!   them into its own log; `Pretty` and `Json` exist for running the hook by hand.
//! - `RUST_LOG` overrides the configured directive.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, TelemetryError};
use crate::host_format::HostFormat;

/// Default filter: detail lines from this workspace, warnings from dependencies.
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn,extguard=debug";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Filter directive (e.g., `info`, `warn,extguard=debug`).
    pub level: &'a str,
    /// Output format selection for the tracing subscriber.
    pub format: LogFormat,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_DIRECTIVE,
            format: LogFormat::Host,
        }
    }
}

/// Available output formats for the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Host log-line prefixes (`[INFO] ...`).
    Host,
    /// Human-readable, pretty-printed logs.
    Pretty,
    /// Structured JSON objects.
    Json,
}

/// Configure and install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a global subscriber has
/// already been installed.
pub fn init_logging(config: &LoggingConfig<'_>) -> Result<()> {
    let filter = build_env_filter(config.level)?;
    let installed = match config.format {
        LogFormat::Host => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .event_format(HostFormat)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(false)
                    .with_thread_ids(false),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_thread_ids(false),
            )
            .try_init(),
    };
    installed.map_err(|source| TelemetryError::SubscriberInstall { source })
}

fn build_env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|source| TelemetryError::InvalidFilter {
        directive: level.to_string(),
        source,
    })
}
