//! Error types for configuration loading.

use thiserror::Error;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable the host always supplies was absent.
    #[error("missing host variable")]
    MissingVar {
        /// Name of the missing environment variable.
        name: &'static str,
    },
    /// A variable contained an invalid value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Variable that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
