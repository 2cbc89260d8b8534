//! # Design
//!
//! - Centralize hook-level errors raised after the gatekeeper lets an invocation through.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for hook operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Host options could not be loaded.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: extguard_config::ConfigError,
    },
    /// Working directory or marker operations failed.
    #[error("filesystem operation failed")]
    FsOps {
        /// Operation identifier.
        operation: &'static str,
        /// Source fsops error.
        source: extguard_fsops::FsOpsError,
    },
    /// A call to the host's control endpoint failed.
    #[error("queue control call failed")]
    Control {
        /// Operation identifier.
        operation: &'static str,
        /// Source error reported by the control seam.
        source: anyhow::Error,
    },
    /// The control client could not be constructed.
    #[error("control client setup failed")]
    Rpc {
        /// Operation identifier.
        operation: &'static str,
        /// Source RPC error.
        source: extguard_rpc::RpcError,
    },
    /// A sentinel directive could not be delivered to the host.
    #[error("host channel operation failed")]
    Host {
        /// Operation identifier.
        operation: &'static str,
        /// Source core error.
        source: extguard_core::CoreError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: extguard_telemetry::TelemetryError,
    },
}

impl AppError {
    pub(crate) const fn config(
        operation: &'static str,
        source: extguard_config::ConfigError,
    ) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn fsops(operation: &'static str, source: extguard_fsops::FsOpsError) -> Self {
        Self::FsOps { operation, source }
    }

    pub(crate) const fn control(operation: &'static str, source: anyhow::Error) -> Self {
        Self::Control { operation, source }
    }

    pub(crate) const fn rpc(operation: &'static str, source: extguard_rpc::RpcError) -> Self {
        Self::Rpc { operation, source }
    }

    pub(crate) const fn host(operation: &'static str, source: extguard_core::CoreError) -> Self {
        Self::Host { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: extguard_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }

    /// Operation identifier carried by every variant.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match *self {
            Self::Config { operation, .. }
            | Self::FsOps { operation, .. }
            | Self::Control { operation, .. }
            | Self::Rpc { operation, .. }
            | Self::Host { operation, .. }
            | Self::Telemetry { operation, .. } => operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn app_error_helpers_build_variants() {
        let config = AppError::config(
            "load_config",
            extguard_config::ConfigError::MissingVar {
                name: "NZBOP_TEMPDIR",
            },
        );
        assert!(matches!(config, AppError::Config { .. }));
        assert_eq!(config.operation(), "load_config");

        let control = AppError::control("listgroups", anyhow::anyhow!("connection refused"));
        assert!(matches!(control, AppError::Control { .. }));
        assert_eq!(
            control.source().map(ToString::to_string).as_deref(),
            Some("connection refused")
        );

        let host = AppError::host(
            "mark_bad",
            extguard_core::CoreError::HostWrite {
                directive: "MARK=BAD".to_string(),
                source: io::Error::other("closed"),
            },
        );
        assert_eq!(host.operation(), "mark_bad");
        assert_eq!(host.to_string(), "host channel operation failed");
    }
}
