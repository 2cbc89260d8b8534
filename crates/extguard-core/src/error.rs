//! Error types for the core hook domain.

use std::io;

use thiserror::Error;

/// Primary error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A sentinel directive could not be written to the host.
    #[error("failed to deliver host directive")]
    HostWrite {
        /// Directive that was being written.
        directive: String,
        /// Underlying IO failure.
        source: io::Error,
    },
}

/// Convenience alias for core results.
pub type CoreResult<T> = Result<T, CoreError>;
