#![forbid(unsafe_code)]
#![deny(
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Logging setup for the hook binary.
//!
//! Hook output is read line by line by the host, so the default formatter renders
//! events with the host's log-kind prefixes.

pub mod error;
pub mod host_format;
pub mod init;

pub use error::{Result, TelemetryError};
pub use host_format::{HostFormat, host_prefix};
pub use init::{DEFAULT_LOG_DIRECTIVE, LogFormat, LoggingConfig, init_logging};
