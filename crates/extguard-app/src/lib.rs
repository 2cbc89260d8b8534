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

//! Banned-extension hook wiring.
//!
//! Layout: `bootstrap.rs` (command line and environment wiring), `workflow.rs`
//! (gatekeeper outcomes, reorder, scan, housekeeping), `exit.rs` (host exit statuses).

/// Process entrypoint wiring.
pub mod bootstrap;
/// Hook-level error type.
pub mod error;
/// Host exit statuses.
pub mod exit;
/// Invocation workflow.
pub mod workflow;

pub use bootstrap::{Cli, LogFormatArg, run, run_invocation};
pub use error::{AppError, AppResult};
pub use exit::ExitDisposition;
pub use workflow::{Hook, early_exit};
