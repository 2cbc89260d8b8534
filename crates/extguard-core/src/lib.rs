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

//! Host-agnostic domain model and decision rules for the banned-extension hook.
//!
//! Layout: `model/` (invocation and download types), `gate.rs` (early-exit rules),
//! `volume.rs` (split-archive ordering), `host.rs` (parameter store and sentinel
//! channel), `service/` (remote control seam).

pub mod error;
pub mod gate;
pub mod host;
pub mod model;
pub mod service;
pub mod volume;

pub use error::{CoreError, CoreResult};
pub use gate::{GateDecision, HaltReason, evaluate};
pub use host::{
    HostChannel, PARAM_BANNED, PARAM_BANNED_FILE, PARAM_ENV_PREFIX, PARAM_SORTED,
    ParameterStore, SentinelHost,
};
pub use model::{
    DownloadId, DownloadTarget, FileId, HookPhase, InvocationContext, QueueEvent, RemoteFile,
    STATUS_FAILURE_BAD, TOTAL_STATUS_FAILURE, Verdict,
};
pub use service::QueueControl;
pub use volume::{last_volume, volume_number};
