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
#![allow(clippy::module_name_repetitions)]

//! Filesystem side of the hook: download directory scanning and marker upkeep.

pub mod error;
pub mod markers;
pub mod scan;

pub use error::{FsOpsError, FsOpsResult};
pub use markers::{MarkerStore, plan_removals};
pub use scan::find_banned_file;
