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
#![allow(clippy::redundant_pub_crate)]

//! Client for the download host's remote control endpoint.
//!
//! Layout: `client.rs` (HTTP client and `QueueControl` implementation), `models.rs`
//! (wire records), `error.rs` (client errors).

mod client;
mod error;
mod models;

pub use client::{ControlClient, FILE_MOVE_TOP};
pub use error::{RpcError, RpcResult};
pub use models::{FileRecord, GroupRecord};
