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

//! Host environment facade: invocation context and hook options.
//!
//! Layout: `env.rs` (environment snapshot), `model.rs` (typed options),
//! `validate.rs` (value parsing), `loader.rs` (environment to context/options).

pub mod env;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use env::HostEnv;
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, load_context};
pub use model::{BannedExtensions, ControlEndpoint, HookConfig, MARKER_DIR_NAME};
