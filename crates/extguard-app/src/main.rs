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

//! Binary entrypoint invoked by the host as a queue and post-processing script.

/// Runs one hook invocation and exits with the status the host expects.
#[tokio::main]
async fn main() {
    std::process::exit(extguard_app::run().await);
}
