//! Shared plumbing for the fitdeck and quizdeck binaries.

use std::path::PathBuf;

use tracksuite_store::{resolve_data_dir, JsonStore};

pub mod commands;

/// Open the JSON store at the resolved data directory.
pub fn open_store(data_dir: Option<PathBuf>) -> JsonStore {
    let dir = resolve_data_dir(data_dir);
    tracing::debug!(data_dir = %dir.display(), "opening store");
    JsonStore::new(dir)
}

/// Initialize tracing for a binary, honoring `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tracksuite=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();
}
