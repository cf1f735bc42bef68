//! tracksuite-store — JSON key-value persistence and export.
//!
//! Both tracksuite applications persist their collections as JSON blobs
//! under string keys. This crate provides the store, the default-provider
//! fallback for absent or malformed entries, and the export writer.

pub mod export;
pub mod store;

pub use export::export_pretty_json;
pub use store::{resolve_data_dir, JsonStore, StoreError};
