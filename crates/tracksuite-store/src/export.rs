//! Export writer: pretty-printed JSON snapshots named by today's date.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize `value` as pretty JSON into `<dir>/<prefix>-<YYYY-MM-DD>.json`
/// (today's local date) and return the written path.
pub fn export_pretty_json<T: Serialize>(value: &T, dir: &Path, prefix: &str) -> Result<PathBuf> {
    let stamp = chrono::Local::now().format("%Y-%m-%d");
    let path = dir.join(format!("{prefix}-{stamp}.json"));

    let json = serde_json::to_string_pretty(value).context("failed to serialize export data")?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;
    std::fs::write(&path, json)
        .with_context(|| format!("failed to write export to {}", path.display()))?;

    Ok(path)
}
