//! Key-value JSON store over a data directory.
//!
//! Each key maps to `<data_dir>/<key>.json`. Collections are written
//! wholesale on every mutation, so a reader always sees a consistent
//! snapshot. Absent or unparsable values never surface as errors to the
//! caller of [`JsonStore::load_or_else`] — the caller-supplied default
//! provider fills in instead.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "TRACKSUITE_DATA";

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".tracksuite";

/// Errors that can occur when reading or writing the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A key's backing file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A key's backing file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A value could not be serialized to JSON.
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

/// Resolve the data directory: explicit flag first, then the
/// `TRACKSUITE_DATA` environment variable, then `./.tracksuite`.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// A JSON key-value store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// Read the raw JSON string stored under `key`, or `None` if absent.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read { path, source: e }),
        }
    }

    /// Write a raw JSON string under `key`, creating the data directory
    /// on demand. The previous value is replaced entirely.
    pub fn put_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        std::fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::Write {
            path: self.data_dir.clone(),
            source: e,
        })?;
        std::fs::write(&path, value).map_err(|e| StoreError::Write { path, source: e })?;
        Ok(())
    }

    /// Serialize `value` as pretty JSON and store it under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialize {
            key: key.to_string(),
            source: e,
        })?;
        self.put_raw(key, &json)?;
        tracing::debug!(key, "persisted collection");
        Ok(())
    }

    /// Load the value stored under `key`, substituting `fallback()` when
    /// the key is absent or its value does not parse. Malformed state is
    /// recovered silently (warn-logged), never surfaced as an error.
    pub fn load_or_else<T, F>(&self, key: &str, fallback: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let raw = match self.get_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key, "no stored value, using defaults");
                return fallback();
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "store read failed, using defaults");
                return fallback();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value is malformed, using defaults");
                fallback()
            }
        }
    }
}
