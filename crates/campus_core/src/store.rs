//! Durable store - JSON file-backed key/value persistence
//!
//! One `<key>.json` file per key under the data directory. Every operation
//! fails soft: a missing, unreadable or corrupted file reads as absent, and
//! a write failure is logged without touching the caller's in-memory state.
//! There is no locking; concurrent writers get last-write-wins semantics.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-backed key/value store scoped to one data directory.
#[derive(Debug, Clone)]
pub struct DurableStore {
    data_dir: PathBuf,
}

impl DurableStore {
    /// Create a store rooted at `data_dir`. The directory is created lazily
    /// on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory this store reads and writes under.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// Returns `None` for absent keys and for any read or parse failure.
    /// A corrupted payload is treated exactly like an absent one.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return None,
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored value failed to parse; treating as absent");
                None
            }
        }
    }

    /// Serialize `value` and write it under `key`.
    ///
    /// Storage errors are logged and swallowed - a failed write must never
    /// crash a caller that already applied the change in memory.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = fs::create_dir_all(&self.data_dir) {
            warn!(key, error = %e, "failed to create data directory");
            return;
        }

        let json = match serde_json::to_string_pretty(value) {
            Ok(j) => j,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize value");
                return;
            }
        };

        if let Err(e) = fs::write(self.key_path(key), json) {
            warn!(key, error = %e, "failed to persist value");
        } else {
            debug!(key, "value persisted");
        }
    }

    /// Delete the value stored under `key`, if any. Fails soft.
    pub fn remove(&self, key: &str) {
        let path = self.key_path(key);
        if path.exists() {
            if let Err(e) = fs::remove_file(&path) {
                warn!(key, error = %e, "failed to remove stored value");
            }
        }
    }
}
