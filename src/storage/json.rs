/// JSON-file implementation of the storage backend
///
/// This module provides the concrete file-backed implementation for
/// persisting habit data. The store is a single JSON document mapping
/// habit names to their completion dates.

use std::path::PathBuf;

use crate::storage::{StorageBackend, StorageError, StoreData};

/// File-backed storage writing one pretty-printed JSON document
///
/// Single-process, last-writer-wins; concurrent writers are unsupported.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create a storage instance backed by the given file path
    ///
    /// The file is not touched until the first save; a nonexistent file
    /// simply loads as an empty store.
    pub fn new(path: PathBuf) -> Self {
        tracing::debug!("JSON storage backed by: {}", path.display());
        Self { path }
    }

    /// The file this backend reads and writes
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> StoreData {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Store file not found, starting empty");
                return StoreData::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read store file, starting empty: {}", e);
                return StoreData::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(
                    "Malformed store file {}, treating as empty: {}",
                    self.path.display(),
                    e
                );
                StoreData::new()
            }
        }
    }

    fn save(&self, data: &StoreData) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, json)?;

        tracing::debug!("Saved {} habits to {}", data.len(), self.path.display());
        Ok(())
    }
}
