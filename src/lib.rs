/// Public library interface for the habit streak tracker
///
/// This module exports the habit store facade and the public domain types
/// used by the CLI and by tests.

use std::path::PathBuf;
use chrono::NaiveDate;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;

// Re-export public modules and types
pub use domain::*;
pub use storage::{JsonStorage, MemoryStorage, StorageBackend, StorageError, StoreData};

/// Errors that can occur while operating on the store
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),
}

/// The habit store: all CRUD and mark operations over the record store
///
/// Every operation performs a full read-modify-write cycle against the
/// injected backend. Nothing is cached between calls, so within a single
/// process the persisted file is always the source of truth.
pub struct HabitStore<B: StorageBackend> {
    backend: B,
}

impl HabitStore<JsonStorage> {
    /// Open a store backed by a JSON file at the given path
    pub fn open(path: PathBuf) -> Self {
        tracing::info!("Opening habit store at: {}", path.display());
        Self::with_backend(JsonStorage::new(path))
    }
}

impl HabitStore<MemoryStorage> {
    /// Create a store backed by memory only (useful for testing)
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryStorage::new())
    }
}

impl<B: StorageBackend> HabitStore<B> {
    /// Create a store over an arbitrary backend
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Register a new habit with an empty completion history
    ///
    /// Adding a habit that already exists is a no-op, not an error. The
    /// name must be non-empty; names are case-sensitive.
    pub fn add_habit(&self, name: &str) -> Result<(), TrackerError> {
        domain::validate_name(name)?;

        let mut data = self.backend.load();
        if !data.contains_key(name) {
            data.insert(name.to_string(), HabitRecord::new());
            self.backend.save(&data)?;
            tracing::debug!("Added habit '{}'", name);
        }
        Ok(())
    }

    /// Record a completion date for a habit
    ///
    /// Persists only when a mutation occurred; returns whether it did.
    /// Marking a nonexistent habit or an already-marked date is silently
    /// absorbed.
    pub fn mark_date(&self, name: &str, date: NaiveDate) -> Result<bool, TrackerError> {
        let mut data = self.backend.load();
        let marked = match data.get_mut(name) {
            Some(record) => record.mark(date),
            None => false,
        };
        if marked {
            self.backend.save(&data)?;
            tracing::debug!("Marked '{}' done on {}", name, date);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Rename a habit, preserving its completion dates
    ///
    /// Succeeds only if `old_name` exists and `new_name` does not;
    /// otherwise returns false and leaves state unchanged.
    pub fn rename_habit(&self, old_name: &str, new_name: &str) -> Result<bool, TrackerError> {
        domain::validate_name(new_name)?;

        let mut data = self.backend.load();
        if data.contains_key(new_name) {
            return Ok(false);
        }

        match data.remove(old_name) {
            Some(record) => {
                data.insert(new_name.to_string(), record);
                self.backend.save(&data)?;
                tracing::debug!("Renamed habit '{}' to '{}'", old_name, new_name);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a habit and its completion history
    ///
    /// Returns whether anything was removed; deleting a nonexistent habit
    /// is a no-op.
    pub fn delete_habit(&self, name: &str) -> Result<bool, TrackerError> {
        let mut data = self.backend.load();
        if data.remove(name).is_some() {
            self.backend.save(&data)?;
            tracing::debug!("Deleted habit '{}'", name);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The full current mapping of habit names to completion records
    pub fn habits(&self) -> StoreData {
        self.backend.load()
    }

    /// Streak statistics for one habit, relative to the given calendar day
    ///
    /// Returns None if the habit does not exist.
    pub fn streak_for(&self, name: &str, today: NaiveDate) -> Option<Streak> {
        let data = self.backend.load();
        data.get(name).map(|record| Streak::calculate(&record.dates, today))
    }
}
