/// Storage layer for persisting habit data
///
/// This module handles reading and writing the keyed record store. It
/// provides a backend trait so the JSON file implementation can be swapped
/// for an in-memory one in tests.

pub mod json;
pub mod memory;

// Re-export the main storage types
pub use json::JsonStorage;
pub use memory::MemoryStorage;

use std::collections::BTreeMap;
use thiserror::Error;
use crate::domain::HabitRecord;

/// The full persisted document: habit name → completion record
pub type StoreData = BTreeMap<String, HabitRecord>;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to write store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait defining the persistence interface for the habit store
///
/// Each store operation performs a full load, mutates the document, and
/// writes it back whole; backends never see partial updates.
pub trait StorageBackend {
    /// Read the full persisted document
    ///
    /// A missing or malformed store is recovered as an empty document,
    /// never an error.
    fn load(&self) -> StoreData;

    /// Overwrite the persisted document with `data`
    fn save(&self, data: &StoreData) -> Result<(), StorageError>;
}
