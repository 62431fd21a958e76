/// In-memory implementation of the storage backend
///
/// A test double that keeps the document in a RefCell instead of a file,
/// so tests can exercise store operations without touching the filesystem.

use std::cell::RefCell;

use crate::storage::{StorageBackend, StorageError, StoreData};

/// Memory-backed storage for tests
#[derive(Default)]
pub struct MemoryStorage {
    data: RefCell<StoreData>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> StoreData {
        self.data.borrow().clone()
    }

    fn save(&self, data: &StoreData) -> Result<(), StorageError> {
        *self.data.borrow_mut() = data.clone();
        Ok(())
    }
}
