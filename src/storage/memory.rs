//! In-memory store

use super::{StorageError, Store};
use rustc_hash::FxHashMap;

/// Store that keeps values for the life of the process
///
/// Backs `--no-save` play and tests. Switching it read-only makes every write
/// fail, which is how a disabled or full storage backend behaves.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::ReadOnly);
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
