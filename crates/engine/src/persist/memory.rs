//! In-memory slice storage for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::{SliceStorage, StorageError};

/// A `HashMap` behind a mutex. Cloning creates another handle to the same
/// data, so a test can keep one handle while the writer thread owns the
/// other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slices: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SliceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slices = self.slices.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slices.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        let mut slices = self.slices.lock().unwrap_or_else(PoisonError::into_inner);
        slices.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_absent_key_is_none() {
        let storage = MemoryStorage::new();
        assert!(storage.read("cart").unwrap().is_none());
    }

    #[test]
    fn test_clones_share_data() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.write("wishlist", "[]").unwrap();
        assert_eq!(other.read("wishlist").unwrap().unwrap(), "[]");
    }
}
