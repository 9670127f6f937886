//! Filesystem-backed slice storage: one JSON file per slice.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{SliceStorage, StorageError};

/// Stores each slice as `<dir>/<key>.json`.
///
/// Files are written whole on every update; slice payloads are small and
/// the writer thread serializes access, so partial writes are the only
/// corruption risk and seeding already tolerates those.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SliceStorage for JsonFileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), payload).map_err(|e| StorageError::Io(e.to_string()))
    }
}
