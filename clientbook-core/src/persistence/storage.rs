//! Key-value storage backing persisted preferences.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::debug;

use crate::error::StorageError;

/// Durable string slots addressed by key.
///
/// This is the whole capability the preference layer needs: read a slot,
/// overwrite a slot. Implementations must be usable from any thread.
pub trait PreferenceStorage: Send + Sync + fmt::Debug {
    /// Read the value stored under `key`, `None` when the slot was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage. Values live as long as the instance.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot, e.g. with a value persisted by an earlier session.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.write().insert(key.into(), value.into());
        self
    }

    /// Current raw value of a slot.
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<config dir>/clientbook`, when the platform has a config dir.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join("clientbook")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        std::fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;

        // Write to a sibling temp file and rename so a crash never leaves a
        // half-written slot behind.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(io_err(&tmp))?;
        std::fs::rename(&tmp, &path).map_err(io_err(&path))?;

        debug!(path = %path.display(), bytes = value.len(), "wrote preference slot");
        Ok(())
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + use<> {
    let path = path.to_path_buf();
    move |source| StorageError::Io { path, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v").unwrap();

        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn file_storage_missing_slot_is_none() {
        let dir = tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.get("clientSortCriteria").unwrap(), None);
    }

    #[test]
    fn file_storage_creates_dir_and_overwrites() {
        let dir = tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path().join("nested"));

        storage.set("clientSortCriteria", "[1]").unwrap();
        storage.set("clientSortCriteria", "[2]").unwrap();

        assert_eq!(
            storage.get("clientSortCriteria").unwrap().as_deref(),
            Some("[2]")
        );
        assert!(dir.path().join("nested/clientSortCriteria.json").exists());
        assert!(!dir.path().join("nested/clientSortCriteria.json.tmp").exists());
    }

    #[test]
    fn file_storage_rejects_path_like_keys() {
        let dir = tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path());

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                storage.set(key, "x"),
                Err(StorageError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn file_storage_reports_unwritable_dir() {
        let dir = tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let storage = FileStorage::new(blocker.join("inner"));

        assert!(matches!(
            storage.set("clientSortCriteria", "[]"),
            Err(StorageError::Io { .. })
        ));
    }
}
