//! Read-only access to the client records being browsed.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use clientbook_model::Record;
use tracing::debug;

use crate::error::StoreError;

/// Anything that can hand out the current set of client records.
///
/// Callers must not assume any particular order of the returned slice. A
/// network-backed source would refresh its snapshot out of band and keep
/// serving the last one it received here.
pub trait RecordSource: fmt::Debug {
    /// The records currently known to the source.
    fn list(&self) -> &[Record];
}

/// Fixed, in-memory record collection.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Build a store, rejecting duplicate record ids.
    pub fn new(records: Vec<Record>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of records in their camelCase wire form.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load records from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let store = Self::from_json_str(&content)?;
        debug!(path = %path.display(), count = store.len(), "loaded client records");
        Ok(store)
    }

    /// The built-in demo clients.
    #[cfg(feature = "demo")]
    pub fn demo() -> Self {
        Self {
            records: crate::demo::demo_records(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for RecordStore {
    fn list(&self) -> &[Record] {
        &self.records
    }
}
