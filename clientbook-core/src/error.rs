use std::path::PathBuf;

use clientbook_model::CriterionId;
use thiserror::Error;

/// Contract violations reported by the sort criteria manager.
///
/// These come from the UI layer handing over positions or ids that do not
/// exist in the current list. The list is left untouched when one is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Reorder index out of bounds: from {from} to {to} with {len} criteria")]
    IndexOutOfBounds { from: usize, to: usize, len: usize },

    #[error("Sort criterion not found: {0}")]
    CriterionNotFound(CriterionId),
}

/// Failures of the key-value storage behind persisted preferences.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Reasons a persisted criteria value was rejected on load.
#[derive(Error, Debug)]
pub enum SlotDecodeError {
    #[error("Slot is empty")]
    Empty,

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Persisted value is not an array")]
    NotAnArray,

    #[error("Entry {index} is missing a non-empty `{key}`")]
    MissingKey { index: usize, key: &'static str },
}

/// Errors raised while building a record store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
}

pub type Result<T, E = CriteriaError> = std::result::Result<T, E>;
