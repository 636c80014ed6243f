//! Persistence of the user's sort criteria.
//!
//! The criteria list is a best-effort cache of a user preference, not a
//! system of record. Loading never fails: anything unusable in the slot
//! yields the default list. Saving never fails either: write errors are
//! logged and the in-memory list stays authoritative.

use std::fmt;
use std::sync::Arc;

use clientbook_model::SortCriteriaList;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::SlotDecodeError;
use crate::persistence::storage::PreferenceStorage;

/// Name of the slot holding the serialized criteria list.
pub const CRITERIA_SLOT_KEY: &str = "clientSortCriteria";

/// Load/save capability for the criteria list, injected into the manager.
pub trait CriteriaStore: Send + Sync + fmt::Debug {
    /// Read the persisted list, or the default list if there is none usable.
    fn load(&self) -> SortCriteriaList;

    /// Persist `criteria`. Failures are absorbed by the implementation.
    fn save(&self, criteria: &SortCriteriaList);
}

/// Criteria store over a single named slot of a [`PreferenceStorage`].
///
/// Without storage (e.g. a headless context with nowhere to write) it acts
/// as if the slot were absent: `load` returns the default and `save` does
/// nothing.
#[derive(Debug, Clone)]
pub struct SlotCriteriaStore {
    storage: Option<Arc<dyn PreferenceStorage>>,
    key: String,
}

impl SlotCriteriaStore {
    pub fn new(storage: Arc<dyn PreferenceStorage>) -> Self {
        Self {
            storage: Some(storage),
            key: CRITERIA_SLOT_KEY.to_string(),
        }
    }

    /// A store for environments without durable storage.
    pub fn unavailable() -> Self {
        Self {
            storage: None,
            key: CRITERIA_SLOT_KEY.to_string(),
        }
    }

    /// Use a different slot name.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl CriteriaStore for SlotCriteriaStore {
    fn load(&self) -> SortCriteriaList {
        let Some(storage) = &self.storage else {
            debug!("no preference storage available, using default sort");
            return SortCriteriaList::default_list();
        };

        let raw = match storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no saved sort criteria, using default sort");
                return SortCriteriaList::default_list();
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read sort criteria, using default sort");
                return SortCriteriaList::default_list();
            }
        };

        match decode_criteria(&raw) {
            Ok(criteria) => {
                debug!(key = %self.key, count = criteria.len(), "loaded sort criteria");
                criteria
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "discarding saved sort criteria, using default sort");
                SortCriteriaList::default_list()
            }
        }
    }

    fn save(&self, criteria: &SortCriteriaList) {
        let Some(storage) = &self.storage else {
            debug!("no preference storage available, skipping sort criteria save");
            return;
        };

        let encoded = match encode_criteria(criteria) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, "failed to serialize sort criteria");
                return;
            }
        };

        match storage.set(&self.key, &encoded) {
            Ok(()) => {
                info!(key = %self.key, count = criteria.len(), "saved sort criteria")
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to save sort criteria")
            }
        }
    }
}

/// Serialize a criteria list to its slot representation.
pub fn encode_criteria(
    criteria: &SortCriteriaList,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(criteria)
}

/// Parse and validate a slot value.
///
/// The value must be a JSON array whose every element carries a non-empty
/// `id`, `field` and `direction`; `field` and `direction` must name a known
/// sortable field and direction. Unknown extra keys are ignored.
pub fn decode_criteria(raw: &str) -> Result<SortCriteriaList, SlotDecodeError> {
    if raw.trim().is_empty() {
        return Err(SlotDecodeError::Empty);
    }

    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(entries) = &value else {
        return Err(SlotDecodeError::NotAnArray);
    };

    for (index, entry) in entries.iter().enumerate() {
        for key in ["id", "field", "direction"] {
            let present = entry
                .get(key)
                .and_then(Value::as_str)
                .is_some_and(|s| !s.is_empty());
            if !present {
                return Err(SlotDecodeError::MissingKey { index, key });
            }
        }
    }

    Ok(serde_json::from_value(value)?)
}
