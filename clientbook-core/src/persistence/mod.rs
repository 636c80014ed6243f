//! Preference persistence: a key-value storage capability and the sort
//! criteria store built on top of it.

pub mod criteria_store;
pub mod storage;

pub use criteria_store::{
    CRITERIA_SLOT_KEY, CriteriaStore, SlotCriteriaStore, decode_criteria,
    encode_criteria,
};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
