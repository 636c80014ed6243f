//! # Clientbook Core
//!
//! Core library for the Clientbook record browser: an in-memory set of
//! client records, a client-type filter, and a user-editable, persisted,
//! multi-criterion sort.
//!
//! ## Architecture
//!
//! - [`store`]: read-only record sources
//! - [`query`]: filtering and the comparator engine
//! - [`criteria`]: the sort criteria manager, sole owner of the active list
//! - [`persistence`]: best-effort storage of the criteria list
//! - [`browser`]: a session tying the above together into per-render views
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "demo")]
//! # fn main() {
//! use std::sync::Arc;
//!
//! use clientbook_core::{
//!     browser::{BrowserAction, ClientBrowser},
//!     persistence::{MemoryStorage, SlotCriteriaStore},
//!     store::RecordStore,
//! };
//! use clientbook_model::ClientFilter;
//!
//! let store = Arc::new(SlotCriteriaStore::new(Arc::new(MemoryStorage::new())));
//! let mut browser = ClientBrowser::open(RecordStore::demo(), store);
//!
//! browser.apply(BrowserAction::SetFilter(ClientFilter::Company)).unwrap();
//! browser.apply(BrowserAction::AddCriterion).unwrap();
//!
//! let view = browser.view();
//! assert_eq!(view.records.len(), 3);
//! assert_eq!(view.active_criteria_count, 2);
//! # }
//! # #[cfg(not(feature = "demo"))]
//! # fn main() {}
//! ```

pub mod browser;
pub mod criteria;
#[cfg(feature = "demo")]
pub mod demo;
pub mod error;
pub mod persistence;
pub mod query;
pub mod store;

pub use browser::{BrowserAction, ClientBrowser, ClientView};
pub use criteria::SortCriteriaManager;
pub use error::{CriteriaError, SlotDecodeError, StorageError, StoreError};
pub use persistence::{
    CriteriaStore, FileStorage, MemoryStorage, PreferenceStorage,
    SlotCriteriaStore,
};
pub use query::{compare_records, filter_records, sort_records};
pub use store::{RecordSource, RecordStore};
