//! Core data model definitions shared across Clientbook crates.
#![allow(missing_docs)]

pub mod client;
pub mod error;
pub mod filter;
pub mod sort;

pub use client::{ClientStatus, ClientType, Record};
pub use error::ModelError;
pub use filter::ClientFilter;
pub use sort::{
    CriterionId, FieldKind, SortCriteriaList, SortCriterion, SortDirection,
    SortField,
};
