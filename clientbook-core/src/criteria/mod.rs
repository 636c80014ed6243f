//! Editing of the ordered sort criteria list.

pub mod manager;

pub use manager::SortCriteriaManager;
