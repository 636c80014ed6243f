//! Multi-criterion sorting of client records
//!
//! This module provides:
//! - Sort key extraction with per-field comparison semantics
//! - Lexicographic comparison over an ordered criteria list
//! - Stable sorting of whole record sequences

pub mod compare;
pub mod keys;


pub use compare::*;
pub use keys::*;
