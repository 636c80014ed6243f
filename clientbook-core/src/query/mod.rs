pub mod filtering;
pub mod sorting;

pub use filtering::filter_records;
pub use sorting::*;
