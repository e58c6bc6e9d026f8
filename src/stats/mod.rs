//! Play statistics: per-level records, aggregates and persistence.

pub mod persistence;
pub mod types;

pub use persistence::*;
pub use types::*;
