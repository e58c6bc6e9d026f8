//! Level catalog: per-level fish tables, durations and palettes.

pub mod data;
pub mod types;

pub use data::*;
pub use types::*;
