//! Utility modules: JSON persistence and the file logger.

pub mod logger;
pub mod persistence;
