//! Error type for the game core.

use std::error::Error;
use std::fmt;

/// Failures the core can report.
///
/// Input operations called outside their phase are silent no-ops; only
/// `GameSession::result()` surfaces `InvalidState` to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Operation invoked outside its valid phase.
    InvalidState {
        operation: &'static str,
        phase: &'static str,
    },
    /// No level configuration was supplied (or the catalog has no such id).
    ConfigurationMissing { level_id: Option<u32> },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidState { operation, phase } => {
                write!(f, "`{}` is not valid while the session is {}", operation, phase)
            }
            GameError::ConfigurationMissing { level_id: Some(id) } => {
                write!(f, "no level configuration for level {}", id)
            }
            GameError::ConfigurationMissing { level_id: None } => {
                write!(f, "no level configuration supplied")
            }
        }
    }
}

impl Error for GameError {}
