//! Launch routing data.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::persistence::{load_json_or_default, save_json};

pub const REMOTE_LINK_FILENAME: &str = "remote.json";

/// Where the app goes after launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchDestination {
    RemoteContent { link: String },
    GameTabBar,
}

/// Outcome of the launch check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchDecision {
    pub destination: LaunchDestination,
    /// True when a stored link was used without contacting the endpoint.
    pub was_token_preloaded: bool,
}

/// Access token and link remembered from an earlier launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteLink {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub remote_link: Option<String>,
}

impl RemoteLink {
    pub fn load(path: &Path) -> Self {
        load_json_or_default(path)
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        save_json(path, self)
    }

    pub fn has_stored_token(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn clear_all(&mut self) {
        self.access_token = None;
        self.remote_link = None;
    }
}
