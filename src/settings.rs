//! User preferences (~/.icefish/settings.json).

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::persistence::{load_json_or_default, save_json};

pub const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_true")]
    pub vibration_enabled: bool,
    /// Remote configuration endpoint checked at launch. `None` skips the check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_endpoint: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vibration_enabled: true,
            config_endpoint: None,
        }
    }
}

impl Settings {
    /// Load from `path`; a fresh install (or unreadable file) gets defaults.
    pub fn load(path: &Path) -> Self {
        load_json_or_default(path)
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        save_json(path, self)
    }

    pub fn toggle_vibration(&mut self) -> bool {
        self.vibration_enabled = !self.vibration_enabled;
        self.vibration_enabled
    }
}
