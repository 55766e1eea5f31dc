//! Session settings parsed from vaultwatch.toml
//!
//! The settings file belongs to vaultwatch itself; it is never the
//! supervised application's configuration. CLI flags override file
//! values, and the file is optional — a session can be assembled
//! entirely from flags.
//!
//! ```toml
//! debounce_secs = 60
//! vaults = ["/home/user/notes", "/home/user/journal"]
//!
//! [app]
//! command = "obsidian"
//! args = []
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

fn default_debounce_secs() -> u64 {
    60
}

/// Supervised application launch description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSection {
    /// Program to launch and supervise
    #[serde(default)]
    pub command: Option<String>,

    /// Arguments passed to the program
    #[serde(default)]
    pub args: Vec<String>,
}

/// Session settings for a vaultwatch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Required silence after the last file event before a sync fires
    #[serde(default = "default_debounce_secs")]
    pub debounce_secs: u64,

    /// Vault root directories, in sync order
    #[serde(default)]
    pub vaults: Vec<PathBuf>,

    /// Supervised application
    #[serde(default)]
    pub app: AppSection,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_secs: default_debounce_secs(),
            vaults: Vec::new(),
            app: AppSection::default(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }

    /// Load settings from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationMissing`] if the file does not
    /// exist, or a TOML error if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigurationMissing {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The debounce window as a [`Duration`].
    pub fn debounce_window(&self) -> Duration {
        Duration::from_secs(self.debounce_secs)
    }
}
