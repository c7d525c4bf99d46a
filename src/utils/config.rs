//! Configuration file for the pinned server.
//!
//! ```toml
//! [versioning]
//! layout = "%Y-%m-%d"
//! header = "Version"
//! query = "v"
//!
//! [server]
//! bind = "127.0.0.1"
//! port = 8080
//! ```
//!
//! Every key is optional.
use std::fs::read_to_string;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::versioning::{Settings, VersionManager};

/// Config object for the pinned server
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Date layout and where requests carry their version
    pub versioning: Settings,
    /// Address to serve on
    pub server: Server,
}

/// Address the HTTP server binds to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Server {
    /// Interface to bind
    pub bind: String,
    /// Port to bind
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load a config file.
    /// # Errors
    /// Will error if unable to read or parse the file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config_str = read_to_string(path)?;
        let conf: Self = toml::from_str(&config_str)?;
        Ok(conf)
    }

    /// An empty version registry using the configured settings.
    #[must_use]
    pub fn manager(&self) -> VersionManager {
        VersionManager::with_settings(self.versioning.clone())
    }
}
