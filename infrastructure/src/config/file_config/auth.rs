//! Authentication configuration from TOML (`[auth]` section)

use pollcast_domain::default_scopes;
use serde::{Deserialize, Serialize};

/// Raw authentication configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// Scopes requested during login
    pub scopes: Vec<String>,
    /// Open the confirmation URL as soon as it is known
    pub auto_open_browser: bool,
    /// Milliseconds between login status queries
    pub poll_interval_ms: u64,
}

impl Default for FileAuthConfig {
    fn default() -> Self {
        Self {
            scopes: default_scopes(),
            auto_open_browser: true,
            poll_interval_ms: 500,
        }
    }
}
