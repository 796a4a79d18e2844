//! Poll configuration from TOML (`[poll]` section)

use pollcast_domain::DEFAULT_DURATION_SECS;
use serde::{Deserialize, Serialize};

/// Raw poll configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePollConfig {
    /// Milliseconds between poll snapshots
    pub refresh_interval_ms: u64,
    pub duration_secs: u32,
    /// Default title when none is given on the command line
    pub title: Option<String>,
    /// Default choices when none are given on the command line
    pub choices: Vec<String>,
}

impl Default for FilePollConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 1000,
            duration_secs: DEFAULT_DURATION_SECS,
            title: None,
            choices: Vec::new(),
        }
    }
}
