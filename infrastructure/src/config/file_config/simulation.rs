//! Simulated platform configuration from TOML (`[simulation]` section)

use serde::{Deserialize, Serialize};

/// Raw simulation configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulationConfig {
    /// Status queries spent waiting before the simulated user confirms
    pub confirm_after_queries: u32,
    /// Votes cast between two snapshots
    pub votes_per_tick: u64,
    /// Confirmation URL handed out by the simulated identity service
    pub verification_url: String,
}

impl Default for FileSimulationConfig {
    fn default() -> Self {
        Self {
            confirm_after_queries: 3,
            votes_per_tick: 2,
            verification_url: "https://id.pollcast.invalid/activate".to_string(),
        }
    }
}
