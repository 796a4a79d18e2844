//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod auth;
mod poll;
mod simulation;

pub use auth::FileAuthConfig;
pub use poll::FilePollConfig;
pub use simulation::FileSimulationConfig;

use pollcast_application::CoordinatorConfig;
use pollcast_domain::{MANAGE_POLLS_SCOPE, MIN_DURATION_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration problems worth reporting to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    ZeroInterval(&'static str),

    #[error("auth.scopes does not include channel:manage:polls, polls cannot be created")]
    MissingPollScope,

    #[error("poll.duration_secs {0} is below the minimum of 15s and will be raised")]
    DurationTooShort(u32),

    #[error("poll.choices has {0} entries, at least 2 are needed")]
    TooFewChoices(usize),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Login settings
    pub auth: FileAuthConfig,
    /// Poll settings
    pub poll: FilePollConfig,
    /// Simulated platform settings
    pub simulation: FileSimulationConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    ///
    /// None of these are fatal; the caller decides how to report them.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.auth.poll_interval_ms == 0 {
            issues.push(ConfigValidationError::ZeroInterval("auth.poll_interval_ms"));
        }
        if self.poll.refresh_interval_ms == 0 {
            issues.push(ConfigValidationError::ZeroInterval("poll.refresh_interval_ms"));
        }
        if !self.auth.scopes.iter().any(|s| s == MANAGE_POLLS_SCOPE) {
            issues.push(ConfigValidationError::MissingPollScope);
        }
        if self.poll.duration_secs < MIN_DURATION_SECS {
            issues.push(ConfigValidationError::DurationTooShort(
                self.poll.duration_secs,
            ));
        }
        // An empty list means "ask on the command line"
        if self.poll.choices.len() == 1 {
            issues.push(ConfigValidationError::TooFewChoices(1));
        }

        issues
    }

    /// Build the coordinator settings
    pub fn to_coordinator_config(&self) -> CoordinatorConfig {
        CoordinatorConfig::default()
            .with_scopes(self.auth.scopes.clone())
            .with_auth_poll_interval(Duration::from_millis(self.auth.poll_interval_ms))
            .with_poll_refresh_interval(Duration::from_millis(self.poll.refresh_interval_ms))
    }
}
