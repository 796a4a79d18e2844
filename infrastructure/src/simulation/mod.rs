//! In-process simulated platform
//!
//! Implements both provider ports without any network access. Used by the
//! CLI's offline mode and by integration tests.
//!
//! Login walks `LoggedOut → Loading → WaitingForCode → LoggedIn`, with the
//! simulated user confirming after a configurable number of status queries.
//! Polls gain a deterministic number of votes on every snapshot and
//! complete once their duration has elapsed on the tokio clock.

mod auth;
mod voting;

use crate::config::FileSimulationConfig;
use std::sync::{Mutex, PoisonError};

pub use voting::SimulatedPoll;

/// Tunables for the simulated platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationSettings {
    pub confirm_after_queries: u32,
    pub votes_per_tick: u64,
    pub verification_url: String,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self::from(&FileSimulationConfig::default())
    }
}

impl From<&FileSimulationConfig> for SimulationSettings {
    fn from(config: &FileSimulationConfig) -> Self {
        Self {
            confirm_after_queries: config.confirm_after_queries,
            votes_per_tick: config.votes_per_tick,
            verification_url: config.verification_url.clone(),
        }
    }
}

/// Simulated identity and poll service
pub struct SimulatedPlatform {
    settings: SimulationSettings,
    login: Mutex<auth::LoginState>,
}

impl SimulatedPlatform {
    pub fn new(settings: SimulationSettings) -> Self {
        Self {
            settings,
            login: Mutex::new(auth::LoginState::default()),
        }
    }

    fn is_logged_in(&self) -> bool {
        self.login
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_logged_in()
    }
}
