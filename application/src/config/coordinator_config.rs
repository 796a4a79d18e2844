//! Runtime settings shared by both coordinators

use pollcast_domain::{MANAGE_POLLS_SCOPE, default_scopes};
use std::time::Duration;

/// Shortest delay either loop will wait between iterations
pub const MIN_LOOP_INTERVAL: Duration = Duration::from_millis(1);

/// Settings for the authentication and poll loops
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatorConfig {
    /// Scopes requested during the authentication handshake
    pub scopes: Vec<String>,
    /// Scope a caller must hold before a poll can be created
    pub required_poll_scope: String,
    /// Delay between platform status queries while authenticating
    pub auth_poll_interval: Duration,
    /// Delay between poll snapshots while a poll is running
    pub poll_refresh_interval: Duration,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            scopes: default_scopes(),
            required_poll_scope: MANAGE_POLLS_SCOPE.to_string(),
            auth_poll_interval: Duration::from_millis(500),
            poll_refresh_interval: Duration::from_secs(1),
        }
    }
}

impl CoordinatorConfig {
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Raised to [`MIN_LOOP_INTERVAL`] if shorter
    pub fn with_auth_poll_interval(mut self, interval: Duration) -> Self {
        self.auth_poll_interval = interval.max(MIN_LOOP_INTERVAL);
        self
    }

    /// Raised to [`MIN_LOOP_INTERVAL`] if shorter
    pub fn with_poll_refresh_interval(mut self, interval: Duration) -> Self {
        self.poll_refresh_interval = interval.max(MIN_LOOP_INTERVAL);
        self
    }
}
