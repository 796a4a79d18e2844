//! Authentication status types
//!
//! The platform exposes its own login states; the coordinator only ever
//! reasons about the translated [`AuthenticationStatus`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Local authentication status
///
/// Exactly one value is current at any time. `Error` ends a validation
/// attempt (a new one must be started) and `Authenticated` is only left
/// through an explicit logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AuthenticationStatus {
    #[default]
    Unknown,
    Error,
    Loading,
    Waiting,
    LoggedOut,
    Authenticated,
}

impl AuthenticationStatus {
    /// Translate a platform login state.
    ///
    /// ```
    /// use pollcast_domain::{AuthenticationStatus, PlatformAuthStatus};
    ///
    /// assert_eq!(
    ///     AuthenticationStatus::from_platform(PlatformAuthStatus::WaitingForCode),
    ///     AuthenticationStatus::Waiting
    /// );
    /// assert_eq!(
    ///     AuthenticationStatus::from_platform(PlatformAuthStatus::Other),
    ///     AuthenticationStatus::Unknown
    /// );
    /// ```
    pub fn from_platform(status: PlatformAuthStatus) -> Self {
        match status {
            PlatformAuthStatus::LoggedOut => AuthenticationStatus::LoggedOut,
            PlatformAuthStatus::Loading => AuthenticationStatus::Loading,
            PlatformAuthStatus::WaitingForCode => AuthenticationStatus::Waiting,
            PlatformAuthStatus::LoggedIn => AuthenticationStatus::Authenticated,
            PlatformAuthStatus::Other => AuthenticationStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthenticationStatus::Unknown => "unknown",
            AuthenticationStatus::Error => "error",
            AuthenticationStatus::Loading => "loading",
            AuthenticationStatus::Waiting => "waiting",
            AuthenticationStatus::LoggedOut => "logged out",
            AuthenticationStatus::Authenticated => "authenticated",
        }
    }
}

impl fmt::Display for AuthenticationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login state as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformAuthStatus {
    LoggedOut,
    Loading,
    WaitingForCode,
    LoggedIn,
    /// Any state the coordinator does not model
    Other,
}

/// Result of a platform status query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformAuthState {
    pub status: PlatformAuthStatus,
    /// Scopes granted to the current login (empty until logged in)
    pub scopes: Vec<String>,
}

impl PlatformAuthState {
    pub fn new(status: PlatformAuthStatus) -> Self {
        Self {
            status,
            scopes: Vec::new(),
        }
    }

    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }
}
