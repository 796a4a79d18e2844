//! Authentication provider port
//!
//! Defines the interface to the platform identity service.

use super::error::ProviderError;
use async_trait::async_trait;
use pollcast_domain::PlatformAuthState;
use std::sync::Arc;

/// Resolved authentication info
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthInfo {
    /// URL the user visits to confirm the login
    pub confirmation_uri: String,
}

/// Current state of an outstanding auth-info request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthInfoPoll {
    Pending,
    Ready(AuthInfo),
    Faulted(ProviderError),
}

/// Handle to an auth-info request that resolves in the background
pub trait PendingAuthInfo: Send + Sync {
    fn poll(&self) -> AuthInfoPoll;
}

/// Gateway to the platform identity service
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Start an auth-info request for the given scopes
    ///
    /// Returns immediately; the handle resolves once the platform has
    /// produced a confirmation URL.
    fn request_auth_info(&self, scopes: &[String]) -> Arc<dyn PendingAuthInfo>;

    /// Query the platform login state and granted scopes
    async fn query_state(&self) -> Result<PlatformAuthState, ProviderError>;

    /// Drop the current login
    async fn log_out(&self) -> Result<(), ProviderError>;
}
