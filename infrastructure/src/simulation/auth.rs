//! Simulated identity service

use super::SimulatedPlatform;
use async_trait::async_trait;
use pollcast_application::{AuthInfo, AuthInfoPoll, AuthProvider, PendingAuthInfo, ProviderError};
use pollcast_domain::{PlatformAuthState, PlatformAuthStatus};
use std::sync::{Arc, PoisonError};
use tracing::debug;

#[derive(Debug, Default)]
pub(super) struct LoginState {
    /// Scopes of the outstanding request, if any
    requested: Option<Vec<String>>,
    /// Status queries answered since the request was issued
    queries: u32,
    granted: Vec<String>,
    logged_in: bool,
    next_code: u32,
}

impl LoginState {
    pub(super) fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}

/// Auth-info request that resolved as soon as it was issued
struct ResolvedAuthInfo {
    info: AuthInfo,
}

impl PendingAuthInfo for ResolvedAuthInfo {
    fn poll(&self) -> AuthInfoPoll {
        AuthInfoPoll::Ready(self.info.clone())
    }
}

#[async_trait]
impl AuthProvider for SimulatedPlatform {
    fn request_auth_info(&self, scopes: &[String]) -> Arc<dyn PendingAuthInfo> {
        let mut login = self.login.lock().unwrap_or_else(PoisonError::into_inner);
        login.requested = Some(scopes.to_vec());
        login.queries = 0;
        login.next_code += 1;

        let confirmation_uri = format!(
            "{}?device_code=SIM-{:04}",
            self.settings.verification_url, login.next_code
        );
        debug!("Simulated auth request for {} scopes", scopes.len());
        Arc::new(ResolvedAuthInfo {
            info: AuthInfo { confirmation_uri },
        })
    }

    async fn query_state(&self) -> Result<PlatformAuthState, ProviderError> {
        let mut login = self.login.lock().unwrap_or_else(PoisonError::into_inner);
        if login.logged_in {
            return Ok(PlatformAuthState::new(PlatformAuthStatus::LoggedIn)
                .with_scopes(login.granted.clone()));
        }
        let Some(requested) = login.requested.clone() else {
            return Ok(PlatformAuthState::new(PlatformAuthStatus::LoggedOut));
        };

        login.queries += 1;
        let status = if login.queries == 1 {
            PlatformAuthStatus::Loading
        } else if login.queries <= 1 + self.settings.confirm_after_queries {
            PlatformAuthStatus::WaitingForCode
        } else {
            login.logged_in = true;
            login.granted = requested;
            login.requested = None;
            debug!("Simulated user confirmed the login");
            return Ok(PlatformAuthState::new(PlatformAuthStatus::LoggedIn)
                .with_scopes(login.granted.clone()));
        };

        Ok(PlatformAuthState::new(status))
    }

    async fn log_out(&self) -> Result<(), ProviderError> {
        let mut login = self.login.lock().unwrap_or_else(PoisonError::into_inner);
        let next_code = login.next_code;
        *login = LoginState {
            next_code,
            ..LoginState::default()
        };
        Ok(())
    }
}
