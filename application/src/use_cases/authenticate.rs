//! Authentication use case
//!
//! Drives the platform login handshake as a two-phase polling loop:
//!
//! 1. **Acquire a confirmation URL**: query the platform state each tick,
//!    issue a single auth-info request while logged out and read its URL
//!    once the platform is waiting for the user.
//! 2. **Wait for confirmation**: keep querying until the platform reports
//!    the user as logged in.
//!
//! Each call to [`AuthenticationCoordinator::start_validation`] starts a new
//! attempt and cancels the loop of the previous one. The token is cancelled
//! before the session is reset and every mutation checks it under the session
//! lock, so a superseded loop can never write to the session of its successor.

use crate::config::CoordinatorConfig;
use crate::ports::auth_event::AuthEvent;
use crate::ports::auth_provider::{AuthInfoPoll, AuthProvider, PendingAuthInfo};
use crate::ports::error::ProviderError;
use crate::ports::url_opener::UrlOpener;
use crate::use_cases::shared::{lock, ticker, wait_tick};
use pollcast_domain::{AuthenticationStatus, PlatformAuthState};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Read access to the current authorization, as needed by protected operations
pub trait AuthorizationState: Send + Sync {
    fn is_authenticated(&self) -> bool;

    fn contains_scope(&self, scope: &str) -> bool;
}

/// State of the current login
#[derive(Default)]
struct AuthSession {
    status: AuthenticationStatus,
    pending: Option<Arc<dyn PendingAuthInfo>>,
    confirmation_url: String,
    scopes: Vec<String>,
}

struct Shared {
    provider: Arc<dyn AuthProvider>,
    opener: Arc<dyn UrlOpener>,
    config: CoordinatorConfig,
    events: mpsc::UnboundedSender<AuthEvent>,
    session: Mutex<AuthSession>,
}

/// Coordinator for the platform login handshake
///
/// Emits [`AuthEvent`]s to the channel supplied at construction.
pub struct AuthenticationCoordinator {
    shared: Arc<Shared>,
    running: Mutex<Option<CancellationToken>>,
}

impl AuthenticationCoordinator {
    pub fn new(
        provider: Arc<dyn AuthProvider>,
        opener: Arc<dyn UrlOpener>,
        config: CoordinatorConfig,
        events: mpsc::UnboundedSender<AuthEvent>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                provider,
                opener,
                config,
                events,
                session: Mutex::new(AuthSession::default()),
            }),
            running: Mutex::new(None),
        }
    }

    /// Begin (or restart) the handshake
    ///
    /// The returned task finishes once the attempt reaches `Authenticated` or
    /// `Error`, or when it is cancelled by a restart or [`reset`](Self::reset).
    pub fn start_validation(&self, auto_open_browser: bool) -> JoinHandle<()> {
        let token = CancellationToken::new();
        self.replace_running(Some(token.clone()));
        *lock(&self.shared.session) = AuthSession::default();

        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move { shared.run_validation(auto_open_browser, token).await })
    }

    /// Log out and force the status to `LoggedOut`
    pub async fn reset(&self) {
        self.replace_running(None);

        if let Err(e) = self.shared.provider.log_out().await {
            warn!("Platform log out failed: {}", e);
        }

        let previous = {
            let mut session = lock(&self.shared.session);
            let previous = session.status;
            *session = AuthSession {
                status: AuthenticationStatus::LoggedOut,
                ..AuthSession::default()
            };
            previous
        };

        info!("Logged out");
        if previous != AuthenticationStatus::LoggedOut {
            self.shared
                .emit(AuthEvent::StatusChanged(AuthenticationStatus::LoggedOut));
        }
    }

    /// Open the confirmation URL, if one is known yet
    pub fn open_authentication_url(&self) {
        self.shared.open_authentication_url();
    }

    pub fn status(&self) -> AuthenticationStatus {
        lock(&self.shared.session).status
    }

    /// Confirmation URL, empty until the platform has provided one
    pub fn confirmation_url(&self) -> String {
        lock(&self.shared.session).confirmation_url.clone()
    }

    /// Scopes from the most recent platform status query
    pub fn granted_scopes(&self) -> Vec<String> {
        lock(&self.shared.session).scopes.clone()
    }

    /// Swap the running attempt's token, cancelling the old one
    fn replace_running(&self, token: Option<CancellationToken>) {
        let mut running = lock(&self.running);
        if let Some(previous) = running.take() {
            debug!("Cancelling previous validation loop");
            previous.cancel();
        }
        *running = token;
    }
}

impl AuthorizationState for AuthenticationCoordinator {
    fn is_authenticated(&self) -> bool {
        self.status() == AuthenticationStatus::Authenticated
    }

    fn contains_scope(&self, scope: &str) -> bool {
        lock(&self.shared.session).scopes.iter().any(|s| s == scope)
    }
}

impl Shared {
    async fn run_validation(&self, auto_open_browser: bool, token: CancellationToken) {
        info!("Starting authentication");
        let mut ticker = ticker(self.config.auth_poll_interval);

        // Phase A: acquire the confirmation URL
        let url = loop {
            let Some(status) = self.refresh_status(&token).await else {
                return;
            };

            match status {
                AuthenticationStatus::Authenticated => {
                    info!("Already logged in");
                    self.emit(AuthEvent::Authenticated);
                    return;
                }
                AuthenticationStatus::LoggedOut => self.ensure_auth_request(&token),
                AuthenticationStatus::Waiting => match self.poll_auth_request(&token) {
                    Ok(Some(url)) => break url,
                    Ok(None) => {}
                    Err(e) => {
                        self.fail(&token, e);
                        return;
                    }
                },
                _ => {}
            }

            if !wait_tick(&mut ticker, &token).await {
                debug!("Validation cancelled");
                return;
            }
        };

        if !self.publish_url(&token, url, auto_open_browser) {
            return;
        }

        // Phase B: wait for the user to confirm
        loop {
            if !wait_tick(&mut ticker, &token).await {
                debug!("Validation cancelled");
                return;
            }
            match self.refresh_status(&token).await {
                Some(AuthenticationStatus::Authenticated) => break,
                Some(_) => {}
                None => return,
            }
        }

        info!("Authenticated");
        self.emit(AuthEvent::Authenticated);
    }

    /// Query and record the platform state.
    ///
    /// Returns `None` when the attempt should end (cancelled, superseded or
    /// faulted).
    async fn refresh_status(&self, token: &CancellationToken) -> Option<AuthenticationStatus> {
        let result = tokio::select! {
            biased;
            _ = token.cancelled() => return None,
            result = self.provider.query_state() => result,
        };

        match result {
            Ok(state) => self.observe(token, state),
            Err(e) => {
                self.fail(token, e);
                None
            }
        }
    }

    fn observe(
        &self,
        token: &CancellationToken,
        state: PlatformAuthState,
    ) -> Option<AuthenticationStatus> {
        let status = AuthenticationStatus::from_platform(state.status);
        let changed = {
            let mut session = lock(&self.session);
            if token.is_cancelled() {
                return None;
            }
            session.scopes = state.scopes;
            let changed = session.status != status;
            session.status = status;
            changed
        };

        if changed {
            debug!("Authentication status changed to {}", status);
            self.emit(AuthEvent::StatusChanged(status));
        }
        Some(status)
    }

    fn ensure_auth_request(&self, token: &CancellationToken) {
        if lock(&self.session).pending.is_some() {
            return;
        }

        debug!("Requesting authentication info");
        let request = self.provider.request_auth_info(&self.config.scopes);
        let mut session = lock(&self.session);
        if !token.is_cancelled() {
            session.pending = Some(request);
        }
    }

    /// Read the outstanding request, returning its URL once resolved
    fn poll_auth_request(
        &self,
        token: &CancellationToken,
    ) -> Result<Option<String>, ProviderError> {
        let pending = {
            let session = lock(&self.session);
            if token.is_cancelled() {
                return Ok(None);
            }
            session.pending.clone()
        };
        let Some(pending) = pending else {
            debug!("Platform is waiting but no auth-info request is outstanding");
            return Ok(None);
        };

        match pending.poll() {
            AuthInfoPoll::Pending => Ok(None),
            AuthInfoPoll::Ready(info) => {
                lock(&self.session).pending = None;
                Ok(Some(info.confirmation_uri))
            }
            AuthInfoPoll::Faulted(e) => Err(e),
        }
    }

    fn publish_url(&self, token: &CancellationToken, url: String, auto_open_browser: bool) -> bool {
        {
            let mut session = lock(&self.session);
            if token.is_cancelled() {
                return false;
            }
            session.confirmation_url = url;
        }

        info!("Authentication URL ready");
        if auto_open_browser {
            self.open_authentication_url();
        }
        self.emit(AuthEvent::ReadyForAuthentication);
        true
    }

    fn open_authentication_url(&self) {
        let url = lock(&self.session).confirmation_url.clone();
        if url.is_empty() {
            warn!("Authentication URL is not known yet");
            return;
        }
        self.opener.open_url(&url);
    }

    fn fail(&self, token: &CancellationToken, e: ProviderError) {
        let changed = {
            let mut session = lock(&self.session);
            if token.is_cancelled() {
                return;
            }
            let changed = session.status != AuthenticationStatus::Error;
            session.status = AuthenticationStatus::Error;
            session.pending = None;
            changed
        };

        error!("Authentication provider fault: {}", e);
        if changed {
            self.emit(AuthEvent::StatusChanged(AuthenticationStatus::Error));
        }
    }

    fn emit(&self, event: AuthEvent) {
        // Receiver may be gone if the caller stopped listening
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::auth_provider::AuthInfo;
    use async_trait::async_trait;
    use pollcast_domain::{MANAGE_POLLS_SCOPE, PlatformAuthStatus};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // === Mock implementations ===

    const URL: &str = "https://id.example.test/activate?code=ABCD";

    struct MockPending {
        polls: Mutex<VecDeque<AuthInfoPoll>>,
    }

    impl PendingAuthInfo for MockPending {
        fn poll(&self) -> AuthInfoPoll {
            let mut polls = self.polls.lock().unwrap();
            if polls.len() > 1 {
                polls.pop_front().unwrap()
            } else {
                polls.front().cloned().unwrap_or(AuthInfoPoll::Pending)
            }
        }
    }

    /// Replays scripted query results, repeating the last one forever
    struct MockProvider {
        states: Mutex<VecDeque<Result<PlatformAuthState, ProviderError>>>,
        pending_polls: Vec<AuthInfoPoll>,
        requests: AtomicUsize,
        logouts: AtomicUsize,
    }

    impl MockProvider {
        fn new(states: Vec<Result<PlatformAuthState, ProviderError>>) -> Self {
            Self {
                states: Mutex::new(VecDeque::from(states)),
                pending_polls: vec![AuthInfoPoll::Ready(AuthInfo {
                    confirmation_uri: URL.to_string(),
                })],
                requests: AtomicUsize::new(0),
                logouts: AtomicUsize::new(0),
            }
        }

        fn with_pending_polls(mut self, polls: Vec<AuthInfoPoll>) -> Self {
            self.pending_polls = polls;
            self
        }
    }

    #[async_trait]
    impl AuthProvider for MockProvider {
        fn request_auth_info(&self, _scopes: &[String]) -> Arc<dyn PendingAuthInfo> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Arc::new(MockPending {
                polls: Mutex::new(VecDeque::from(self.pending_polls.clone())),
            })
        }

        async fn query_state(&self) -> Result<PlatformAuthState, ProviderError> {
            let mut states = self.states.lock().unwrap();
            if states.len() > 1 {
                states.pop_front().unwrap()
            } else {
                states
                    .front()
                    .cloned()
                    .unwrap_or_else(|| Ok(state(PlatformAuthStatus::Other)))
            }
        }

        async fn log_out(&self) -> Result<(), ProviderError> {
            self.logouts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
    }

    impl UrlOpener for RecordingOpener {
        fn open_url(&self, url: &str) {
            self.opened.lock().unwrap().push(url.to_string());
        }
    }

    fn state(status: PlatformAuthStatus) -> PlatformAuthState {
        PlatformAuthState::new(status)
    }

    fn logged_in() -> PlatformAuthState {
        state(PlatformAuthStatus::LoggedIn).with_scopes([MANAGE_POLLS_SCOPE])
    }

    fn create_coordinator(
        provider: Arc<MockProvider>,
    ) -> (
        AuthenticationCoordinator,
        Arc<RecordingOpener>,
        mpsc::UnboundedReceiver<AuthEvent>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let opener = Arc::new(RecordingOpener::default());
        let config =
            CoordinatorConfig::default().with_auth_poll_interval(Duration::from_millis(100));
        let coordinator = AuthenticationCoordinator::new(provider, opener.clone(), config, tx);
        (coordinator, opener, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<AuthEvent>) -> Vec<AuthEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_logged_in_short_circuits() {
        let provider = Arc::new(MockProvider::new(vec![Ok(logged_in())]));
        let (coordinator, opener, mut rx) = create_coordinator(provider.clone());

        coordinator.start_validation(true).await.unwrap();

        assert_eq!(
            drain(&mut rx),
            vec![
                AuthEvent::StatusChanged(AuthenticationStatus::Authenticated),
                AuthEvent::Authenticated,
            ]
        );
        assert!(coordinator.is_authenticated());
        assert!(coordinator.contains_scope(MANAGE_POLLS_SCOPE));
        assert!(!coordinator.contains_scope("channel:read:subscriptions"));
        assert_eq!(provider.requests.load(Ordering::SeqCst), 0);
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_handshake() {
        let provider = Arc::new(MockProvider::new(vec![
            Ok(state(PlatformAuthStatus::LoggedOut)),
            Ok(state(PlatformAuthStatus::Loading)),
            Ok(state(PlatformAuthStatus::WaitingForCode)),
            Ok(state(PlatformAuthStatus::WaitingForCode)),
            Ok(state(PlatformAuthStatus::WaitingForCode)),
            Ok(logged_in()),
        ]));
        let (coordinator, opener, mut rx) = create_coordinator(provider.clone());

        coordinator.start_validation(true).await.unwrap();

        assert_eq!(
            drain(&mut rx),
            vec![
                AuthEvent::StatusChanged(AuthenticationStatus::LoggedOut),
                AuthEvent::StatusChanged(AuthenticationStatus::Loading),
                AuthEvent::StatusChanged(AuthenticationStatus::Waiting),
                AuthEvent::ReadyForAuthentication,
                AuthEvent::StatusChanged(AuthenticationStatus::Authenticated),
                AuthEvent::Authenticated,
            ]
        );
        assert_eq!(coordinator.confirmation_url(), URL);
        assert_eq!(*opener.opened.lock().unwrap(), vec![URL.to_string()]);
        assert_eq!(provider.requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auth_request_is_issued_once() {
        let provider = Arc::new(
            MockProvider::new(vec![
                Ok(state(PlatformAuthStatus::LoggedOut)),
                Ok(state(PlatformAuthStatus::LoggedOut)),
                Ok(state(PlatformAuthStatus::LoggedOut)),
                Ok(state(PlatformAuthStatus::WaitingForCode)),
                Ok(state(PlatformAuthStatus::WaitingForCode)),
                Ok(logged_in()),
            ])
            .with_pending_polls(vec![
                AuthInfoPoll::Pending,
                AuthInfoPoll::Ready(AuthInfo {
                    confirmation_uri: URL.to_string(),
                }),
            ]),
        );
        let (coordinator, opener, mut rx) = create_coordinator(provider.clone());

        coordinator.start_validation(false).await.unwrap();

        assert_eq!(provider.requests.load(Ordering::SeqCst), 1);
        assert!(opener.opened.lock().unwrap().is_empty());

        let events = drain(&mut rx);
        let ready = events
            .iter()
            .filter(|e| **e == AuthEvent::ReadyForAuthentication)
            .count();
        let authenticated = events
            .iter()
            .filter(|e| **e == AuthEvent::Authenticated)
            .count();
        assert_eq!(ready, 1);
        assert_eq!(authenticated, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_changed_is_edge_triggered() {
        let provider = Arc::new(MockProvider::new(vec![
            Ok(state(PlatformAuthStatus::Loading)),
            Ok(state(PlatformAuthStatus::Loading)),
            Ok(state(PlatformAuthStatus::Loading)),
            Ok(logged_in()),
        ]));
        let (coordinator, _opener, mut rx) = create_coordinator(provider);

        coordinator.start_validation(false).await.unwrap();

        assert_eq!(
            drain(&mut rx),
            vec![
                AuthEvent::StatusChanged(AuthenticationStatus::Loading),
                AuthEvent::StatusChanged(AuthenticationStatus::Authenticated),
                AuthEvent::Authenticated,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_provider_fault_ends_attempt() {
        let provider = Arc::new(MockProvider::new(vec![
            Ok(state(PlatformAuthStatus::LoggedOut)),
            Err(ProviderError::Configuration("missing client id".into())),
            Ok(logged_in()),
        ]));
        let (coordinator, _opener, mut rx) = create_coordinator(provider);

        coordinator.start_validation(false).await.unwrap();

        assert_eq!(
            drain(&mut rx),
            vec![
                AuthEvent::StatusChanged(AuthenticationStatus::LoggedOut),
                AuthEvent::StatusChanged(AuthenticationStatus::Error),
            ]
        );
        assert_eq!(coordinator.status(), AuthenticationStatus::Error);
        assert!(!coordinator.is_authenticated());

        // No automatic retry
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_fault_while_waiting_for_confirmation() {
        let provider = Arc::new(MockProvider::new(vec![
            Ok(state(PlatformAuthStatus::LoggedOut)),
            Ok(state(PlatformAuthStatus::WaitingForCode)),
            Ok(state(PlatformAuthStatus::WaitingForCode)),
            Err(ProviderError::Transport("connection reset".into())),
            Ok(logged_in()),
        ]));
        let (coordinator, _opener, mut rx) = create_coordinator(provider);

        coordinator.start_validation(false).await.unwrap();

        assert_eq!(
            drain(&mut rx),
            vec![
                AuthEvent::StatusChanged(AuthenticationStatus::LoggedOut),
                AuthEvent::StatusChanged(AuthenticationStatus::Waiting),
                AuthEvent::ReadyForAuthentication,
                AuthEvent::StatusChanged(AuthenticationStatus::Error),
            ]
        );
        assert_eq!(coordinator.status(), AuthenticationStatus::Error);
        assert_eq!(coordinator.confirmation_url(), URL);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_waiting_without_request_keeps_polling() {
        let provider = Arc::new(MockProvider::new(vec![
            Ok(state(PlatformAuthStatus::WaitingForCode)),
            Ok(state(PlatformAuthStatus::WaitingForCode)),
            Ok(state(PlatformAuthStatus::WaitingForCode)),
            Ok(state(PlatformAuthStatus::LoggedOut)),
            Ok(state(PlatformAuthStatus::WaitingForCode)),
            Ok(logged_in()),
        ]));
        let (coordinator, _opener, mut rx) = create_coordinator(provider.clone());

        let handle = coordinator.start_validation(false);
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(provider.requests.load(Ordering::SeqCst), 0);
        assert_eq!(coordinator.status(), AuthenticationStatus::Waiting);
        assert!(coordinator.confirmation_url().is_empty());

        handle.await.unwrap();

        assert_eq!(provider.requests.load(Ordering::SeqCst), 1);
        assert_eq!(
            drain(&mut rx),
            vec![
                AuthEvent::StatusChanged(AuthenticationStatus::Waiting),
                AuthEvent::StatusChanged(AuthenticationStatus::LoggedOut),
                AuthEvent::StatusChanged(AuthenticationStatus::Waiting),
                AuthEvent::ReadyForAuthentication,
                AuthEvent::StatusChanged(AuthenticationStatus::Authenticated),
                AuthEvent::Authenticated,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_still_polls() {
        let provider = Arc::new(MockProvider::new(vec![
            Ok(state(PlatformAuthStatus::Loading)),
            Ok(logged_in()),
        ]));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut config = CoordinatorConfig::default();
        config.auth_poll_interval = Duration::ZERO;
        let opener = Arc::new(RecordingOpener::default());
        let coordinator = AuthenticationCoordinator::new(provider, opener, config, tx);

        coordinator.start_validation(false).await.unwrap();

        assert_eq!(drain(&mut rx).last(), Some(&AuthEvent::Authenticated));
        assert!(coordinator.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_faulted_auth_request_is_provider_fault() {
        let provider = Arc::new(
            MockProvider::new(vec![
                Ok(state(PlatformAuthStatus::LoggedOut)),
                Ok(state(PlatformAuthStatus::WaitingForCode)),
            ])
            .with_pending_polls(vec![AuthInfoPoll::Faulted(ProviderError::Transport(
                "connection reset".into(),
            ))]),
        );
        let (coordinator, _opener, mut rx) = create_coordinator(provider);

        coordinator.start_validation(true).await.unwrap();

        let events = drain(&mut rx);
        assert_eq!(
            events.last(),
            Some(&AuthEvent::StatusChanged(AuthenticationStatus::Error))
        );
        assert!(!events.contains(&AuthEvent::ReadyForAuthentication));
        assert!(coordinator.confirmation_url().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_url_without_url_is_noop() {
        let provider = Arc::new(MockProvider::new(vec![Ok(state(PlatformAuthStatus::Loading))]));
        let (coordinator, opener, _rx) = create_coordinator(provider);

        coordinator.open_authentication_url();

        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_cancels_previous_loop() {
        let provider = Arc::new(MockProvider::new(vec![Ok(state(PlatformAuthStatus::Loading))]));
        let (coordinator, _opener, mut rx) = create_coordinator(provider);

        let first = coordinator.start_validation(false);
        tokio::time::sleep(Duration::from_millis(350)).await;
        let second = coordinator.start_validation(false);

        first.await.unwrap();

        // Each attempt reports its own Loading transition
        tokio::time::sleep(Duration::from_millis(350)).await;
        assert!(!second.is_finished());
        assert_eq!(coordinator.status(), AuthenticationStatus::Loading);
        assert_eq!(
            drain(&mut rx),
            vec![
                AuthEvent::StatusChanged(AuthenticationStatus::Loading),
                AuthEvent::StatusChanged(AuthenticationStatus::Loading),
            ]
        );

        coordinator.reset().await;
        second.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_logs_out() {
        let provider = Arc::new(MockProvider::new(vec![Ok(logged_in())]));
        let (coordinator, _opener, mut rx) = create_coordinator(provider.clone());

        coordinator.start_validation(false).await.unwrap();
        drain(&mut rx);

        coordinator.reset().await;

        assert_eq!(provider.logouts.load(Ordering::SeqCst), 1);
        assert_eq!(coordinator.status(), AuthenticationStatus::LoggedOut);
        assert!(!coordinator.is_authenticated());
        assert!(coordinator.granted_scopes().is_empty());
        assert_eq!(
            drain(&mut rx),
            vec![AuthEvent::StatusChanged(AuthenticationStatus::LoggedOut)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_validation_resets_status() {
        let provider = Arc::new(MockProvider::new(vec![Ok(logged_in())]));
        let (coordinator, _opener, _rx) = create_coordinator(provider);

        coordinator.start_validation(false).await.unwrap();
        assert!(coordinator.is_authenticated());

        let handle = coordinator.start_validation(false);
        assert_eq!(coordinator.status(), AuthenticationStatus::Unknown);
        assert!(coordinator.confirmation_url().is_empty());
        handle.await.unwrap();
        assert!(coordinator.is_authenticated());
    }
}
