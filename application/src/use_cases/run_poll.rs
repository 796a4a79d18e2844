//! Run Poll use case
//!
//! Creates a single platform poll, monitors its tallies until it reaches a
//! terminal status and reports the result.
//!
//! At most one poll is active per controller. The active slot is claimed
//! before the platform is contacted and a result is only ever delivered by
//! whoever removes the poll from that slot, which makes delivery
//! exactly-once even when a stop or delete races the monitoring task.

use crate::config::CoordinatorConfig;
use crate::ports::poll_observer::PollObserver;
use crate::ports::voting_provider::{PollHandle, VotingProvider};
use crate::use_cases::authenticate::AuthorizationState;
use crate::use_cases::shared::{lock, ticker, wait_tick};
use pollcast_domain::{
    ChoiceTally, DEFAULT_DURATION_SECS, PollDefinition, PollFailure, PollResult, PollSnapshot,
    PollStatus, total_votes,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Input for starting a poll
#[derive(Debug, Clone)]
pub struct StartPollInput {
    pub title: String,
    /// Choice titles in display order; two or more are expected but not enforced
    pub choices: Vec<String>,
    /// Clamped up to the platform minimum
    pub duration_secs: u32,
}

impl StartPollInput {
    pub fn new<I, S>(title: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }

    pub fn with_duration(mut self, duration_secs: u32) -> Self {
        self.duration_secs = duration_secs;
        self
    }
}

/// The poll currently owned by the controller
struct ActivePoll {
    id: u64,
    title: String,
    /// `None` while the platform is still creating the poll
    handle: Option<Arc<dyn PollHandle>>,
    /// Latest tallies seen, in choice order
    tallies: Vec<ChoiceTally>,
    observer: Arc<dyn PollObserver>,
    token: CancellationToken,
}

struct Inner {
    provider: Arc<dyn VotingProvider>,
    config: CoordinatorConfig,
    active: Mutex<Option<ActivePoll>>,
    next_id: AtomicU64,
}

/// Controller for a single platform poll at a time
pub struct PollController {
    auth: Arc<dyn AuthorizationState>,
    inner: Arc<Inner>,
}

impl PollController {
    pub fn new(
        provider: Arc<dyn VotingProvider>,
        auth: Arc<dyn AuthorizationState>,
        config: CoordinatorConfig,
    ) -> Self {
        Self {
            auth,
            inner: Arc::new(Inner {
                provider,
                config,
                active: Mutex::new(None),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Start a poll and monitor it in the background
    ///
    /// Returns `None` if the start was rejected; the observer has then already
    /// received a failure result and no poll was created. Otherwise returns
    /// the monitoring task.
    pub fn start_session(
        &self,
        input: StartPollInput,
        observer: Arc<dyn PollObserver>,
    ) -> Option<JoinHandle<()>> {
        if let Err(failure) = self.check_preconditions() {
            warn!("Cannot start poll '{}': {}", input.title, failure);
            observer.on_ended(PollResult::failure(&failure, Vec::new()));
            return None;
        }

        let token = CancellationToken::new();
        let id = {
            let mut active = lock(&self.inner.active);
            if let Some(current) = active.as_ref().map(|p| p.title.clone()) {
                warn!(
                    "Cannot start poll '{}': poll '{}' is still active",
                    input.title, current
                );
                drop(active);
                observer.on_ended(PollResult::failure(
                    &PollFailure::AlreadySessionActive,
                    Vec::new(),
                ));
                return None;
            }
            let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
            *active = Some(ActivePoll {
                id,
                title: input.title.clone(),
                handle: None,
                tallies: ChoiceTally::zeroed(&input.choices),
                observer,
                token: token.clone(),
            });
            id
        };

        let definition = PollDefinition::new(input.title, input.choices, input.duration_secs);
        let inner = Arc::clone(&self.inner);
        Some(tokio::spawn(async move { inner.run(id, definition, token).await }))
    }

    /// End the active poll early, keeping its current tallies
    ///
    /// Returns `false` if no poll was active.
    pub async fn stop_session(&self) -> bool {
        let Some(poll) = self.inner.take_active(None) else {
            warn!("No active poll to stop");
            return false;
        };
        poll.token.cancel();

        match &poll.handle {
            Some(handle) => {
                if let Err(e) = handle.finish().await {
                    error!("Failed to end poll '{}': {}", poll.title, e);
                }
            }
            None => debug!("Poll '{}' stopped before creation finished", poll.title),
        }

        info!("Poll '{}' stopped", poll.title);
        poll.observer.on_ended(PollResult::success(poll.tallies));
        true
    }

    /// Abort and discard the active poll
    ///
    /// Returns `false` if no poll was active.
    pub async fn delete_session(&self) -> bool {
        let Some(poll) = self.inner.take_active(None) else {
            warn!("No active poll to delete");
            return false;
        };
        poll.token.cancel();

        match &poll.handle {
            Some(handle) => {
                if let Err(e) = handle.abort().await {
                    error!("Failed to delete poll '{}': {}", poll.title, e);
                }
            }
            None => debug!("Poll '{}' deleted before creation finished", poll.title),
        }

        info!("Poll '{}' deleted", poll.title);
        poll.observer
            .on_ended(PollResult::failure(&PollFailure::SessionAborted, Vec::new()));
        true
    }

    pub fn is_active(&self) -> bool {
        lock(&self.inner.active).is_some()
    }

    fn check_preconditions(&self) -> Result<(), PollFailure> {
        if !self.auth.is_authenticated() {
            return Err(PollFailure::NotAuthenticated);
        }
        let scope = &self.inner.config.required_poll_scope;
        if !self.auth.contains_scope(scope) {
            return Err(PollFailure::PermissionDenied(scope.clone()));
        }
        Ok(())
    }
}

impl Inner {
    async fn run(&self, id: u64, definition: PollDefinition, token: CancellationToken) {
        info!(
            "Creating poll '{}' with {} choices for {}s",
            definition.title,
            definition.choices.len(),
            definition.duration_secs
        );

        let handle = match self.provider.create_poll(&definition).await {
            Ok(handle) => handle,
            Err(e) => {
                error!("Failed to create poll '{}': {}", definition.title, e);
                let failure = PollFailure::CreationFailed(e.to_string());
                self.complete(id, |_| PollResult::failure(&failure, Vec::new()));
                return;
            }
        };

        let Some(observer) = self.attach(id, &handle) else {
            warn!(
                "Poll '{}' ended before creation finished, discarding it",
                definition.title
            );
            if let Err(e) = handle.abort().await {
                warn!("Failed to discard poll '{}': {}", definition.title, e);
            }
            return;
        };

        let Some(last) = self.monitor(id, &handle, observer.as_ref(), &token).await else {
            return;
        };

        self.complete(id, |tallies| match last.status {
            PollStatus::Completed => PollResult::success(tallies),
            status => PollResult::failure(&PollFailure::NonCompletionTerminal(status), tallies),
        });
    }

    /// Poll snapshots until the poll leaves `Active`.
    ///
    /// Returns the terminal snapshot, or `None` if monitoring ended without a
    /// result (cancelled, superseded or the snapshot fetch failed).
    async fn monitor(
        &self,
        id: u64,
        handle: &Arc<dyn PollHandle>,
        observer: &dyn PollObserver,
        token: &CancellationToken,
    ) -> Option<PollSnapshot> {
        let mut ticker = ticker(self.config.poll_refresh_interval);
        let mut last_reported: Option<u64> = None;

        loop {
            let fetched = tokio::select! {
                biased;
                _ = token.cancelled() => return None,
                fetched = handle.snapshot() => fetched,
            };

            match fetched {
                Ok(Some(snapshot)) => {
                    if !self.record(id, &snapshot.tallies) {
                        return None;
                    }
                    if snapshot.status != PollStatus::Active {
                        return Some(snapshot);
                    }

                    // Only report growth; equal or shrinking totals are flicker
                    let total = total_votes(&snapshot.tallies);
                    if last_reported.is_none_or(|last| total > last) {
                        last_reported = Some(total);
                        observer.on_update(&snapshot.tallies);
                    }
                }
                Ok(None) => debug!("Poll not visible yet"),
                Err(e) => {
                    // The observer is intentionally not told about this ending
                    error!("Failed to read poll state, deleting poll: {}", e);
                    if let Err(e) = handle.abort().await {
                        warn!("Failed to delete poll: {}", e);
                    }
                    self.take_active(Some(id));
                    return None;
                }
            }

            if !wait_tick(&mut ticker, token).await {
                return None;
            }
        }
    }

    /// Store the platform handle, returning the observer if `id` still owns the slot
    fn attach(&self, id: u64, handle: &Arc<dyn PollHandle>) -> Option<Arc<dyn PollObserver>> {
        let mut active = lock(&self.active);
        let poll = active.as_mut().filter(|p| p.id == id)?;
        poll.handle = Some(Arc::clone(handle));
        Some(Arc::clone(&poll.observer))
    }

    /// Store the latest tallies, returning `false` if `id` no longer owns the slot
    fn record(&self, id: u64, tallies: &[ChoiceTally]) -> bool {
        let mut active = lock(&self.active);
        match active.as_mut().filter(|p| p.id == id) {
            Some(poll) => {
                poll.tallies = tallies.to_vec();
                true
            }
            None => false,
        }
    }

    /// Remove the active poll, only if it matches `id` when one is given
    fn take_active(&self, id: Option<u64>) -> Option<ActivePoll> {
        let mut active = lock(&self.active);
        let owned = match (active.as_ref(), id) {
            (Some(poll), Some(id)) => poll.id == id,
            _ => true,
        };
        if owned {
            active.take()
        } else {
            None
        }
    }

    /// Release the slot and deliver the result built from the final tallies
    fn complete(&self, id: u64, result: impl FnOnce(Vec<ChoiceTally>) -> PollResult) {
        let Some(poll) = self.take_active(Some(id)) else {
            return;
        };
        let result = result(poll.tallies);
        if result.success {
            info!("Poll '{}' completed", poll.title);
        } else {
            info!("Poll '{}' ended: {}", poll.title, result.error);
        }
        poll.observer.on_ended(result);
    }
}
