//! Simulated poll service

use super::SimulatedPlatform;
use async_trait::async_trait;
use pollcast_application::{PollHandle, ProviderError, VotingProvider};
use pollcast_domain::{ChoiceTally, PollDefinition, PollSnapshot, PollStatus};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct PollState {
    status: PollStatus,
    tallies: Vec<ChoiceTally>,
    ticks: u64,
}

/// A poll hosted by the simulated platform
pub struct SimulatedPoll {
    duration: Duration,
    started: Instant,
    votes_per_tick: u64,
    state: Mutex<PollState>,
}

impl SimulatedPoll {
    fn new(definition: &PollDefinition, votes_per_tick: u64) -> Self {
        Self {
            duration: Duration::from_secs(u64::from(definition.duration_secs)),
            started: Instant::now(),
            votes_per_tick,
            state: Mutex::new(PollState {
                status: PollStatus::Active,
                tallies: ChoiceTally::zeroed(&definition.choices),
                ticks: 0,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, PollState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move the poll to `status` if it is still running
    fn end(&self, status: PollStatus) {
        let mut state = self.state();
        if state.status.is_active() {
            state.status = status;
        }
    }
}

impl PollState {
    /// Spread votes round-robin, with the first choice slightly favored
    fn cast_votes(&mut self, votes: u64) {
        let choices = self.tallies.len() as u64;
        if choices == 0 {
            return;
        }
        for k in 0..votes {
            let index = ((self.ticks + k) % choices) as usize;
            self.tallies[index].votes += 1;
        }
        if self.ticks % 2 == 0 {
            self.tallies[0].votes += 1;
        }
        self.ticks += 1;
    }
}

#[async_trait]
impl PollHandle for SimulatedPoll {
    async fn snapshot(&self) -> Result<Option<PollSnapshot>, ProviderError> {
        let mut state = self.state();
        if state.status.is_active() {
            if self.started.elapsed() >= self.duration {
                state.status = PollStatus::Completed;
            } else {
                state.cast_votes(self.votes_per_tick);
            }
        }
        Ok(Some(PollSnapshot::new(state.status, state.tallies.clone())))
    }

    async fn finish(&self) -> Result<(), ProviderError> {
        self.end(PollStatus::Terminated);
        Ok(())
    }

    async fn abort(&self) -> Result<(), ProviderError> {
        self.end(PollStatus::Archived);
        Ok(())
    }
}

#[async_trait]
impl VotingProvider for SimulatedPlatform {
    async fn create_poll(
        &self,
        definition: &PollDefinition,
    ) -> Result<Arc<dyn PollHandle>, ProviderError> {
        if !self.is_logged_in() {
            return Err(ProviderError::RequestFailed("not logged in".to_string()));
        }
        if definition.choices.len() < 2 {
            return Err(ProviderError::RequestFailed(
                "a poll needs at least 2 choices".to_string(),
            ));
        }

        debug!("Simulated poll '{}' created", definition.title);
        Ok(Arc::new(SimulatedPoll::new(
            definition,
            self.settings.votes_per_tick,
        )))
    }
}
