//! Voting provider port
//!
//! Defines the interface for creating and driving platform polls.

use super::error::ProviderError;
use async_trait::async_trait;
use pollcast_domain::{PollDefinition, PollSnapshot};
use std::sync::Arc;

/// Gateway for platform polls
#[async_trait]
pub trait VotingProvider: Send + Sync {
    /// Create a poll on the platform
    async fn create_poll(
        &self,
        definition: &PollDefinition,
    ) -> Result<Arc<dyn PollHandle>, ProviderError>;
}

/// A poll held by the platform
#[async_trait]
pub trait PollHandle: Send + Sync {
    /// Fetch the current state, `None` while the platform has nothing to report yet
    async fn snapshot(&self) -> Result<Option<PollSnapshot>, ProviderError>;

    /// End the poll early, keeping its results
    async fn finish(&self) -> Result<(), ProviderError>;

    /// End the poll early and discard it
    async fn abort(&self) -> Result<(), ProviderError>;
}
