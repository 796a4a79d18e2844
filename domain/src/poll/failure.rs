//! Poll failure taxonomy
//!
//! Every failure is reported through the same [`PollResult`](super::result::PollResult)
//! channel as success; the `Display` text becomes the result's `error` field.

use super::status::PollStatus;
use thiserror::Error;

/// Reasons a poll did not end in a successful result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollFailure {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Missing required scope: {0}")]
    PermissionDenied(String),

    #[error("A poll is already active")]
    AlreadySessionActive,

    #[error("Failed to create poll: {0}")]
    CreationFailed(String),

    #[error("Poll was deleted")]
    SessionAborted,

    #[error("Poll ended with status {0}")]
    NonCompletionTerminal(PollStatus),
}
