//! Poll status and snapshots

use super::tally::ChoiceTally;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a platform poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PollStatus {
    /// Accepting votes
    Active,
    /// Ran for its full duration
    Completed,
    /// Ended early by the broadcaster
    Terminated,
    /// Ended early and hidden
    Archived,
    /// Removed by moderation
    Moderated,
    /// Rejected by the platform
    Invalid,
}

impl PollStatus {
    /// Platform literal for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            PollStatus::Active => "ACTIVE",
            PollStatus::Completed => "COMPLETED",
            PollStatus::Terminated => "TERMINATED",
            PollStatus::Archived => "ARCHIVED",
            PollStatus::Moderated => "MODERATED",
            PollStatus::Invalid => "INVALID",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PollStatus::Active)
    }
}

impl fmt::Display for PollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point-in-time view of a platform poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSnapshot {
    pub status: PollStatus,
    pub tallies: Vec<ChoiceTally>,
}

impl PollSnapshot {
    pub fn new(status: PollStatus, tallies: Vec<ChoiceTally>) -> Self {
        Self { status, tallies }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_literals() {
        assert_eq!(PollStatus::Completed.to_string(), "COMPLETED");
        assert_eq!(PollStatus::Terminated.to_string(), "TERMINATED");
        assert!(PollStatus::Active.is_active());
        assert!(!PollStatus::Moderated.is_active());
    }

    #[test]
    fn test_status_serializes_as_platform_literal() {
        let json = serde_json::to_string(&PollStatus::Archived).unwrap();
        assert_eq!(json, "\"ARCHIVED\"");
    }
}
