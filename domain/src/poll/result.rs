//! Poll results

use super::failure::PollFailure;
use super::tally::ChoiceTally;
use serde::{Deserialize, Serialize};

/// Terminal result of a poll
///
/// Produced exactly once per started poll, or synthesized immediately when
/// a precondition rejects the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollResult {
    pub success: bool,
    /// Empty on success
    pub error: String,
    pub tallies: Vec<ChoiceTally>,
}

impl PollResult {
    pub fn success(tallies: Vec<ChoiceTally>) -> Self {
        Self {
            success: true,
            error: String::new(),
            tallies,
        }
    }

    pub fn failure(failure: &PollFailure, tallies: Vec<ChoiceTally>) -> Self {
        Self {
            success: false,
            error: failure.to_string(),
            tallies,
        }
    }
}
