//! Choice tallies

use serde::{Deserialize, Serialize};

/// A poll choice paired with its current vote count
///
/// Tallies are always kept in the order the choices were supplied when the
/// poll was created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoiceTally {
    pub title: String,
    pub votes: u64,
}

impl ChoiceTally {
    pub fn new(title: impl Into<String>, votes: u64) -> Self {
        Self {
            title: title.into(),
            votes,
        }
    }

    /// Zero-vote tallies for a list of choice titles, preserving order
    pub fn zeroed<S: AsRef<str>>(choices: &[S]) -> Vec<Self> {
        choices
            .iter()
            .map(|title| Self::new(title.as_ref(), 0))
            .collect()
    }
}
