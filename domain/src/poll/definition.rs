//! Poll definitions

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Shortest duration the platform accepts
pub const MIN_DURATION_SECS: u32 = 15;

/// Duration used when none is requested
pub const DEFAULT_DURATION_SECS: u32 = MIN_DURATION_SECS;

/// Everything the platform needs to create a poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollDefinition {
    pub title: String,
    /// Choice titles in display order
    pub choices: Vec<String>,
    pub duration_secs: u32,
}

impl PollDefinition {
    /// Create a definition, clamping the duration up to [`MIN_DURATION_SECS`]
    ///
    /// ```
    /// use pollcast_domain::PollDefinition;
    ///
    /// let def = PollDefinition::new("Pets?", vec!["Cats".into(), "Dogs".into()], 5);
    /// assert_eq!(def.duration_secs, 15);
    /// ```
    pub fn new(title: impl Into<String>, choices: Vec<String>, duration_secs: u32) -> Self {
        let title = title.into();
        let duration_secs = if duration_secs < MIN_DURATION_SECS {
            warn!(
                "Poll '{}' duration {}s is below the minimum, using {}s",
                title, duration_secs, MIN_DURATION_SECS
            );
            MIN_DURATION_SECS
        } else {
            duration_secs
        };

        Self {
            title,
            choices,
            duration_secs,
        }
    }
}
