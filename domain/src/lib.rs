//! Domain layer for pollcast
//!
//! This crate contains the core types and pure logic shared by the
//! coordinators. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Authentication
//!
//! The platform reports its own login state, which is translated into the
//! local [`AuthenticationStatus`] through a fixed table. Protected operations
//! additionally require a named permission scope.
//!
//! ## Polls
//!
//! A poll is a time-bounded, single-choice vote hosted by the platform.
//! Its choices are tracked as ordered [`ChoiceTally`] entries and a finished
//! poll is reported exactly once as a [`PollResult`].

pub mod auth;
pub mod poll;

// Re-export commonly used types
pub use auth::{
    scope::{MANAGE_POLLS_SCOPE, READ_POLLS_SCOPE, default_scopes},
    status::{AuthenticationStatus, PlatformAuthState, PlatformAuthStatus},
};
pub use poll::{
    analysis::{PollOutcome, all_winners, classify, has_single_winner, is_draw, total_votes},
    definition::{DEFAULT_DURATION_SECS, MIN_DURATION_SECS, PollDefinition},
    failure::PollFailure,
    result::PollResult,
    status::{PollSnapshot, PollStatus},
    tally::ChoiceTally,
};
