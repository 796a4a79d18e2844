//! Application layer for pollcast
//!
//! This crate contains the authentication and poll coordinators, the port
//! definitions they drive, and coordinator configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CoordinatorConfig, MIN_LOOP_INTERVAL};
pub use ports::{
    auth_event::AuthEvent,
    auth_provider::{AuthInfo, AuthInfoPoll, AuthProvider, PendingAuthInfo},
    error::ProviderError,
    poll_observer::{ChannelPollObserver, PollEvent, PollObserver},
    url_opener::{NoUrlOpener, UrlOpener},
    voting_provider::{PollHandle, VotingProvider},
};
pub use use_cases::authenticate::{AuthenticationCoordinator, AuthorizationState};
pub use use_cases::run_poll::{PollController, StartPollInput};
