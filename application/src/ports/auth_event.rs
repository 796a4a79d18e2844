//! Authentication events emitted to the caller
//!
//! Delivery semantics:
//! - `StatusChanged` is edge-triggered: only sent when the status differs
//!   from the previous one.
//! - `ReadyForAuthentication` and `Authenticated` are sent at most once per
//!   validation attempt.

use pollcast_domain::AuthenticationStatus;

/// Events emitted by the AuthenticationCoordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    StatusChanged(AuthenticationStatus),
    /// A confirmation URL is known and can be opened
    ReadyForAuthentication,
    Authenticated,
}
