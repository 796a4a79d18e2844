//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that the platform SDK adapters and the
//! caller-facing event sinks must implement.

pub mod auth_event;
pub mod auth_provider;
pub mod error;
pub mod poll_observer;
pub mod url_opener;
pub mod voting_provider;
