//! Provider errors

use thiserror::Error;

/// Errors reported by platform providers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}
