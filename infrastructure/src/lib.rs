//! Infrastructure layer for pollcast
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod browser;
pub mod config;
pub mod simulation;

// Re-export commonly used types
pub use browser::BrowserUrlOpener;
pub use config::{
    ConfigLoader, ConfigValidationError, FileAuthConfig, FileConfig, FilePollConfig,
    FileSimulationConfig,
};
pub use simulation::{SimulatedPlatform, SimulationSettings};
