//! Coordinator configuration
//!
//! Infrastructure builds this from the configuration file; tests build it
//! directly.

mod coordinator_config;

pub use coordinator_config::{CoordinatorConfig, MIN_LOOP_INTERVAL};
