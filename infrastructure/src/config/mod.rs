//! Configuration file loading for pollcast
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `POLLCAST_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./pollcast.toml` or `./.pollcast.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/pollcast/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAuthConfig, FileConfig, FilePollConfig, FileSimulationConfig,
};
pub use loader::ConfigLoader;
