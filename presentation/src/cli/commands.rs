//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for pollcast
#[derive(Parser, Debug)]
#[command(name = "pollcast")]
#[command(author, version, about = "Run a live audience poll on a streaming platform")]
#[command(long_about = r#"
pollcast logs in to the platform, runs a single poll and reports the winner.

The process has two steps:
1. Login: open the confirmation URL and approve access
2. Poll: the poll runs for its duration while live tallies are printed

Configuration files are loaded from (in priority order):
1. POLLCAST_* environment variables
2. --config <path>     Explicit config file
3. ./pollcast.toml     Project-level config
4. ~/.config/pollcast/config.toml   Global config

Example:
  pollcast "Cats or dogs?" -c Cats -c Dogs
  pollcast "Next map?" -c Dust -c Inferno -c Mirage --duration 60
  pollcast "Quick check" -c Yes -c No --stop-after 20
"#)]
pub struct Cli {
    /// Poll title (falls back to poll.title from the config)
    pub title: Option<String>,

    /// Poll choice (can be specified multiple times)
    #[arg(short, long = "choice", value_name = "CHOICE")]
    pub choices: Vec<String>,

    /// Poll duration in seconds (minimum 15)
    #[arg(short, long, value_name = "SECS")]
    pub duration: Option<u32>,

    /// End the poll early after this many seconds, keeping its results
    #[arg(long, value_name = "SECS", conflicts_with = "delete_after")]
    pub stop_after: Option<u64>,

    /// Delete the poll after this many seconds, discarding its results
    #[arg(long, value_name = "SECS")]
    pub delete_after: Option<u64>,

    /// Do not open the confirmation URL in a browser
    #[arg(long)]
    pub no_browser: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
