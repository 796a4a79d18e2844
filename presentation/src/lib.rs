//! Presentation layer for pollcast
//!
//! This crate contains the CLI definition and console output formatting.

pub mod cli;
pub mod output;

pub use cli::commands::Cli;
pub use output::formatter::ConsoleFormatter;
