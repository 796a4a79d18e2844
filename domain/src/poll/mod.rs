//! Poll domain
//!
//! Types describing a single platform-hosted poll and the pure analysis
//! used to classify its final tallies.
//!
//! # Lifecycle
//!
//! ```text
//! PollDefinition ──create──▶ Active ──(duration elapses)──▶ Completed ─▶ success
//!                               │
//!                               ├──(ended early)─────────▶ Terminated ─▶ failure
//!                               └──(deleted / moderated)──▶ other      ─▶ failure
//! ```

pub mod analysis;
pub mod definition;
pub mod failure;
pub mod result;
pub mod status;
pub mod tally;
