//! Use cases
//!
//! The two coordination loops driven by the caller.

pub mod authenticate;
pub mod run_poll;
pub(crate) mod shared;
