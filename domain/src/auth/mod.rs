//! Authentication domain
//!
//! Local authentication status, the platform's own login states and the
//! permission scopes the poll controller depends on.

pub mod scope;
pub mod status;
