//! Permission scopes

/// Scope required to create, end and delete polls.
pub const MANAGE_POLLS_SCOPE: &str = "channel:manage:polls";

/// Scope required to read poll state.
pub const READ_POLLS_SCOPE: &str = "channel:read:polls";

/// Scopes requested when no explicit list is configured.
pub fn default_scopes() -> Vec<String> {
    vec![MANAGE_POLLS_SCOPE.to_string(), READ_POLLS_SCOPE.to_string()]
}
