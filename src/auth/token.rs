//! Placeholder session tokens.
//!
//! Tokens are unsigned and never expire: `fake-jwt-token-<username>`.
//! Verification only checks the prefix. Nothing here is a security boundary.

pub const TOKEN_PREFIX: &str = "fake-jwt-token";

/// Issue a token for a user that has just logged in.
pub fn issue_token(username: &str) -> String {
    format!("{}-{}", TOKEN_PREFIX, username)
}

/// Whether a presented token looks like one this service issued.
pub fn is_recognised_token(token: &str) -> bool {
    token.starts_with(TOKEN_PREFIX)
}
