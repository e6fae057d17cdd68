use std::collections::HashMap;
use subtle::ConstantTimeEq;

/// In-memory username → password table.
#[derive(Clone, Debug, Default)]
pub struct UserDirectory {
    users: HashMap<String, String>,
}

impl UserDirectory {
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    /// True when the user exists and the password matches.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.users.get(username) {
            // Constant-time comparison to prevent timing attacks
            Some(stored) => stored.as_bytes().ct_eq(password.as_bytes()).into(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
