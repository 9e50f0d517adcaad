//! Admin Session Model

use serde::{Deserialize, Serialize};

/// Transient record of whether, and as whom, an admin is authenticated.
///
/// Persisted independently of the admin directory; on load the flag is
/// trusted as-is, without re-checking that the user still exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub current_user: Option<String>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self {
            is_authenticated: false,
            current_user: None,
        }
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            current_user: Some(username.into()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::logged_out()
    }
}
