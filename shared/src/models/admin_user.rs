//! Admin Account Model

use serde::{Deserialize, Serialize};

/// Admin credential record
///
/// Passwords are stored in plaintext. This matches the demo deployment this
/// system targets and is not suitable for anything facing the internet;
/// a production build must replace it with a salted hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminUser {
    /// Unique key within the directory
    pub username: String,
    pub password: String,
}
