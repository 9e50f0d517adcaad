//! Admin directory and session state
//!
//! Credentials and the login session live in separate slots. The directory
//! must never drop below one record, so a stall cannot lock itself out of
//! its own admin panel.
//!
//! Credentials are compared as plaintext. That is the documented demo
//! contract of this system, not a pattern to copy: anything real swaps this
//! module's comparison for a salted hash.

use crate::storage::{ADMIN_USERS_SLOT, SESSION_SLOT, SlotStore, StorageResult};
use shared::error::{AppError, AppResult};
use shared::models::{AdminUser, Session};

/// Credential set for a fresh install
fn default_admins() -> Vec<AdminUser> {
    vec![AdminUser {
        username: "admin".to_string(),
        password: "123".to_string(),
    }]
}

/// Admin directory backed by the `admin_users` and `session` slots
pub struct AdminDirectory {
    store: SlotStore,
    users: Vec<AdminUser>,
    session: Session,
}

impl AdminDirectory {
    /// Load users and session from their slots.
    ///
    /// A persisted authenticated session is trusted as-is; the referenced
    /// username is not re-checked against the directory.
    pub fn load(store: SlotStore) -> Self {
        let users = store.load_or_default(ADMIN_USERS_SLOT, default_admins);
        let session = store.load_or_default(SESSION_SLOT, Session::logged_out);
        Self {
            store,
            users,
            session,
        }
    }

    pub fn users(&self) -> &[AdminUser] {
        &self.users
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn current_user(&self) -> Option<&str> {
        self.session.current_user.as_deref()
    }

    /// Exact, case-sensitive credential match.
    ///
    /// The boolean result deliberately does not distinguish an unknown user
    /// from a wrong password (no username enumeration). Failure leaves the
    /// session untouched.
    pub fn login(&mut self, username: &str, password: &str) -> StorageResult<bool> {
        let found = self
            .users
            .iter()
            .any(|u| u.username == username && u.password == password);

        if !found {
            tracing::warn!(username, "Login rejected");
            return Ok(false);
        }

        self.session = Session::authenticated(username);
        self.persist_session()?;
        tracing::info!(username, "Admin logged in");
        Ok(true)
    }

    pub fn logout(&mut self) -> StorageResult<()> {
        self.session = Session::logged_out();
        self.persist_session()
    }

    /// Append a new admin. An already-present username is a silent no-op.
    pub fn add_user(&mut self, username: &str, password: &str) -> StorageResult<()> {
        if self.users.iter().any(|u| u.username == username) {
            return Ok(());
        }
        self.users.push(AdminUser {
            username: username.to_string(),
            password: password.to_string(),
        });
        self.persist_users()
    }

    /// Replace the password of the matching record; unknown usernames are a
    /// silent no-op. No history is retained.
    pub fn update_password(&mut self, username: &str, new_password: &str) -> StorageResult<()> {
        if let Some(user) = self.users.iter_mut().find(|u| u.username == username) {
            user.password = new_password.to_string();
        }
        self.persist_users()
    }

    /// Delete an admin account.
    ///
    /// Refused outright when only one record remains, regardless of which
    /// user is targeted. Deleting the currently-authenticated user also
    /// invalidates the session, so it never points at a ghost.
    pub fn delete_user(&mut self, username: &str) -> AppResult<()> {
        if self.users.len() <= 1 {
            return Err(AppError::last_admin());
        }

        let before = self.users.len();
        self.users.retain(|u| u.username != username);
        if self.users.len() == before {
            // Unknown username
            return Ok(());
        }
        self.persist_users()?;

        if self.session.current_user.as_deref() == Some(username) {
            tracing::info!(username, "Deleted the logged-in admin, invalidating session");
            self.session = Session::logged_out();
            self.persist_session()?;
        }
        Ok(())
    }

    fn persist_users(&self) -> StorageResult<()> {
        self.store.write_slot(ADMIN_USERS_SLOT, &self.users)
    }

    fn persist_session(&self) -> StorageResult<()> {
        self.store.write_slot(SESSION_SLOT, &self.session)
    }
}
