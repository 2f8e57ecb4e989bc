#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{User, UserRole};

/// Authentication state tracking the current user and loading status.
///
/// Provided as an `RwSignal` context by `App`; restored from the cached
/// profile on hydration, then refreshed via `/auth/me`.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Admin-only navigation (the users page) keys off this.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == UserRole::Admin)
    }
}
