//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the navbar to coordinate login redirects and
//! identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the session token, user, and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub has_token: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(&self) -> bool {
        self.has_token || self.user.is_some()
    }

    /// State after a successful login.
    pub fn login(&mut self) {
        self.has_token = true;
        self.loading = false;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.has_token = false;
        self.loading = false;
    }
}
