//! # Auth Slice
//!
//! Login-gate state and its transitions.

/// Authentication state slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_logged_in: bool,
    pub username: String,
    pub loading: bool,
}

impl AuthState {
    /// A login attempt has started.
    pub fn login_start(&mut self) {
        self.loading = true;
    }

    /// The login attempt succeeded.
    pub fn login_success(&mut self, username: impl Into<String>) {
        self.is_logged_in = true;
        self.username = username.into();
        self.loading = false;
    }

    /// The login attempt failed.
    pub fn login_failure(&mut self) {
        self.loading = false;
    }

    /// Drop the session.
    pub fn logout(&mut self) {
        self.is_logged_in = false;
        self.username.clear();
    }
}
