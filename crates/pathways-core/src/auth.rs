//! Authentication gate.
//!
//! An explicit context injected into whatever hosts the core, replacing
//! ambient "logged in" storage. Credentials are mocked: anything non-blank
//! passes.

/// Injected authentication state.
#[derive(Debug, Default, Clone)]
pub struct AuthContext {
    authenticated: bool,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Mock credential check. Succeeds for any non-blank email/password
    /// pair; there is no backend to verify against.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        if email.trim().is_empty() || password.trim().is_empty() {
            log::debug!("login rejected: blank credentials");
            return false;
        }
        self.authenticated = true;
        true
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}
