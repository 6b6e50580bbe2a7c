//! Explicit session handling for the admin area.
//!
//! A session is acquired once at page entry and carried by value into the
//! presentation shell. Releasing it signs the user out; there is no ambient
//! authentication state anywhere else in the crate.

use tracing::info;

use crate::application::gateways::{IdentityProvider, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
}

impl Session {
    /// Acquire a session for the currently signed-in user, if any.
    pub fn acquire(identity: &dyn IdentityProvider) -> Option<Self> {
        identity.current_user().map(|user| Self { user })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn display_name(&self) -> &str {
        &self.user.display_name
    }

    /// Release the session: sign the user out and redirect. Consumes the
    /// session so it cannot be used afterwards.
    pub fn release(self, identity: &dyn IdentityProvider, redirect_path: &str) {
        info!(user = %self.user.id, redirect = redirect_path, "session released");
        identity.sign_out(redirect_path);
    }
}
