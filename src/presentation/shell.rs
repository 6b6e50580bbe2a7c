//! Admin shell: the authentication gate and navigation chrome.
//!
//! The gate is a single boolean: a shell only exists for a present session.
//! There are no authorization rules beyond that. The shell knows nothing of
//! the form core; it reads the identity collaborator and lays out
//! navigation.

use std::sync::Arc;

use crate::application::gateways::IdentityProvider;
use crate::application::session::Session;
use crate::config::EditorSettings;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/admin/dashboard", "Dashboard"),
    ("/admin/posts", "Posts"),
];

/// Outcome of attempting to enter the admin area.
pub enum ShellGate {
    Admitted(AdminShell),
    SignedOut,
}

/// Gate-keep entry: acquire a session and construct the shell around it,
/// or report that no user is signed in.
pub fn enter(identity: Arc<dyn IdentityProvider>, settings: &EditorSettings) -> ShellGate {
    match Session::acquire(identity.as_ref()) {
        Some(session) => ShellGate::Admitted(AdminShell {
            session,
            identity,
            sign_out_redirect: settings.sign_out_redirect.clone(),
        }),
        None => ShellGate::SignedOut,
    }
}

pub struct AdminShell {
    session: Session,
    identity: Arc<dyn IdentityProvider>,
    sign_out_redirect: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    pub label: String,
    pub href: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellChrome {
    pub greeting: String,
    pub navigation: Vec<NavItemView>,
}

impl AdminShell {
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Navigation and greeting for the given active path.
    pub fn chrome(&self, active_path: &str) -> ShellChrome {
        let navigation = NAV_ITEMS
            .iter()
            .map(|(href, label)| NavItemView {
                label: (*label).to_string(),
                href: (*href).to_string(),
                is_active: *href == active_path,
            })
            .collect();

        ShellChrome {
            greeting: format!("Welcome, {}", self.session.display_name()),
            navigation,
        }
    }

    /// Sign out and release the session; the shell is finished afterwards.
    pub fn sign_out(self) {
        self.session
            .release(self.identity.as_ref(), &self.sign_out_redirect);
    }
}
