use leptos::prelude::*;

use super::storage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    /// Starting state: no configured passcode means there is nothing to gate.
    pub fn initial(passcode: Option<&str>, session_authenticated: bool) -> Self {
        match passcode {
            None => {
                log::warn!("no passcode configured, the console is not gated");
                AuthState::Authenticated
            }
            Some(_) if session_authenticated => AuthState::Authenticated,
            Some(_) => AuthState::Unauthenticated,
        }
    }

    /// Starting state restored from session storage
    pub fn restore(passcode: Option<&str>, session_key: &str) -> Self {
        Self::initial(passcode, storage::is_session_authenticated(session_key))
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated)
    }
}

/// Exact comparison; surrounding whitespace counts.
pub fn passcode_matches(expected: Option<&str>, entered: &str) -> bool {
    match expected {
        Some(expected) => expected == entered,
        None => true,
    }
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthState not provided")
}

/// Lock the console again
pub fn do_logout(auth: RwSignal<AuthState>, session_key: &str) {
    storage::clear_session(session_key);
    auth.set(AuthState::Unauthenticated);
}
