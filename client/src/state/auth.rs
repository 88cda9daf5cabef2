//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server-verified session is the only authority on who is signed in.
//! `AuthState` mirrors it after `/api/auth/me` answers; route guards read it
//! through [`SessionSource`] so tests can substitute their own source.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use trip::SessionUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Nothing is known until the session check completes.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Record the outcome of a session check.
    pub fn resolve(&mut self, user: Option<SessionUser>) {
        self.user = user;
        self.loading = false;
    }

    /// Forget the user after sign-out.
    pub fn sign_out(&mut self) {
        self.resolve(None);
    }
}

/// Tri-state view of the session used by the gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    SignedIn(SessionUser),
    SignedOut,
}

impl From<&AuthState> for SessionState {
    fn from(auth: &AuthState) -> Self {
        match (&auth.user, auth.loading) {
            (_, true) => Self::Loading,
            (Some(user), false) => Self::SignedIn(user.clone()),
            (None, false) => Self::SignedOut,
        }
    }
}

/// Anything that can report the current session state.
pub trait SessionSource {
    fn current_state(&self) -> SessionState;
}

impl SessionSource for AuthState {
    fn current_state(&self) -> SessionState {
        SessionState::from(self)
    }
}

/// Reading through the signal subscribes the caller to auth changes.
impl SessionSource for RwSignal<AuthState> {
    #[allow(clippy::redundant_closure_for_method_calls, clippy::redundant_closure)]
    fn current_state(&self) -> SessionState {
        // A bare `SessionState::from` path pins a single borrow lifetime.
        self.with(|auth| SessionState::from(auth))
    }
}
