//! Route guard that decides whether a page may render for the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is wrapped in exactly one `SessionGate`. Protected pages send
//! signed-out visitors to `/login`; public-only pages send signed-in users to
//! `/map`. While the session check is pending nothing but a loading
//! placeholder is shown.

#[cfg(test)]
#[path = "session_gate_test.rs"]
mod session_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, SessionSource, SessionState};

pub const LOGIN_PATH: &str = "/login";
pub const MAP_PATH: &str = "/map";

/// Who a page is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAccess {
    /// Only signed-in users, e.g. the map.
    Protected,
    /// Only signed-out visitors, e.g. the login screen.
    PublicOnly,
}

/// Result of evaluating the gate once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Render,
    Loading,
    Redirect(&'static str),
}

/// Decide the single outcome for `state` on a page with `access`.
pub fn gate_outcome(state: &SessionState, access: PageAccess) -> GateOutcome {
    match (state, access) {
        (SessionState::Loading, _) => GateOutcome::Loading,
        (SessionState::SignedIn(_), PageAccess::Protected) | (SessionState::SignedOut, PageAccess::PublicOnly) => {
            GateOutcome::Render
        }
        (SessionState::SignedOut, PageAccess::Protected) => GateOutcome::Redirect(LOGIN_PATH),
        (SessionState::SignedIn(_), PageAccess::PublicOnly) => GateOutcome::Redirect(MAP_PATH),
    }
}

/// Evaluate the gate against any session source.
pub fn evaluate_gate(source: &impl SessionSource, access: PageAccess) -> GateOutcome {
    gate_outcome(&source.current_state(), access)
}

/// Wraps page content and renders it only when the gate allows.
#[component]
pub fn SessionGate(access: PageAccess, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let outcome = Memo::new(move |_| evaluate_gate(&auth, access));
    let navigate = use_navigate();

    Effect::new(move || {
        if let GateOutcome::Redirect(path) = outcome.get() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match outcome.get() {
        GateOutcome::Render => children().into_any(),
        GateOutcome::Loading => view! { <div class="gate-loading">"Loading..."</div> }.into_any(),
        GateOutcome::Redirect(_) => ().into_any(),
    }
}
