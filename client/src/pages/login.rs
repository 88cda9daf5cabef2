//! Login page offering Google sign-in.

use leptos::prelude::*;

/// Server endpoint that starts the Google OAuth redirect.
pub const GOOGLE_SIGN_IN_PATH: &str = "/auth/google";

#[component]
pub fn LoginPage() -> impl IntoView {
    let redirecting = RwSignal::new(false);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome Back"</h1>
                <p class="login-card__subtitle">"Sign in with your Google account to continue"</p>
                <a
                    href=GOOGLE_SIGN_IN_PATH
                    class="login-button"
                    class:login-button--busy=move || redirecting.get()
                    on:click=move |ev| {
                        if redirecting.get() {
                            ev.prevent_default();
                            return;
                        }
                        redirecting.set(true);
                    }
                >
                    {move || if redirecting.get() { "Redirecting..." } else { "Sign in with Google" }}
                </a>
            </div>
        </div>
    }
}
