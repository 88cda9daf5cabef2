//! Header with the signed-in user's greeting and the sign-out control.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn UserHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user = move || auth.with(|s| s.user.clone());

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            // The session gate sends us to /login once the user is gone.
            auth.update(AuthState::sign_out);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    };

    view! {
        <header class="user-header">
            <div class="user-header__identity">
                <p class="user-header__greeting">
                    {move || format!("Hello, {}", user().map(|u| u.name).unwrap_or_default())}
                </p>
                <p class="user-header__email">{move || user().map(|u| u.email).unwrap_or_default()}</p>
            </div>
            <div class="user-header__actions">
                <button class="user-header__logout" title="Sign out" on:click=on_sign_out>
                    "Sign out"
                </button>
                {move || {
                    user()
                        .and_then(|u| u.photo_url)
                        .map(|src| view! { <img class="user-header__photo" src=src alt="Profile"/> })
                }}
            </div>
        </header>
    }
}
