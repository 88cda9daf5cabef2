//! Root component, document shell and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the auth signal, asks the server who is signed in, and maps
//! URLs to pages. Each page is wrapped in a `SessionGate` so rendering depends
//! only on the server-verified session.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::session_gate::{MAP_PATH, PageAccess, SessionGate};
use crate::pages::login::LoginPage;
use crate::pages::map::MapPage;
use crate::state::auth::AuthState;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.3/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.3/dist/leaflet.js";

/// HTML document wrapper rendered on the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=LEAFLET_CSS/>
                <script src=LEAFLET_JS></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        if user.is_none() {
            log::debug!("no active session");
        }
        auth.update(|s| s.resolve(user));
    });

    view! {
        <Title text="Waypoint"/>
        <Router>
            <main>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=MAP_PATH/> }/>
                    <Route
                        path=path!("/login")
                        view=|| {
                            view! {
                                <SessionGate access=PageAccess::PublicOnly>
                                    <LoginPage/>
                                </SessionGate>
                            }
                        }
                    />
                    <Route
                        path=path!("/map")
                        view=|| {
                            view! {
                                <SessionGate access=PageAccess::Protected>
                                    <MapPage/>
                                </SessionGate>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
