//! Map page: pick two points or search two places, then show the driving route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns every async step of the route workflow. State transitions go
//! through `RouteState`, which hands back a request token per step; responses
//! are applied through the same token so a superseded step cannot overwrite
//! newer state.
//!
//! ERROR HANDLING
//! ==============
//! A failure that is still current becomes one browser alert. Stale failures
//! are logged and dropped. Nothing is retried.

use leptos::prelude::*;
use trip::LatLng;

use crate::components::map_view::MapView;
use crate::components::route_summary::RouteSummary;
use crate::components::trip_form::TripForm;
use crate::components::user_header::UserHeader;
use crate::net::api::TripFailure;
use crate::state::auth::AuthState;
use crate::state::route::{RouteRequest, RouteState};

#[component]
pub fn MapPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let route = RwSignal::new(RouteState::default());
    provide_context(route);

    let on_pick = Callback::new(move |point: LatLng| {
        if let Some(request) = route.try_update(|s| s.select_point(point)).flatten() {
            start_route_fetch(auth, route, request);
        }
    });

    let on_search = Callback::new(move |(from, to): (String, String)| {
        start_search(auth, route, from, to);
    });

    view! {
        <div class="map-page">
            <UserHeader/>
            <TripForm on_search=on_search/>
            <MapView on_pick=on_pick/>
            <RouteSummary/>
        </div>
    }
}

/// Show a failure to the user, or hand an expired session back to the gate.
fn report_failure(auth: RwSignal<AuthState>, failure: &TripFailure) {
    if *failure == TripFailure::SignedOut {
        auth.update(AuthState::sign_out);
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        log::warn!("route workflow failure: {failure:?}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&failure.alert_message());
        }
    }
}

fn start_route_fetch(auth: RwSignal<AuthState>, route: RwSignal<RouteState>, request: RouteRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_route(request.from, request.to).await;
        let surfaced = route
            .try_update(|s| match outcome {
                Ok(result) => {
                    if !s.apply_route(request.token, result) {
                        log::debug!("dropping route for superseded points");
                    }
                    None
                }
                Err(failure) => {
                    if s.fail_route(request.token) {
                        Some(failure)
                    } else {
                        log::debug!("dropping route failure for superseded points: {failure:?}");
                        None
                    }
                }
            })
            .flatten();
        if let Some(failure) = surfaced {
            report_failure(auth, &failure);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, route, request);
}

fn start_search(auth: RwSignal<AuthState>, route: RwSignal<RouteState>, from: String, to: String) {
    let Some(token) = route.try_update(RouteState::begin_search) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::geocode;

        let fail = move |failure: TripFailure| {
            if route.try_update(|s| s.fail_search(token)).unwrap_or(false) {
                report_failure(auth, &failure);
            } else {
                log::debug!("dropping failure of superseded search: {failure:?}");
            }
        };

        let start = match geocode(from.trim()).await {
            Ok(point) => point,
            Err(failure) => return fail(failure),
        };
        if !route.with_untracked(|s| s.is_current_search(token)) {
            log::debug!("search superseded before resolving destination");
            return;
        }
        let end = match geocode(to.trim()).await {
            Ok(point) => point,
            Err(failure) => return fail(failure),
        };

        if let Some(request) = route.try_update(|s| s.finish_search(token, start, end)).flatten() {
            start_route_fetch(auth, route, request);
        } else {
            log::debug!("dropping result of superseded search");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, token, from, to);
}
