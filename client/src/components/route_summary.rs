//! Distance/duration overlay and the clear control.

#[cfg(test)]
#[path = "route_summary_test.rs"]
mod route_summary_test;

use leptos::prelude::*;
use trip::RouteResult;

use crate::state::route::RouteState;

/// `Distance: 12.35 km, Duration: 1h 1m`.
pub fn summary_line(route: &RouteResult) -> String {
    format!("Distance: {} km, Duration: {}", route.distance_km, route.duration)
}

#[component]
pub fn RouteSummary() -> impl IntoView {
    let route = expect_context::<RwSignal<RouteState>>();
    let has_points = move || route.with(|s| s.point_count() > 0);

    view! {
        <Show when=move || route.with(|s| s.result.is_some())>
            <div class="route-summary">
                {move || route.with(|s| s.result.as_ref().map(summary_line).unwrap_or_default())}
            </div>
        </Show>
        <Show when=has_points>
            <div class="route-points">
                <Show when=move || route.with(|s| s.point_a.is_some())>
                    <button class="route-points__button" on:click=move |_| route.update(RouteState::clear_point_a)>
                        "Remove Start"
                    </button>
                </Show>
                <Show when=move || route.with(|s| s.point_b.is_some())>
                    <button class="route-points__button" on:click=move |_| route.update(RouteState::clear_point_b)>
                        "Remove End"
                    </button>
                </Show>
                <button class="route-points__button" on:click=move |_| route.update(RouteState::clear)>
                    "Clear"
                </button>
            </div>
        </Show>
    }
}
