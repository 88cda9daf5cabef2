//! Leaflet map surface for the route workflow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The map is created once the container is in the DOM and redrawn from
//! `RouteState` whenever it changes. Clicks are forwarded to the page, which
//! owns all state transitions.

use leptos::html::Div;
use leptos::prelude::*;
use trip::LatLng;

use crate::state::route::RouteState;

#[component]
pub fn MapView(on_pick: Callback<LatLng>) -> impl IntoView {
    let route = expect_context::<RwSignal<RouteState>>();
    let container = NodeRef::<Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::leaflet::MapHandle;

        let handle = StoredValue::new_local(None::<MapHandle>);

        Effect::new(move || {
            let (a, b, result) = route.with(|s| (s.point_a, s.point_b, s.result.clone()));
            let Some(el) = container.get() else {
                return;
            };
            handle.update_value(|slot| {
                if slot.is_none() {
                    match MapHandle::mount(&el, on_pick) {
                        Ok(map) => *slot = Some(map),
                        Err(e) => {
                            log::error!("map init failed: {e:?}");
                            return;
                        }
                    }
                }
                if let Some(map) = slot.as_mut() {
                    map.show_points(a, b);
                    map.show_route(result.as_ref());
                }
            });
        });

        on_cleanup(move || {
            let _ = handle.try_update_value(|slot| {
                if let Some(map) = slot.take() {
                    map.destroy();
                }
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (route, on_pick);

    view! { <div class="route-map" node_ref=container></div> }
}
