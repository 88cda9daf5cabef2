//! From/To place inputs with the search button.

use leptos::prelude::*;

use crate::state::route::RouteState;

#[component]
pub fn TripForm(on_search: Callback<(String, String)>) -> impl IntoView {
    let route = expect_context::<RwSignal<RouteState>>();
    let from = RwSignal::new(String::new());
    let to = RwSignal::new(String::new());
    let searching = move || route.with(|s| s.searching);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if searching() {
            return;
        }
        on_search.run((from.get(), to.get()));
    };

    view! {
        <form class="trip-form" on:submit=on_submit>
            <input
                class="trip-form__input"
                type="text"
                placeholder="From"
                prop:value=move || from.get()
                on:input=move |ev| from.set(event_target_value(&ev))
            />
            <input
                class="trip-form__input"
                type="text"
                placeholder="To"
                prop:value=move || to.get()
                on:input=move |ev| to.set(event_target_value(&ev))
            />
            <button class="trip-form__button" type="submit" disabled=searching>
                {move || if searching() { "Searching..." } else { "Find Route" }}
            </button>
        </form>
    }
}
