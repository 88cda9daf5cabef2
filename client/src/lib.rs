//! Waypoint browser client.
//!
//! ARCHITECTURE
//! ============
//! Rendered on the server through `leptos_axum` (`ssr`) and hydrated in the
//! browser (`hydrate`). Pages sit behind the session gate; the map page drives
//! the route workflow against the server's `/api` relay.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive runtime to server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
