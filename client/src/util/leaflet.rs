//! Leaflet bindings and the live map handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaflet is loaded as a global script (`L`) by the page shell. This module
//! declares the handful of `L.*` calls the map page uses and wraps them in
//! [`MapHandle`], which owns the map plus the layers currently drawn on it.

use leptos::prelude::{Callable, Callback};
use serde_json::Value;
use trip::{LatLng, RouteResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::map_config::{
    DEFAULT_CENTER, DEFAULT_MARKER_ICON, DEFAULT_ZOOM, END_POPUP, START_POPUP, TILE_URL, lat_lng_pair,
    lat_lng_pairs, route_line_options, tile_options,
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container: &web_sys::HtmlElement) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMap, layer: &Layer) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    #[wasm_bindgen(js_namespace = L, js_name = Layer)]
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str) -> Layer;

    #[wasm_bindgen(method, js_name = getBounds)]
    fn get_bounds(this: &Layer) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(position: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    fn icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = polyline)]
    fn polyline(path: &JsValue, options: &JsValue) -> Layer;

    pub type MouseEvent;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &MouseEvent) -> JsLatLng;

    pub type JsLatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &JsLatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &JsLatLng) -> f64;
}

fn to_js(value: &Value) -> JsValue {
    js_sys::JSON::parse(&value.to_string()).unwrap_or(JsValue::UNDEFINED)
}

/// A mounted Leaflet map and the layers drawn for the current route state.
pub struct MapHandle {
    map: LeafletMap,
    icon: JsValue,
    markers: Vec<Layer>,
    line: Option<Layer>,
    shown_points: (Option<LatLng>, Option<LatLng>),
    shown_route: Option<RouteResult>,
}

impl MapHandle {
    /// Create the map inside `container`, add tiles and forward clicks to `on_pick`.
    ///
    /// # Errors
    ///
    /// Returns the JavaScript exception if Leaflet is unavailable or the
    /// container is already initialized.
    pub fn mount(container: &web_sys::HtmlElement, on_pick: Callback<LatLng>) -> Result<Self, JsValue> {
        let map = create_map(container)?;
        map.set_view(&to_js(&lat_lng_pair(DEFAULT_CENTER)), DEFAULT_ZOOM);
        tile_layer(TILE_URL, &to_js(&tile_options())).add_to(&map);

        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            let at = ev.latlng();
            on_pick.run(LatLng::new(at.lat(), at.lng()));
        });
        map.on("click", on_click.as_ref().unchecked_ref());
        // The map owns the listener for the rest of its life.
        on_click.forget();

        let marker_icon = icon(&to_js(&DEFAULT_MARKER_ICON.options()));
        Ok(Self { map, icon: marker_icon, markers: Vec::new(), line: None, shown_points: (None, None), shown_route: None })
    }

    /// Draw markers for the selected points, replacing earlier ones.
    pub fn show_points(&mut self, a: Option<LatLng>, b: Option<LatLng>) {
        if self.shown_points == (a, b) {
            return;
        }
        for layer in self.markers.drain(..) {
            self.map.remove_layer(&layer);
        }
        let options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&options, &"icon".into(), &self.icon);
        for (point, label) in [(a, START_POPUP), (b, END_POPUP)] {
            if let Some(point) = point {
                let layer = marker(&to_js(&lat_lng_pair(point)), &options).bind_popup(label).add_to(&self.map);
                self.markers.push(layer);
            }
        }
        self.shown_points = (a, b);
    }

    /// Draw the route polyline and fit the view to it, or remove it.
    pub fn show_route(&mut self, route: Option<&RouteResult>) {
        if self.shown_route.as_ref() == route {
            return;
        }
        if let Some(line) = self.line.take() {
            self.map.remove_layer(&line);
        }
        if let Some(route) = route.filter(|r| !r.path.is_empty()) {
            let line = polyline(&to_js(&lat_lng_pairs(&route.path)), &to_js(&route_line_options())).add_to(&self.map);
            self.map.fit_bounds(&line.get_bounds());
            self.line = Some(line);
        }
        self.shown_route = route.cloned();
    }

    /// Tear down the map and its listeners.
    pub fn destroy(self) {
        self.map.remove();
    }
}
