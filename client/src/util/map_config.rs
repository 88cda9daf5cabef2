//! Fixed map presentation: initial view, tiles, marker icon and route styling.
//!
//! These values never change at runtime, so they are compile-time constants
//! rather than state. Option objects are built as JSON and handed to Leaflet
//! by `util::leaflet`.

#[cfg(test)]
#[path = "map_config_test.rs"]
mod map_config_test;

use serde::Serialize;
use serde_json::{Value, json};
use trip::LatLng;

/// Where the map opens before any point is chosen.
pub const DEFAULT_CENTER: LatLng = LatLng { lat: 28.6139, lng: 77.209 };
pub const DEFAULT_ZOOM: f64 = 13.0;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

pub const START_POPUP: &str = "Start Point";
pub const END_POPUP: &str = "End Point";

pub const ROUTE_COLOR: &str = "blue";
pub const ROUTE_WEIGHT: u32 = 5;

/// Leaflet `L.icon` options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
    pub icon_url: &'static str,
    pub icon_size: [i32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
    pub shadow_url: &'static str,
    pub shadow_size: [i32; 2],
}

/// Stock Leaflet pin, shared by both markers.
pub const DEFAULT_MARKER_ICON: MarkerIcon = MarkerIcon {
    icon_url: "https://unpkg.com/leaflet@1.9.3/dist/images/marker-icon.png",
    icon_size: [25, 41],
    icon_anchor: [12, 41],
    popup_anchor: [1, -34],
    shadow_url: "https://unpkg.com/leaflet@1.9.3/dist/images/marker-shadow.png",
    shadow_size: [41, 41],
};

impl MarkerIcon {
    pub fn options(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

pub fn tile_options() -> Value {
    json!({ "attribution": TILE_ATTRIBUTION })
}

pub fn route_line_options() -> Value {
    json!({ "color": ROUTE_COLOR, "weight": ROUTE_WEIGHT })
}

/// `[lat, lng]` pair as Leaflet accepts it.
pub fn lat_lng_pair(point: LatLng) -> Value {
    json!([point.lat, point.lng])
}

/// Polyline vertices as nested `[lat, lng]` pairs.
pub fn lat_lng_pairs(path: &[LatLng]) -> Value {
    Value::Array(path.iter().copied().map(lat_lng_pair).collect())
}
