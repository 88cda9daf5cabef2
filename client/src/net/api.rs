//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Route-workflow calls return [`TripFailure`], one variant per user-visible
//! alert. Transport detail is logged to the console, never shown.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use trip::{ErrorBody, ErrorCode};
use trip::{LatLng, RouteResult, SessionUser};

/// Why a route-workflow call failed, as far as the user is concerned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TripFailure {
    /// The geocoder had no match for this place text.
    LocationNotFound(String),
    /// Geocoding could not be completed.
    GeocodeFetch,
    /// The routing service could not produce a route.
    RouteFetch,
    /// The server no longer recognizes our session.
    SignedOut,
}

impl TripFailure {
    /// Text for the browser alert.
    pub fn alert_message(&self) -> String {
        match self {
            Self::LocationNotFound(place) => format!("Location not found: {place}"),
            Self::GeocodeFetch => "Failed to fetch coordinates.".to_owned(),
            Self::RouteFetch => "Failed to get route from the routing service.".to_owned(),
            Self::SignedOut => "Your session has ended. Please sign in again.".to_owned(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
const STATUS_UNAUTHORIZED: u16 = 401;
#[cfg(any(test, feature = "hydrate"))]
const STATUS_NOT_FOUND: u16 = 404;

#[cfg(any(test, feature = "hydrate"))]
fn geocode_failure(status: u16, body: Option<&ErrorBody>, place: &str) -> TripFailure {
    if status == STATUS_UNAUTHORIZED {
        return TripFailure::SignedOut;
    }
    let not_found = body.map_or(status == STATUS_NOT_FOUND, |b| b.code == ErrorCode::GeocodeNotFound);
    if not_found {
        TripFailure::LocationNotFound(place.to_owned())
    } else {
        TripFailure::GeocodeFetch
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn route_failure(status: u16) -> TripFailure {
    if status == STATUS_UNAUTHORIZED { TripFailure::SignedOut } else { TripFailure::RouteFetch }
}

#[cfg(any(test, feature = "hydrate"))]
fn route_query(from: LatLng, to: LatLng) -> [(&'static str, String); 4] {
    [
        ("from_lat", from.lat.to_string()),
        ("from_lng", from.lng.to_string()),
        ("to_lat", to.lat.to_string()),
        ("to_lng", to.lng.to_string()),
    ]
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Resolve a place name through `GET /api/geocode`.
///
/// # Errors
///
/// Returns [`TripFailure::LocationNotFound`] when nothing matched and
/// [`TripFailure::GeocodeFetch`] for any other failure.
pub async fn geocode(place: &str) -> Result<LatLng, TripFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/geocode")
            .query([("q", place)])
            .send()
            .await
            .map_err(|e| {
                log::warn!("geocode request failed: {e}");
                TripFailure::GeocodeFetch
            })?;
        if !resp.ok() {
            let body = resp.json::<ErrorBody>().await.ok();
            return Err(geocode_failure(resp.status(), body.as_ref(), place));
        }
        resp.json::<LatLng>().await.map_err(|e| {
            log::warn!("geocode response unreadable: {e}");
            TripFailure::GeocodeFetch
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = place;
        Err(TripFailure::GeocodeFetch)
    }
}

/// Fetch a driving route through `GET /api/route`.
///
/// # Errors
///
/// Returns [`TripFailure::RouteFetch`] for any failure other than an expired
/// session.
pub async fn fetch_route(from: LatLng, to: LatLng) -> Result<RouteResult, TripFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/route")
            .query(route_query(from, to))
            .send()
            .await
            .map_err(|e| {
                log::warn!("route request failed: {e}");
                TripFailure::RouteFetch
            })?;
        if !resp.ok() {
            return Err(route_failure(resp.status()));
        }
        resp.json::<RouteResult>().await.map_err(|e| {
            log::warn!("route response unreadable: {e}");
            TripFailure::RouteFetch
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (from, to);
        Err(TripFailure::RouteFetch)
    }
}
