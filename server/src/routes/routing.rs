//! Route-workflow endpoints: place resolution and driving directions.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is answered with a `trip::ErrorBody` so the browser can pick
//! the right alert. Provider detail is logged here and never forwarded.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use trip::{ErrorBody, ErrorCode, LatLng, RouteResult};

use super::auth::AuthUser;
use crate::services::directions::DirectionsError;
use crate::services::geocode::GeocodeError;
use crate::state::AppState;

/// Error half of every handler in this module.
pub type ApiFailure = (StatusCode, Json<ErrorBody>);

fn failure(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> ApiFailure {
    (status, Json(ErrorBody::new(code, message)))
}

pub(crate) fn geocode_failure(err: &GeocodeError) -> ApiFailure {
    match err {
        GeocodeError::NotFound(place) => {
            failure(StatusCode::NOT_FOUND, ErrorCode::GeocodeNotFound, format!("Location not found: {place}"))
        }
        GeocodeError::Fetch(_) => {
            failure(StatusCode::BAD_GATEWAY, ErrorCode::GeocodeFetchFailure, "Failed to fetch coordinates.")
        }
    }
}

pub(crate) fn directions_failure(_err: &DirectionsError) -> ApiFailure {
    failure(StatusCode::BAD_GATEWAY, ErrorCode::RouteFetchFailure, "Failed to get route from the routing service.")
}

#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    #[serde(default)]
    q: String,
}

/// `GET /api/geocode?q=<place>`: resolve a place name to its first match.
pub async fn geocode(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<GeocodeQuery>,
) -> Result<Json<LatLng>, ApiFailure> {
    let place = params.q.trim();
    if place.is_empty() {
        return Err(failure(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, "Enter a place to search for."));
    }

    match state.geocoder.resolve_place(place).await {
        Ok(point) => {
            tracing::debug!(%place, lat = point.lat, lng = point.lng, "place resolved");
            Ok(Json(point))
        }
        Err(e) => {
            match &e {
                GeocodeError::NotFound(_) => tracing::info!(%place, "place not found"),
                GeocodeError::Fetch(detail) => tracing::warn!(%place, error = %detail, "geocoding failed"),
            }
            Err(geocode_failure(&e))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    from_lat: f64,
    from_lng: f64,
    to_lat: f64,
    to_lng: f64,
}

impl RouteQuery {
    fn endpoints(&self) -> (LatLng, LatLng) {
        (LatLng::new(self.from_lat, self.from_lng), LatLng::new(self.to_lat, self.to_lng))
    }
}

/// `GET /api/route?from_lat&from_lng&to_lat&to_lng`: compute a driving route.
pub async fn route(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<RouteQuery>,
) -> Result<Json<RouteResult>, ApiFailure> {
    let Some(directions) = &state.directions else {
        return Err(failure(
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::NotConfigured,
            "Routing is not configured on this server.",
        ));
    };

    let (from, to) = params.endpoints();
    if !from.is_valid() || !to.is_valid() {
        return Err(failure(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, "Coordinates out of range."));
    }

    match directions.compute_route(from, to).await {
        Ok(route) => {
            tracing::debug!(
                vertices = route.path.len(),
                distance_km = %route.distance_km,
                duration = %route.duration,
                "route computed"
            );
            Ok(Json(route))
        }
        Err(e) => {
            tracing::warn!(error = %e, "route fetch failed");
            Err(directions_failure(&e))
        }
    }
}

#[cfg(test)]
#[path = "routing_test.rs"]
mod tests;
