//! Shared trip model and provider payload parsing.
//!
//! This crate owns the wire representation used by both `server` and `client`:
//! coordinates, route results, the signed-in user record and the JSON error
//! body. It also holds the pure conversions applied to geocoding and routing
//! provider responses, so both sides agree on reprojection and display
//! formatting.

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// ERRORS
// =============================================================================

/// Error returned when a provider payload cannot be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The body is not the JSON shape we expect.
    #[error("malformed provider payload: {0}")]
    Json(#[from] serde_json::Error),
    /// A coordinate field could not be read as a finite number.
    #[error("invalid coordinate value: {0}")]
    InvalidCoordinate(String),
    /// The CORS relay answered without the provider body.
    #[error("relay response carried no provider contents")]
    MissingRelayContents,
    /// The routing response carried no route feature.
    #[error("routing response contained no route")]
    NoRoute,
}

/// Machine-readable failure class carried in [`ErrorBody`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The geocoder answered with zero matches.
    GeocodeNotFound,
    /// The geocoder could not be reached or returned garbage.
    GeocodeFetchFailure,
    /// The routing service could not be reached or returned garbage.
    RouteFetchFailure,
    /// The server lacks credentials for the requested provider.
    NotConfigured,
    /// The request itself was malformed.
    BadRequest,
}

/// JSON error body returned by every `/api` endpoint on failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

// =============================================================================
// DOMAIN TYPES
// =============================================================================

/// A geographic coordinate in degrees, display order (latitude first).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build from a provider pair in `[lng, lat]` order.
    #[must_use]
    pub fn from_lng_lat(lng: f64, lat: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and inside WGS84 bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// `"lng,lat"` as routing providers expect it in query strings.
    #[must_use]
    pub fn to_lng_lat_param(&self) -> String {
        format!("{},{}", self.lng, self.lat)
    }
}

/// A computed driving route ready for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Polyline vertices in display order.
    pub path: Vec<LatLng>,
    /// Distance in kilometers, two decimals (e.g. `"12.35"`).
    pub distance_km: String,
    /// Duration label (e.g. `"1h 1m"`).
    pub duration: String,
}

/// Profile of the signed-in user, as mirrored to the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Display name from the identity provider.
    pub name: String,
    /// Email address from the identity provider.
    pub email: String,
    /// Profile photo URL, if the provider has one.
    pub photo_url: Option<String>,
}

// =============================================================================
// FORMATTING
// =============================================================================

/// Meters to kilometers with two decimals, rounding half up on the hundredth.
///
/// Rounds on the scaled value so `12345` m gives `"12.35"` rather than the
/// binary-float artifact `"12.34"`.
#[must_use]
pub fn format_distance_km(meters: f64) -> String {
    let hundredths = (meters.max(0.0) / 10.0).round();
    format!("{:.2}", hundredths / 100.0)
}

/// Seconds to an `"{h}h {m}m"` label. Seconds below a full minute are dropped.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(seconds: f64) -> String {
    let total_minutes = (seconds.max(0.0) / 60.0).floor() as u64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    format!("{hours}h {minutes}m")
}

/// Swap provider `[lng, lat, ..]` vertices into display-order [`LatLng`]s.
///
/// # Errors
///
/// Returns [`ParseError::InvalidCoordinate`] when a vertex has fewer than two
/// components.
pub fn reproject(coordinates: &[Vec<f64>]) -> Result<Vec<LatLng>, ParseError> {
    coordinates
        .iter()
        .map(|vertex| match vertex.as_slice() {
            [lng, lat, ..] => Ok(LatLng::from_lng_lat(*lng, *lat)),
            other => Err(ParseError::InvalidCoordinate(format!("{other:?}"))),
        })
        .collect()
}

// =============================================================================
// GEOCODING PAYLOADS
// =============================================================================

/// Nominatim encodes coordinates as decimal strings; some mirrors use numbers.
fn deserialize_degrees<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct PlaceCandidate {
    #[serde(deserialize_with = "deserialize_degrees")]
    lat: String,
    #[serde(deserialize_with = "deserialize_degrees")]
    lon: String,
}

#[derive(Debug, Deserialize)]
struct RelayEnvelope {
    #[serde(default)]
    contents: Option<String>,
}

fn parse_degrees(raw: &str) -> Result<f64, ParseError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidCoordinate(raw.to_owned()))
}

/// Unwrap a CORS-relay `{"contents": "<json text>"}` envelope.
///
/// # Errors
///
/// Returns [`ParseError::Json`] if the envelope is malformed, and
/// [`ParseError::MissingRelayContents`] when `contents` is missing or null,
/// which is how the relay reports that it could not reach the provider.
pub fn unwrap_relay_envelope(body: &str) -> Result<String, ParseError> {
    let envelope: RelayEnvelope = serde_json::from_str(body)?;
    envelope.contents.ok_or(ParseError::MissingRelayContents)
}

/// Parse a place-search result list, keeping only the first candidate.
///
/// Returns `Ok(None)` when the provider found nothing.
///
/// # Errors
///
/// Returns an error if the body is not a candidate list or the first
/// candidate's coordinates are not numbers.
pub fn parse_place_search(body: &str) -> Result<Option<LatLng>, ParseError> {
    let candidates: Vec<PlaceCandidate> = serde_json::from_str(body)?;
    let Some(first) = candidates.first() else {
        return Ok(None);
    };
    let lat = parse_degrees(&first.lat)?;
    let lng = parse_degrees(&first.lon)?;
    Ok(Some(LatLng::new(lat, lng)))
}

// =============================================================================
// ROUTING PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize)]
struct DirectionsCollection {
    #[serde(default)]
    features: Vec<DirectionsFeature>,
}

#[derive(Debug, Deserialize)]
struct DirectionsFeature {
    geometry: DirectionsGeometry,
    properties: DirectionsProperties,
}

#[derive(Debug, Deserialize)]
struct DirectionsGeometry {
    coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct DirectionsProperties {
    #[serde(default)]
    summary: DirectionsSummary,
}

/// Zero-length routes omit both fields.
#[derive(Debug, Default, Deserialize)]
struct DirectionsSummary {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

/// Parse a GeoJSON directions response into a display-ready [`RouteResult`].
///
/// # Errors
///
/// Returns [`ParseError::NoRoute`] when there is no feature, or a JSON /
/// coordinate error when the payload is malformed.
pub fn parse_directions(body: &str) -> Result<RouteResult, ParseError> {
    let collection: DirectionsCollection = serde_json::from_str(body)?;
    let feature = collection.features.into_iter().next().ok_or(ParseError::NoRoute)?;
    let path = reproject(&feature.geometry.coordinates)?;
    let summary = feature.properties.summary;
    Ok(RouteResult {
        path,
        distance_km: format_distance_km(summary.distance),
        duration: format_duration(summary.duration),
    })
}
