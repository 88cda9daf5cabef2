//! Place-name resolution against a Nominatim-compatible search endpoint.
//!
//! DESIGN
//! ======
//! The browser never calls the geocoder itself: it asks `/api/geocode` and the
//! server relays. When `GEOCODE_RELAY_URL` is set, the request is wrapped in a
//! CORS-relay proxy call (`<relay>?url=<encoded search url>`) whose response
//! carries the provider body as a `contents` string.
//!
//! ERROR HANDLING
//! ==============
//! Zero candidates is `NotFound`, not a fetch failure, so the UI can name the
//! place it could not resolve. Nothing is retried.

use async_trait::async_trait;
use trip::LatLng;
use url::Url;

use crate::config::env_string;

pub const DEFAULT_GEOCODE_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_GEOCODE_USER_AGENT: &str = "waypoint/0.1";

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The provider returned no candidate for this place.
    #[error("location not found: {0}")]
    NotFound(String),
    /// Transport, status, or payload failure.
    #[error("geocoding request failed: {0}")]
    Fetch(String),
}

/// Resolves free text to a coordinate.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve_place(&self, place: &str) -> Result<LatLng, GeocodeError>;
}

/// Geocoder endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeConfig {
    pub base_url: String,
    pub relay_url: Option<String>,
    pub user_agent: String,
}

impl GeocodeConfig {
    /// Load from `GEOCODE_BASE_URL`, `GEOCODE_RELAY_URL`, `GEOCODE_USER_AGENT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env_string("GEOCODE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEOCODE_BASE_URL.to_owned())
                .trim_end_matches('/')
                .to_owned(),
            relay_url: env_string("GEOCODE_RELAY_URL"),
            user_agent: env_string("GEOCODE_USER_AGENT").unwrap_or_else(|| DEFAULT_GEOCODE_USER_AGENT.to_owned()),
        }
    }
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEOCODE_BASE_URL.to_owned(),
            relay_url: None,
            user_agent: DEFAULT_GEOCODE_USER_AGENT.to_owned(),
        }
    }
}

/// Nominatim search client.
pub struct NominatimClient {
    http: reqwest::Client,
    config: GeocodeConfig,
}

impl NominatimClient {
    #[must_use]
    pub fn new(http: reqwest::Client, config: GeocodeConfig) -> Self {
        Self { http, config }
    }

    /// Direct search URL for `place`, first match only.
    pub(crate) fn search_url(&self, place: &str) -> Result<Url, GeocodeError> {
        Url::parse_with_params(
            &format!("{}/search", self.config.base_url),
            &[("q", place), ("format", "json"), ("limit", "1")],
        )
        .map_err(|e| GeocodeError::Fetch(format!("invalid geocode url: {e}")))
    }

    /// URL actually requested: the search URL, wrapped by the relay if configured.
    pub(crate) fn request_url(&self, place: &str) -> Result<Url, GeocodeError> {
        let search = self.search_url(place)?;
        match &self.config.relay_url {
            Some(relay) => Url::parse_with_params(relay, &[("url", search.as_str())])
                .map_err(|e| GeocodeError::Fetch(format!("invalid relay url: {e}"))),
            None => Ok(search),
        }
    }

    /// Interpret a provider (or relay) body.
    pub(crate) fn parse_body(&self, place: &str, body: &str) -> Result<LatLng, GeocodeError> {
        let payload = if self.config.relay_url.is_some() {
            trip::unwrap_relay_envelope(body).map_err(|e| GeocodeError::Fetch(e.to_string()))?
        } else {
            body.to_owned()
        };
        trip::parse_place_search(&payload)
            .map_err(|e| GeocodeError::Fetch(e.to_string()))?
            .ok_or_else(|| GeocodeError::NotFound(place.to_owned()))
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn resolve_place(&self, place: &str) -> Result<LatLng, GeocodeError> {
        let url = self.request_url(place)?;
        let resp = self
            .http
            .get(url)
            .header("User-Agent", &self.config.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| GeocodeError::Fetch(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| GeocodeError::Fetch(e.to_string()))?;
        if !status.is_success() {
            return Err(GeocodeError::Fetch(format!("status {status}")));
        }
        self.parse_body(place, &body)
    }
}

#[cfg(test)]
#[path = "geocode_test.rs"]
mod tests;
