//! Driving directions against an OpenRouteService-compatible endpoint.
//!
//! The provider speaks GeoJSON in `[lng, lat]` order; everything leaving this
//! module is already reprojected and formatted by `trip::parse_directions`.

use async_trait::async_trait;
use trip::{LatLng, RouteResult};
use url::Url;

use crate::config::env_string;

pub const DEFAULT_ORS_BASE_URL: &str = "https://api.openrouteservice.org";
const DRIVING_PROFILE_PATH: &str = "/v2/directions/driving-car";

#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// The request could not be sent or the body could not be read.
    #[error("routing request failed: {0}")]
    Fetch(String),
    /// The provider answered with a non-success status.
    #[error("routing provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The provider body was not a usable route.
    #[error("routing response unusable: {0}")]
    Parse(#[from] trip::ParseError),
}

/// Computes a driving route between two points.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn compute_route(&self, from: LatLng, to: LatLng) -> Result<RouteResult, DirectionsError>;
}

/// Routing endpoint settings. The API key never leaves the server.
#[derive(Clone, PartialEq, Eq)]
pub struct DirectionsConfig {
    pub api_key: String,
    pub base_url: String,
}

impl std::fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DirectionsConfig {
    /// Load from `ORS_API_KEY` (required) and `ORS_BASE_URL`.
    /// Returns `None` without a key (routing will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env_string("ORS_API_KEY")?;
        let base_url = env_string("ORS_BASE_URL")
            .unwrap_or_else(|| DEFAULT_ORS_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        Some(Self { api_key, base_url })
    }
}

/// OpenRouteService directions client.
pub struct OpenRouteServiceClient {
    http: reqwest::Client,
    config: DirectionsConfig,
}

impl OpenRouteServiceClient {
    #[must_use]
    pub fn new(http: reqwest::Client, config: DirectionsConfig) -> Self {
        Self { http, config }
    }

    pub(crate) fn request_url(&self, from: LatLng, to: LatLng) -> Result<Url, DirectionsError> {
        Url::parse_with_params(
            &format!("{}{DRIVING_PROFILE_PATH}", self.config.base_url),
            &[
                ("api_key", self.config.api_key.as_str()),
                ("start", from.to_lng_lat_param().as_str()),
                ("end", to.to_lng_lat_param().as_str()),
            ],
        )
        .map_err(|e| DirectionsError::Fetch(format!("invalid routing url: {e}")))
    }
}

#[async_trait]
impl DirectionsProvider for OpenRouteServiceClient {
    async fn compute_route(&self, from: LatLng, to: LatLng) -> Result<RouteResult, DirectionsError> {
        let url = self.request_url(from, to)?;
        let resp = self
            .http
            .get(url)
            .header("Accept", "application/geo+json, application/json")
            .send()
            .await
            .map_err(|e| DirectionsError::Fetch(e.without_url().to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| DirectionsError::Fetch(e.without_url().to_string()))?;
        if !(200..300).contains(&status) {
            return Err(DirectionsError::Status { status, body });
        }
        Ok(trip::parse_directions(&body)?)
    }
}

#[cfg(test)]
#[path = "directions_test.rs"]
mod tests;
