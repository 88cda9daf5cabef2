//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the session store, the optional Google OAuth config, the outbound
//! HTTP client, and the two provider seams (`Geocoder`, `DirectionsProvider`)
//! as trait objects so tests can substitute fakes.

use std::sync::Arc;

use crate::services::auth::GoogleConfig;
use crate::services::directions::DirectionsProvider;
use crate::services::geocode::Geocoder;
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Google OAuth config. `None` disables sign-in.
    pub google: Option<GoogleConfig>,
    /// Client used for identity-provider calls.
    pub http: reqwest::Client,
    pub geocoder: Arc<dyn Geocoder>,
    /// Routing provider. `None` if no routing API key is configured.
    pub directions: Option<Arc<dyn DirectionsProvider>>,
}

impl AppState {
    #[must_use]
    pub fn new(
        sessions: SessionStore,
        google: Option<GoogleConfig>,
        http: reqwest::Client,
        geocoder: Arc<dyn Geocoder>,
        directions: Option<Arc<dyn DirectionsProvider>>,
    ) -> Self {
        Self { sessions, google, http, geocoder, directions }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
