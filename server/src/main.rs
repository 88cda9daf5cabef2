mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::directions::{DirectionsConfig, DirectionsProvider, OpenRouteServiceClient};
use services::geocode::{GeocodeConfig, NominatimClient};
use services::session::{SessionConfig, SessionStore};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = config::env_parse("PORT", config::DEFAULT_PORT);
    let timeouts = config::ProviderTimeouts::from_env();
    let http = config::build_http_client(timeouts).expect("http client init failed");

    let google = services::auth::GoogleConfig::from_env();
    if google.is_none() {
        tracing::warn!("Google OAuth not configured; sign-in disabled");
    }

    let geocode_config = GeocodeConfig::from_env();
    tracing::info!(
        base_url = %geocode_config.base_url,
        relayed = geocode_config.relay_url.is_some(),
        "geocoder configured"
    );
    let geocoder = Arc::new(NominatimClient::new(http.clone(), geocode_config));

    let directions = match DirectionsConfig::from_env() {
        Some(config) => {
            tracing::info!(base_url = %config.base_url, "routing provider configured");
            Some(Arc::new(OpenRouteServiceClient::new(http.clone(), config)) as Arc<dyn DirectionsProvider>)
        }
        None => {
            tracing::warn!("ORS_API_KEY not set; routing disabled");
            None
        }
    };

    let session_config = SessionConfig::from_env();
    let sessions = SessionStore::new(session_config.ttl);
    let _sweeper = services::session::spawn_session_sweeper(sessions.clone(), session_config.sweep_interval);

    let state = state::AppState::new(sessions, google, http, geocoder, directions);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "waypoint listening");
    axum::serve(listener, app).await.expect("server failed");
}
