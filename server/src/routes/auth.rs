//! Auth routes: Google OAuth flow and session management.

use axum::extract::{FromRef, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;
use trip::SessionUser;

use crate::config::{env_bool, env_string};
use crate::services::auth as auth_svc;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
const OAUTH_STATE_COOKIE_NAME: &str = "oauth_state";
pub(crate) const LOGIN_PATH: &str = "/login";
pub(crate) const MAP_PATH: &str = "/map";

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    env_string("GOOGLE_REDIRECT_URI").is_some_and(|uri| uri.starts_with("https://"))
}

fn base_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Session cookie lasting as long as the server-side record.
pub(crate) fn session_cookie(token: String, ttl: std::time::Duration, secure: bool) -> Cookie<'static> {
    let max_age = Duration::try_from(ttl).unwrap_or(Duration::DAY);
    let mut cookie = base_cookie(COOKIE_NAME, token, secure);
    cookie.set_max_age(max_age);
    cookie
}

/// Expired cookie that makes the browser drop `name`.
pub(crate) fn removal_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(name, String::new(), secure);
    cookie.set_max_age(Duration::ZERO);
    cookie
}

/// CSRF check for the OAuth round trip. An absent cookie never matches.
pub(crate) fn oauth_state_matches(expected: &str, received: &str) -> bool {
    !expected.is_empty() && expected == received
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = app_state
            .sessions
            .validate(token)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /auth/google`: redirect to Google's consent page.
pub async fn google_redirect(State(state): State<AppState>) -> Response {
    let Some(config) = &state.google else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Google sign-in not configured").into_response();
    };

    let oauth_state = crate::services::session::generate_token();
    let mut cookie = base_cookie(OAUTH_STATE_COOKIE_NAME, oauth_state.clone(), cookie_secure());
    cookie.set_max_age(Duration::minutes(10));

    let jar = CookieJar::new().add(cookie);
    (jar, Redirect::temporary(&config.authorize_url(&oauth_state))).into_response()
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

/// `GET /auth/google/callback`: exchange code, create session, set cookie, redirect to the map.
///
/// Provider failures are logged and send the visitor back to the sign-in page.
pub async fn google_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> Response {
    let Some(config) = &state.google else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Google sign-in not configured").into_response();
    };
    let secure = cookie_secure();
    let expected_state = jar
        .get(OAUTH_STATE_COOKIE_NAME)
        .map(|c| c.value().to_owned())
        .unwrap_or_default();
    let jar = jar.add(removal_cookie(OAUTH_STATE_COOKIE_NAME, secure));

    if let Some(error) = params.error.as_deref() {
        tracing::warn!(%error, "google sign-in declined");
        return (jar, Redirect::temporary(LOGIN_PATH)).into_response();
    }

    // Verify OAuth CSRF state from cookie.
    let Some(callback_state) = params.state.as_deref() else {
        return (StatusCode::BAD_REQUEST, "missing oauth state").into_response();
    };
    if !oauth_state_matches(&expected_state, callback_state) {
        return (StatusCode::UNAUTHORIZED, "invalid oauth state").into_response();
    }
    let Some(code) = params.code.as_deref() else {
        return (StatusCode::BAD_REQUEST, "missing oauth code").into_response();
    };

    let access_token = match auth_svc::exchange_code(&state.http, config, code).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "oauth code exchange failed");
            return (jar, Redirect::temporary(LOGIN_PATH)).into_response();
        }
    };

    let google_user = match auth_svc::fetch_google_user(&state.http, &access_token).await {
        Ok(u) => u,
        Err(e) => {
            tracing::error!(error = %e, "google userinfo fetch failed");
            return (jar, Redirect::temporary(LOGIN_PATH)).into_response();
        }
    };

    let user = SessionUser::from(google_user);
    tracing::info!(email = %user.email, "user signed in");
    let token = state.sessions.create(user).await;

    let jar = jar.add(session_cookie(token, state.sessions.ttl(), secure));
    (jar, Redirect::temporary(MAP_PATH)).into_response()
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete session if any, always clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let token = jar.get(COOKIE_NAME).map(|c| c.value().to_owned()).unwrap_or_default();
    if !token.is_empty() {
        match state.sessions.validate(&token).await {
            Some(user) => tracing::info!(email = %user.email, "user signed out"),
            None => tracing::debug!("logout with expired or unknown session"),
        }
        state.sessions.delete(&token).await;
    }

    let jar = CookieJar::new().add(removal_cookie(COOKIE_NAME, cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
