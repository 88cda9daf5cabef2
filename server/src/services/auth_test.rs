use super::*;

fn config() -> GoogleConfig {
    GoogleConfig {
        client_id: "my_client_id".into(),
        client_secret: "secret".into(),
        redirect_uri: "http://localhost:3000/auth/google/callback".into(),
    }
}

// =============================================================================
// GoogleConfig::from_env: env manipulation requires unsafe in edition 2024.
// Tests must run with `--test-threads=1` to avoid env races.
// =============================================================================

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_google_env() {
    unsafe {
        std::env::remove_var("GOOGLE_CLIENT_ID");
        std::env::remove_var("GOOGLE_CLIENT_SECRET");
        std::env::remove_var("GOOGLE_REDIRECT_URI");
    }
}

#[test]
fn from_env_all_set_returns_some() {
    unsafe {
        clear_google_env();
        std::env::set_var("GOOGLE_CLIENT_ID", "id123");
        std::env::set_var("GOOGLE_CLIENT_SECRET", "secret456");
        std::env::set_var("GOOGLE_REDIRECT_URI", "http://localhost/callback");
    }
    let config = GoogleConfig::from_env().unwrap();
    assert_eq!(config.client_id, "id123");
    assert_eq!(config.client_secret, "secret456");
    assert_eq!(config.redirect_uri, "http://localhost/callback");
    unsafe { clear_google_env() };
}

#[test]
fn from_env_missing_secret_returns_none() {
    unsafe {
        clear_google_env();
        std::env::set_var("GOOGLE_CLIENT_ID", "id123");
        std::env::set_var("GOOGLE_REDIRECT_URI", "http://localhost/callback");
    }
    assert!(GoogleConfig::from_env().is_none());
    unsafe { clear_google_env() };
}

#[test]
fn from_env_all_missing_returns_none() {
    unsafe { clear_google_env() };
    assert!(GoogleConfig::from_env().is_none());
}

// =============================================================================
// authorize_url
// =============================================================================

#[test]
fn authorize_url_starts_with_google() {
    assert!(config().authorize_url("st").starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
}

#[test]
fn authorize_url_contains_client_id_and_state() {
    let url = config().authorize_url("csrf_token_abc");
    assert!(url.contains("client_id=my_client_id"));
    assert!(url.contains("state=csrf_token_abc"));
    assert!(url.contains("response_type=code"));
}

#[test]
fn authorize_url_encodes_redirect_and_scope() {
    let url = config().authorize_url("st");
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fgoogle%2Fcallback"));
    assert!(url.contains("scope=openid+email+profile"));
}

// =============================================================================
// GoogleUser -> SessionUser
// =============================================================================

#[test]
fn google_user_maps_to_session_user() {
    let json = r#"{"sub":"1","name":"Ada Lovelace","email":"ada@example.com","picture":"https://example.com/a.png"}"#;
    let user: SessionUser = serde_json::from_str::<GoogleUser>(json).unwrap().into();
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.photo_url.as_deref(), Some("https://example.com/a.png"));
}

#[test]
fn google_user_without_name_uses_email_local_part() {
    let json = r#"{"email":"grace@example.com"}"#;
    let user: SessionUser = serde_json::from_str::<GoogleUser>(json).unwrap().into();
    assert_eq!(user.name, "grace");
    assert!(user.photo_url.is_none());
}

// =============================================================================
// AuthError display
// =============================================================================

#[test]
fn auth_error_token_exchange_display() {
    let msg = AuthError::TokenExchange("timeout".into()).to_string();
    assert!(msg.contains("token exchange"));
    assert!(msg.contains("timeout"));
}

#[test]
fn auth_error_userinfo_display() {
    let msg = AuthError::UserInfo("401 Unauthorized".into()).to_string();
    assert!(msg.contains("userinfo"));
    assert!(msg.contains("401 Unauthorized"));
}
