use super::*;

fn ada() -> SessionUser {
    SessionUser {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        photo_url: Some("https://example.com/ada.png".into()),
    }
}

// =============================================================================
// bytes_to_hex / tokens
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a, 0xff]), "0aff");
}

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

#[test]
fn store_key_is_stable_and_not_the_token() {
    let token = generate_token();
    assert_eq!(store_key(&token), store_key(&token));
    assert_ne!(store_key(&token), token);
    assert_eq!(store_key(&token).len(), 64);
}

// =============================================================================
// SessionStore
// =============================================================================

#[tokio::test]
async fn created_session_validates() {
    let store = SessionStore::new(Duration::from_secs(60));
    let token = store.create(ada()).await;
    assert_eq!(store.validate(&token).await, Some(ada()));
}

#[tokio::test]
async fn unknown_token_does_not_validate() {
    let store = SessionStore::new(Duration::from_secs(60));
    let _ = store.create(ada()).await;
    assert_eq!(store.validate("not-a-token").await, None);
}

#[tokio::test]
async fn deleted_session_does_not_validate() {
    let store = SessionStore::new(Duration::from_secs(60));
    let token = store.create(ada()).await;
    store.delete(&token).await;
    assert_eq!(store.validate(&token).await, None);
    assert_eq!(store.stored_count().await, 0);
}

#[tokio::test]
async fn expired_session_does_not_validate() {
    let store = SessionStore::new(Duration::ZERO);
    let token = store.create(ada()).await;
    assert_eq!(store.validate(&token).await, None);
}

#[tokio::test]
async fn purge_removes_only_expired() {
    let live = SessionStore::new(Duration::from_secs(60));
    let token = live.create(ada()).await;
    assert_eq!(live.purge_expired().await, 0);
    assert!(live.validate(&token).await.is_some());

    let stale = SessionStore::new(Duration::ZERO);
    let _ = stale.create(ada()).await;
    let _ = stale.create(ada()).await;
    assert_eq!(stale.purge_expired().await, 2);
    assert_eq!(stale.stored_count().await, 0);
}

#[tokio::test]
async fn clones_share_records() {
    let store = SessionStore::new(Duration::from_secs(60));
    let token = store.clone().create(ada()).await;
    assert!(store.validate(&token).await.is_some());
}

#[test]
fn session_config_defaults_to_one_day() {
    unsafe {
        std::env::remove_var("SESSION_TTL_SECS");
        std::env::remove_var("SESSION_SWEEP_INTERVAL_SECS");
    }
    let config = SessionConfig::from_env();
    assert_eq!(config.ttl, Duration::from_secs(86_400));
    assert_eq!(config.sweep_interval, Duration::from_secs(DEFAULT_SESSION_SWEEP_INTERVAL_SECS));
}

#[tokio::test]
async fn oversized_ttl_is_clamped_and_still_validates() {
    let store = SessionStore::new(Duration::from_secs(u64::MAX));
    assert_eq!(store.ttl(), Duration::from_secs(MAX_SESSION_TTL_SECS));
    let token = store.create(ada()).await;
    assert_eq!(store.validate(&token).await, Some(ada()));
}
