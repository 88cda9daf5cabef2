//! Session management.
//!
//! ARCHITECTURE
//! ============
//! Sessions are the single source of truth for "who is signed in". A random
//! token travels in an HttpOnly cookie; the server keeps the user record in
//! memory under the SHA-256 of that token, so a leaked store dump cannot be
//! replayed as cookies.
//!
//! TRADE-OFFS
//! ==========
//! The store is process-local. A restart signs everyone out, which matches
//! the one-day, display-only nature of the session record.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use trip::SessionUser;

use crate::config::env_parse;

pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;
pub const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 300;
/// Upper bound on session lifetime; browsers cap cookie max-age at 400 days.
pub const MAX_SESSION_TTL_SECS: u64 = 400 * 24 * 60 * 60;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Storage key for a session token.
pub(crate) fn store_key(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Session lifetime knobs loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long a session stays valid after sign-in.
    pub ttl: Duration,
    /// How often expired sessions are swept from memory.
    pub sweep_interval: Duration,
}

impl SessionConfig {
    /// Load from `SESSION_TTL_SECS` (default one day) and `SESSION_SWEEP_INTERVAL_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            ttl: Duration::from_secs(env_parse("SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)),
            sweep_interval: Duration::from_secs(env_parse(
                "SESSION_SWEEP_INTERVAL_SECS",
                DEFAULT_SESSION_SWEEP_INTERVAL_SECS,
            )),
        }
    }
}

struct SessionRecord {
    user: SessionUser,
    expires_at: Instant,
}

/// In-memory session store. Cheap to clone; clones share the same map.
#[derive(Clone)]
pub struct SessionStore {
    records: Arc<RwLock<HashMap<String, SessionRecord>>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        let ttl = ttl.min(Duration::from_secs(MAX_SESSION_TTL_SECS));
        Self { records: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    /// Session lifetime after clamping, also used as the cookie max-age.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a session for the given user, returning the token.
    pub async fn create(&self, user: SessionUser) -> String {
        let token = generate_token();
        let now = Instant::now();
        let expires_at = now.checked_add(self.ttl).unwrap_or(now);
        let record = SessionRecord { user, expires_at };
        self.records.write().await.insert(store_key(&token), record);
        token
    }

    /// Validate a session token and return the associated user.
    pub async fn validate(&self, token: &str) -> Option<SessionUser> {
        let records = self.records.read().await;
        let record = records.get(&store_key(token))?;
        (record.expires_at > Instant::now()).then(|| record.user.clone())
    }

    /// Delete a session by token. Unknown tokens are ignored.
    pub async fn delete(&self, token: &str) {
        self.records.write().await.remove(&store_key(token));
    }

    /// Drop every expired session, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| record.expires_at > now);
        before - records.len()
    }

    /// Number of sessions currently held, expired or not.
    #[cfg(test)]
    pub async fn stored_count(&self) -> usize {
        self.records.read().await.len()
    }
}

/// Spawn the background sweeper that evicts expired sessions.
pub fn spawn_session_sweeper(store: SessionStore, interval: Duration) -> JoinHandle<()> {
    tracing::info!(interval_secs = interval.as_secs(), "session sweeper configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval.max(Duration::from_secs(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let purged = store.purge_expired().await;
            if purged > 0 {
                tracing::debug!(purged, "expired sessions swept");
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
