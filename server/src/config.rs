//! Environment-driven configuration shared by every service.
//!
//! DESIGN
//! ======
//! Each service owns a `*Config::from_env()` constructor; this module holds
//! the parsing helpers they share and the outbound HTTP client settings used
//! for every provider call (identity, geocoding, routing).

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROVIDER_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_PROVIDER_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Parse `key` as `T`, falling back to `default` when unset or malformed.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Read a boolean flag. Accepts `1/true/yes/on` and `0/false/no/off`.
pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// Read a non-empty string, trimming surrounding whitespace.
pub(crate) fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Timeouts applied to every outbound provider request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl ProviderTimeouts {
    /// Load from `PROVIDER_REQUEST_TIMEOUT_SECS` / `PROVIDER_CONNECT_TIMEOUT_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            request_secs: env_parse("PROVIDER_REQUEST_TIMEOUT_SECS", DEFAULT_PROVIDER_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("PROVIDER_CONNECT_TIMEOUT_SECS", DEFAULT_PROVIDER_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl Default for ProviderTimeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_PROVIDER_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_PROVIDER_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Build the shared outbound HTTP client.
///
/// # Errors
///
/// Returns the underlying `reqwest` error if the TLS backend cannot initialize.
pub fn build_http_client(timeouts: ProviderTimeouts) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
