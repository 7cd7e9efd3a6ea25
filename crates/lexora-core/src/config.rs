//! Client configuration: API base URL and request bounds.

use std::sync::Once;
use std::time::Duration;

use tracing::warn;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "LEXORA_API_URL";

/// Base URL used when `LEXORA_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
const HEALTH_COOLDOWN: Duration = Duration::from_secs(30);

static MISSING_URL_WARNING: Once = Once::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash, e.g. `http://localhost:5000/api`.
    pub base_url: String,
    /// Bound on every feature request.
    pub request_timeout: Duration,
    /// Bound on the `/health` check.
    pub health_timeout: Duration,
    /// How long a health check result is trusted before the next one.
    pub health_cooldown: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            health_timeout: HEALTH_TIMEOUT,
            health_cooldown: HEALTH_COOLDOWN,
        }
    }
}

impl ClientConfig {
    /// Default bounds with the given base URL (trailing slashes trimmed).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    /// Read the base URL from `LEXORA_API_URL`.
    ///
    /// Falls back to [`DEFAULT_API_URL`] when the variable is unset or blank,
    /// logging a warning the first time this happens in the process.
    pub fn from_env() -> Self {
        Self::with_base_url(resolve_base_url(std::env::var(API_URL_ENV).ok().as_deref()))
    }
}

/// Pick the configured base URL, or the default when `raw` is missing or blank.
pub fn resolve_base_url(raw: Option<&str>) -> String {
    resolve_with(raw, &MISSING_URL_WARNING)
}

fn resolve_with(raw: Option<&str>, warning: &Once) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(url) => normalize_base_url(url),
        None => {
            warning.call_once(|| {
                warn!(
                    fallback_url = DEFAULT_API_URL,
                    "{API_URL_ENV} is not set, using default API URL"
                );
            });
            DEFAULT_API_URL.to_string()
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
