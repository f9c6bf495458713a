//! Client configuration

use std::time::Duration;
use tracing::warn;
use url::Url;

/// Environment variable overriding the service base URL.
pub const API_URL_ENV: &str = "TASKBOARD_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base path of the REST service, e.g. `http://localhost:5000/api`.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Default configuration, with the base URL taken from the
    /// `TASKBOARD_API_URL` environment variable when set. An unparseable
    /// override is ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(API_URL_ENV) {
            match Url::parse(&value) {
                Ok(url) => config.base_url = url,
                Err(err) => {
                    warn!(value = %value, error = %err, "ignoring unparseable TASKBOARD_API_URL")
                }
            }
        }
        config
    }

    /// Replace the base URL.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Replace the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
