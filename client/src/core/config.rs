//! Client configuration, read from the environment with sane defaults.

use std::env;
use std::time::Duration;

/// Default backend origin when `ACADEMY_API_URL` is unset (local development).
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Runtime configuration for the API client and session engine.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub api_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Access tokens expiring within this window are refreshed proactively
    /// before the request is sent.
    pub refresh_window: Duration,
    /// Idle delay between an answer edit and its autosave.
    pub autosave_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            refresh_window: Duration::from_secs(60),
            autosave_delay: Duration::from_secs(2),
        }
    }
}

impl ClientConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// - `ACADEMY_API_URL` - backend origin
    /// - `ACADEMY_AUTOSAVE_DELAY_MS` - autosave debounce in milliseconds
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("ACADEMY_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(delay) = env::var("ACADEMY_AUTOSAVE_DELAY_MS") {
            if let Ok(ms) = delay.parse::<u64>() {
                config.autosave_delay = Duration::from_millis(ms);
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://127.0.0.1:8000");
        assert_eq!(config.autosave_delay, Duration::from_secs(2));
    }
}
