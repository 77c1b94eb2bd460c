use std::time::Duration;

use serde::Deserialize;

/// Settings for [`AsyncClient`](crate::AsyncClient).
#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are appended to (default: https://api.twitter.com)
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Timeout for a whole request, including reading the response body. Streams only use it as
    /// a connect timeout.
    #[serde(default = "default_timeout", deserialize_with = "duration_secs::deserialize")]
    pub timeout: Duration,

    /// Refuse to send requests over plain HTTP
    #[serde(default = "default_https_only")]
    pub https_only: bool,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_base() -> String {
    "https://api.twitter.com".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_https_only() -> bool {
    true
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into()
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout: default_timeout(),
            https_only: default_https_only(),
            user_agent: default_user_agent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::ClientConfig;

    #[test]
    fn test_defaults() {
        let config = serde_json::from_str::<ClientConfig>("{}").unwrap();

        assert_eq!(config.api_base, "https://api.twitter.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.https_only);
        assert!(config.user_agent.starts_with("twitter_v2/"));
    }

    #[test]
    fn test_overrides() {
        let config = serde_json::from_str::<ClientConfig>(
            r#"{"api_base": "http://127.0.0.1:8080", "timeout": 5, "https_only": false}"#,
        )
        .unwrap();

        assert_eq!(config.api_base, "http://127.0.0.1:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.https_only);
    }
}
