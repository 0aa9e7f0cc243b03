//! Configuration: chat endpoint and display options, from the environment.

use std::env;

use reqwest::Url;

/// Endpoint used when neither `--endpoint` nor `RELAY_CHAT_ENDPOINT` is set.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/chat";

const ENDPOINT_VAR: &str = "RELAY_CHAT_ENDPOINT";
const SHOW_TIMESTAMPS_VAR: &str = "RELAY_CHAT_SHOW_TIMESTAMPS";

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute http(s) URL the chat messages are POSTed to.
    pub endpoint: Url,
    /// Show `HH:MM` next to bubble labels.
    pub show_timestamps: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid chat endpoint '{value}': {reason}")]
    InvalidEndpoint { value: String, reason: String },
}

/// Load configuration from the environment (after dotenv). `endpoint_override`
/// comes from `--endpoint` and wins over `RELAY_CHAT_ENDPOINT`.
pub fn load(endpoint_override: Option<&str>) -> Result<Config, ConfigError> {
    let endpoint = match endpoint_override {
        Some(e) => e.to_string(),
        None => env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
    };
    let show_timestamps = env::var(SHOW_TIMESTAMPS_VAR).ok();
    from_values(&endpoint, show_timestamps.as_deref())
}

fn from_values(endpoint: &str, show_timestamps: Option<&str>) -> Result<Config, ConfigError> {
    Ok(Config {
        endpoint: parse_endpoint(endpoint)?,
        show_timestamps: show_timestamps.is_none_or(parse_flag),
    })
}

fn parse_endpoint(value: &str) -> Result<Url, ConfigError> {
    let value = value.trim();
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

/// Anything except an explicit "off" value enables the flag.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_valid() {
        let config = from_values(DEFAULT_ENDPOINT, None).unwrap();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert!(config.show_timestamps);
    }

    #[test]
    fn endpoint_is_trimmed() {
        let config = from_values("  https://chat.example.com/chat \n", None).unwrap();
        assert_eq!(config.endpoint.host_str(), Some("chat.example.com"));
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let err = from_values("/chat", None).unwrap_err();
        assert!(err.to_string().contains("invalid chat endpoint '/chat'"));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = from_values("ftp://example.com/chat", None).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn timestamps_can_be_disabled() {
        for off in ["0", "false", "NO", " off "] {
            let config = from_values(DEFAULT_ENDPOINT, Some(off)).unwrap();
            assert!(!config.show_timestamps, "{off:?} should disable timestamps");
        }
        let config = from_values(DEFAULT_ENDPOINT, Some("1")).unwrap();
        assert!(config.show_timestamps);
    }
}
