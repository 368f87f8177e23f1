use crate::config::GeminiConfig;
use crate::config::constants::gemini;
use std::time::Duration;

/// HTTP settings for the Gemini client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://generativelanguage.googleapis.com/v1beta`
    pub base_url: String,
    /// Request timeout
    pub request_timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: gemini::DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(gemini::REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(gemini::CONNECT_TIMEOUT_SECS),
            user_agent: format!("juridraft/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl From<&GeminiConfig> for ClientConfig {
    fn from(config: &GeminiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            request_timeout: config.request_timeout(),
            connect_timeout: config.connect_timeout(),
            ..Self::default()
        }
    }
}
