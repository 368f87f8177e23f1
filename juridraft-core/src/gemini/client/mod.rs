pub mod config;

pub use config::ClientConfig;

use crate::completion::CompletionError;
use crate::gemini::models::{GenerateContentRequest, GenerateContentResponse};
use anyhow::{Context, Result};
use reqwest::Client as ReqwestClient;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct Client {
    api_key: String,
    model: String,
    http: ReqwestClient,
    config: ClientConfig,
}

impl Client {
    /// Create a client with custom configuration
    pub fn with_config(api_key: String, model: String, config: ClientConfig) -> Result<Self> {
        let http = ReqwestClient::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_key,
            model,
            http,
            config,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// `generateContent` URL for the configured model, without the key
    pub fn endpoint(&self) -> String {
        let model = if self.model.starts_with("models/") {
            self.model.clone()
        } else {
            format!("models/{}", self.model)
        };
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Send one `generateContent` request. No retries.
    ///
    /// Transport errors are stripped of their URL so the API key never ends
    /// up in a displayed message.
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, CompletionError> {
        let url = self.endpoint();
        debug!(model = %self.model, %url, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| {
                CompletionError::Network(format!(
                    "error reading response body: {}",
                    e.without_url()
                ))
            })?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Gemini API returned an error status");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<GenerateContentResponse>(&body)
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))
    }
}
