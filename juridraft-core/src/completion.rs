//! Prompt-in, cleaned-text-out completion.
//!
//! [`CompletionClient`] sends one prompt to Gemini, pulls the text out of the
//! first candidate and runs it through [`crate::sanitizer::sanitize`].
//! Failures are typed as [`CompletionError`]; callers that only need
//! something to show the user use
//! [`CompletionProvider::complete_or_message`], which never fails.

use crate::config::GeminiConfig;
use crate::config::constants::COMPLETION_ERROR_PREFIX;
use crate::gemini::{Client, ClientConfig, GenerateContentRequest};
use crate::sanitizer::sanitize;
use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Missing completion text: {0}")]
    MissingText(&'static str),
}

impl CompletionError {
    /// The message shown in place of a completion
    pub fn display_text(&self) -> String {
        format!("{COMPLETION_ERROR_PREFIX}{self}")
    }
}

/// Anything that turns a prompt into cleaned completion text
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Like [`complete`](Self::complete), with errors rendered as display text
    async fn complete_or_message(&self, prompt: &str) -> String {
        match self.complete(prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "completion failed");
                err.display_text()
            }
        }
    }
}

/// Gemini-backed completion provider
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
}

impl CompletionClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from settings and an already resolved API key
    pub fn from_config(config: &GeminiConfig, api_key: String) -> Result<Self> {
        let client = Client::with_config(
            api_key,
            config.model.clone(),
            ClientConfig::from(config),
        )?;
        Ok(Self::new(client))
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }
}

#[async_trait]
impl CompletionProvider for CompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self.client.generate(&request).await?;
        let raw = response.first_text().map_err(CompletionError::MissingText)?;
        debug!(raw_len = raw.len(), "received completion");
        Ok(sanitize(raw))
    }
}
