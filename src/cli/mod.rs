//! Command-line interface: argument parsing and one handler per command

pub mod args;
pub mod chat;
pub mod draft;
pub mod init;
pub mod output;
pub mod research;
pub mod review;
pub mod show;

pub use args::{Cli, Commands};

use anyhow::{Context, Result};
use juridraft_core::config::{ConfigManager, JuriDraftConfig, get_api_key, load_dotenv};
use juridraft_core::{Assistant, CompletionClient};

/// Load configuration and apply command-line overrides
pub fn load_config(cli: &Cli) -> Result<JuriDraftConfig> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load().context("Failed to load configuration")?,
    };
    if let Some(path) = manager.config_path() {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }

    let mut config = manager.into_config();
    if let Some(model) = &cli.model {
        config.gemini.model = model.clone();
    }
    if let Some(env_var) = &cli.api_key_env {
        config.gemini.api_key_env = env_var.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.export.output_dir = dir.clone();
    }
    if !config.gemini.is_supported_model() {
        tracing::warn!(
            model = %config.gemini.model,
            "model is not in the supported list; requests may fail"
        );
    }
    Ok(config)
}

/// Resolve the API key and build the Gemini-backed assistant
pub fn build_assistant(config: &JuriDraftConfig) -> Result<Assistant<CompletionClient>> {
    load_dotenv()?;
    let api_key = get_api_key(&config.gemini.api_key_sources())?;
    let client = CompletionClient::from_config(&config.gemini, api_key)
        .context("Failed to initialize Gemini client")?;
    Ok(Assistant::new(client, &config.export))
}
