//! # juridraft-core - Runtime for JuriDraft
//!
//! `juridraft-core` powers the JuriDraft legal-drafting assistant. Every
//! feature follows the same chain:
//!
//! 1. `prompts`: embed the user's fields in a fixed instruction template.
//! 2. `completion`: send the prompt to Gemini (`gemini`) and clean the
//!    reply with `sanitizer`.
//! 3. `export`: optionally write the result to a `.docx` file.
//!
//! `assistant` wires the chain together and `config` supplies the endpoint,
//! API key and export settings from `juridraft.toml` and the environment.
//!
//! ## Quickstart
//!
//! ```rust,ignore
//! use juridraft_core::{Assistant, CompletionClient, config::{ConfigManager, get_api_key}};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), anyhow::Error> {
//!     let config = ConfigManager::load()?.into_config();
//!     let api_key = get_api_key(&config.gemini.api_key_sources())?;
//!     let client = CompletionClient::from_config(&config.gemini, api_key)?;
//!
//!     let assistant = Assistant::new(client, &config.export);
//!     let output = assistant.research("Limitation period for land recovery", true).await?;
//!     println!("{}", output.text);
//!     Ok(())
//! }
//! ```

pub mod assistant;
pub mod completion;
pub mod config;
pub mod export;
pub mod gemini;
pub mod prompts;
pub mod sanitizer;

pub use assistant::{Assistant, FeatureOutput};
pub use completion::{CompletionClient, CompletionError, CompletionProvider};
pub use config::{ConfigManager, JuriDraftConfig};
pub use export::ExportWriter;
pub use prompts::{Feature, PromptTemplates};
pub use sanitizer::sanitize;
