//! Feature chains: compose a prompt, complete it, optionally export.

use crate::completion::CompletionProvider;
use crate::config::ExportConfig;
use crate::export::ExportWriter;
use crate::prompts::{Feature, PromptTemplates};
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

/// What a feature hands back to the interaction shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureOutput {
    pub feature: Feature,
    /// Cleaned completion, or the completion error rendered as text
    pub text: String,
    /// Where the text was exported, when it was
    pub export_path: Option<PathBuf>,
}

/// Runs the four assistant features against a completion provider
pub struct Assistant<P> {
    provider: P,
    writer: ExportWriter,
    draft_filename: String,
    research_filename: String,
}

impl<P: CompletionProvider> Assistant<P> {
    pub fn new(provider: P, export: &ExportConfig) -> Self {
        Self {
            provider,
            writer: ExportWriter::from_config(export),
            draft_filename: export.draft_filename.clone(),
            research_filename: export.research_filename.clone(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Draft a court process document
    pub async fn draft(
        &self,
        document_type: &str,
        facts: &str,
        parties: &str,
        export: bool,
    ) -> Result<FeatureOutput> {
        let prompt = PromptTemplates::draft_court_process(document_type, facts, parties);
        let filename = export.then_some(self.draft_filename.as_str());
        self.run(Feature::Draft, &prompt, filename).await
    }

    /// Research summary for a query
    pub async fn research(&self, query: &str, export: bool) -> Result<FeatureOutput> {
        let prompt = PromptTemplates::legal_research(query);
        let filename = export.then_some(self.research_filename.as_str());
        self.run(Feature::Research, &prompt, filename).await
    }

    /// Critique of a pasted draft
    pub async fn review(&self, document_text: &str) -> FeatureOutput {
        let prompt = PromptTemplates::draft_review(document_text);
        self.complete(Feature::Review, &prompt).await
    }

    /// Answer to a free-form question
    pub async fn chat(&self, question: &str) -> FeatureOutput {
        let prompt = PromptTemplates::chat_assistant(question);
        self.complete(Feature::Chat, &prompt).await
    }

    async fn complete(&self, feature: Feature, prompt: &str) -> FeatureOutput {
        debug!(%feature, prompt_len = prompt.len(), "running feature");
        FeatureOutput {
            feature,
            text: self.provider.complete_or_message(prompt).await,
            export_path: None,
        }
    }

    // The displayed text is exported as-is, including a rendered error.
    // Features without a document export ignore `export_filename`.
    async fn run(
        &self,
        feature: Feature,
        prompt: &str,
        export_filename: Option<&str>,
    ) -> Result<FeatureOutput> {
        let mut output = self.complete(feature, prompt).await;
        if let Some(filename) = export_filename.filter(|_| feature.is_exportable()) {
            output.export_path = Some(self.writer.write(&output.text, filename)?);
        }
        Ok(output)
    }
}
