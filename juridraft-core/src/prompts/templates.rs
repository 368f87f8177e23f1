//! Fixed instruction templates.
//!
//! Inputs are interpolated verbatim. Nothing is validated or escaped, so an
//! empty field simply leaves a gap in the instruction.

/// Prompt template collection
pub struct PromptTemplates;

impl PromptTemplates {
    /// Court process drafting prompt
    pub fn draft_court_process(document_type: &str, facts: &str, parties: &str) -> String {
        format!(
            "Draft a {document_type} court process document based on the following facts:\n\n\
             Facts: {facts}\n\n\
             Parties: {parties}\n\n\
             Format it as a formal legal document."
        )
    }

    /// Legal research summary prompt
    pub fn legal_research(query: &str) -> String {
        format!(
            "Provide a detailed legal research summary on Nigerian law related to the following query:\n{query}"
        )
    }

    /// Draft critique prompt
    pub fn draft_review(document_text: &str) -> String {
        format!(
            "Review this legal draft, identify errors, inconsistencies, or improvements, \
             and provide clear suggestions:\n\n{document_text}"
        )
    }

    /// General legal Q&A prompt
    pub fn chat_assistant(question: &str) -> String {
        format!(
            "You are a helpful Nigerian legal assistant. Answer this query clearly and professionally:\n{question}"
        )
    }
}
