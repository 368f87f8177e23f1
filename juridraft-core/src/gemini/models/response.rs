use super::Content;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, rename = "promptFeedback")]
    pub prompt_feedback: Option<Value>,
    #[serde(default, rename = "usageMetadata")]
    pub usage_metadata: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part.
    ///
    /// The error names the first missing step of
    /// `candidates[0].content.parts[0].text`.
    pub fn first_text(&self) -> Result<&str, &'static str> {
        let candidate = self.candidates.first().ok_or("response contained no candidates")?;
        let content = candidate
            .content
            .as_ref()
            .ok_or("first candidate has no content")?;
        let part = content.parts.first().ok_or("first candidate has no parts")?;
        part.as_text().ok_or("first part has no text")
    }
}
