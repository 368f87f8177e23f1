use serde::{Deserialize, Serialize};
use std::fmt;

/// The assistant features exposed to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Draft a court process document from facts and parties
    Draft,
    /// Summarize the law on a research query
    Research,
    /// Critique a pasted draft
    Review,
    /// Free-form legal Q&A
    Chat,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Draft => "draft",
            Feature::Research => "research",
            Feature::Review => "review",
            Feature::Chat => "chat",
        }
    }

    /// Human readable title used in terminal headers
    pub fn title(&self) -> &'static str {
        match self {
            Feature::Draft => "Draft Court Process",
            Feature::Research => "Legal Research Assistant",
            Feature::Review => "Draft Review",
            Feature::Chat => "Legal Chat Assistant",
        }
    }

    /// Whether results of this feature are written to a document
    pub fn is_exportable(&self) -> bool {
        matches!(self, Feature::Draft | Feature::Research)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
