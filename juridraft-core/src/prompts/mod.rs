//! Prompt composition for the four assistant features

pub mod feature;
pub mod templates;

pub use feature::Feature;
pub use templates::PromptTemplates;
