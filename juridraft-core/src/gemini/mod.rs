//! Gemini `generateContent` client
//!
//! The HTTP settings live in `client::config`, the wire envelopes in
//! `models`.

pub mod client;
pub mod models;

pub use client::{Client, ClientConfig};
pub use models::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
