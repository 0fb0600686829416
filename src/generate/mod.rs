//! Answer generation
//!
//! Abstraction over chat-completion providers, with an OpenAI backend.

mod openai;

pub use openai::*;

use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;

/// One turn of a chat conversation
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Trait for chat-completion providers
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a completion for the given conversation
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String>;
}
