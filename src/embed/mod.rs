//! Question embedding
//!
//! This module provides an abstraction over embedding providers with:
//! - A trait for different embedding backends
//! - An OpenAI embeddings API backend

mod openai;

pub use openai::*;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for embedding providers
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text into one vector
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Get the model name
    fn model_name(&self) -> &str;
}
