//! Question-answering pipeline
//!
//! Four strictly ordered steps: embed the question, retrieve the nearest
//! passages, assemble the prompt, generate the answer. No branching, no
//! retries, no caching; any provider failure aborts the whole call.

mod prompt;

pub use prompt::{build_prompt, SYSTEM_INSTRUCTION};

use crate::embed::Embedder;
use crate::error::{Error, Result};
use crate::generate::{ChatMessage, Generator};
use crate::store::PassageSearch;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Pipeline settings fixed at construction
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Qdrant collection to search
    pub collection: String,
    /// Chat completion model identifier
    pub generation_model: String,
    /// Number of passages to retrieve
    pub top_k: usize,
}

/// Final answer returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    /// Generated answer text, trimmed of surrounding whitespace
    pub answer: String,
    /// Source labels of the passages used, in retrieval order
    pub sources: Option<Vec<String>>,
}

/// The question-answering pipeline
pub struct QaPipeline {
    embedder: Arc<dyn Embedder>,
    search: Arc<dyn PassageSearch>,
    generator: Arc<dyn Generator>,
    options: PipelineOptions,
}

impl QaPipeline {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        search: Arc<dyn PassageSearch>,
        generator: Arc<dyn Generator>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            embedder,
            search,
            generator,
            options,
        }
    }

    /// Answer a question against the configured collection.
    ///
    /// Fails with [`Error::Validation`] before any provider call when the
    /// question is empty after trimming.
    pub async fn answer(&self, question: &str) -> Result<Answer> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::Validation(
                "question must not be empty".to_string(),
            ));
        }

        info!("Answering question against collection {}", self.options.collection);

        let vector = self.embedder.embed(question).await?;
        debug!("Embedded question into {} dimensions", vector.len());

        let passages = self
            .search
            .search(&self.options.collection, vector, self.options.top_k)
            .await?;
        debug!("Retrieved {} passages", passages.len());

        let texts: Vec<String> = passages.iter().map(|p| p.text.clone()).collect();
        let sources: Vec<String> = passages.iter().filter_map(|p| p.source.clone()).collect();

        let prompt = build_prompt(&texts, question);
        let messages = [
            ChatMessage::system(SYSTEM_INSTRUCTION),
            ChatMessage::user(prompt),
        ];

        let raw = self
            .generator
            .complete(&self.options.generation_model, &messages)
            .await?;

        Ok(Answer {
            answer: raw.trim().to_string(),
            sources: if sources.is_empty() {
                None
            } else {
                Some(sources)
            },
        })
    }
}
