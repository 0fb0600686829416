//! Qdrant vector search integration
//!
//! Wraps the Qdrant client behind a small search trait so the pipeline and
//! its tests do not depend on a live cluster. Only nearest-neighbor search
//! is needed here; the collection is indexed elsewhere.

use crate::error::{Error, Result};
use async_trait::async_trait;
use qdrant_client::qdrant::value::Kind;
use qdrant_client::qdrant::{SearchPointsBuilder, Value};
use qdrant_client::Qdrant;
use std::collections::HashMap;
use tracing::{debug, warn};

/// One retrieved passage, in relevance-rank order
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPassage {
    /// Passage text from the `text_content` payload field
    pub text: String,
    /// Optional source label from the `source` payload field
    pub source: Option<String>,
    /// Similarity score reported by Qdrant
    pub score: f32,
}

/// Trait for nearest-neighbor passage search
#[async_trait]
pub trait PassageSearch: Send + Sync {
    /// Return up to `limit` passages nearest to `vector` in `collection`
    async fn search(
        &self,
        collection: &str,
        vector: Vec<f32>,
        limit: usize,
    ) -> Result<Vec<ScoredPassage>>;
}

/// Passage search backed by a Qdrant cluster
pub struct QdrantSearch {
    client: Qdrant,
}

impl QdrantSearch {
    /// Connect to Qdrant with URL and API key
    pub fn connect(url: &str, api_key: &str) -> Result<Self> {
        debug!("Connecting to Qdrant at {}", url);

        let client = Qdrant::from_url(url)
            .api_key(api_key.to_string())
            .skip_compatibility_check()
            .build()
            .map_err(|e| Error::Config(format!("Failed to build Qdrant client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PassageSearch for QdrantSearch {
    async fn search(
        &self,
        collection: &str,
        vector: Vec<f32>,
        limit: usize,
    ) -> Result<Vec<ScoredPassage>> {
        debug!("Searching collection {} with limit {}", collection, limit);

        let request =
            SearchPointsBuilder::new(collection, vector, limit as u64).with_payload(true);

        let response = self.client.search_points(request).await?;

        let passages = response
            .result
            .into_iter()
            .map(|point| passage_from_payload(&point.payload, point.score))
            .collect();

        Ok(passages)
    }
}

/// Extract a passage from a Qdrant point payload.
///
/// A hit without a `text_content` string contributes an empty passage rather
/// than failing the whole search; the prompt keeps its position so ordering
/// is preserved.
pub fn passage_from_payload(payload: &HashMap<String, Value>, score: f32) -> ScoredPassage {
    let text = match payload_str(payload, "text_content") {
        Some(text) => text,
        None => {
            warn!("Search hit has no text_content payload field; using empty passage");
            String::new()
        }
    };
    let source = payload_str(payload, "source").filter(|s| !s.is_empty());

    ScoredPassage {
        text,
        source,
        score,
    }
}

fn payload_str(payload: &HashMap<String, Value>, key: &str) -> Option<String> {
    match payload.get(key)?.kind.as_ref()? {
        Kind::StringValue(s) => Some(s.clone()),
        _ => None,
    }
}
