//! Configuration management for consulta
//!
//! All configuration is environment-provided and loaded exactly once at
//! process start into an explicit [`Config`] value. Nothing below the
//! entry points reads ambient environment variables.

mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Per-surface pipeline settings
///
/// The HTTP service and the console session intentionally keep independent
/// generation models and top-k values.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Chat completion model identifier
    pub generation_model: String,

    /// Number of passages retrieved per question
    pub top_k: usize,
}

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key
    pub openai_api_key: String,

    /// OpenAI API base URL (overridable for testing)
    pub openai_base_url: String,

    /// Qdrant connection URL
    pub qdrant_url: String,

    /// Qdrant API key
    pub qdrant_api_key: String,

    /// Qdrant collection name
    pub collection: String,

    /// Embedding model identifier
    pub embedding_model: String,

    /// Settings for the HTTP surface
    pub http: SurfaceConfig,

    /// Settings for the console surface
    pub console: SurfaceConfig,

    /// HTTP server bind address
    pub bind_addr: SocketAddr,

    /// Directory served under /static (disabled when unset)
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Separated from [`Config::from_env`] so tests can supply a fixed map
    /// instead of mutating process-wide environment variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = required(&lookup, "OPENAI_API_KEY")?;
        let qdrant_url = required(&lookup, "QDRANT_URL")?;
        let qdrant_api_key = required(&lookup, "QDRANT_API_KEY")?;

        let openai_base_url =
            optional(&lookup, "OPENAI_BASE_URL").unwrap_or_else(default_openai_base_url);
        let collection =
            optional(&lookup, "QDRANT_COLLECTION").unwrap_or_else(default_collection_name);
        let embedding_model =
            optional(&lookup, "EMBEDDING_MODEL").unwrap_or_else(default_embedding_model);

        let http = SurfaceConfig {
            generation_model: optional(&lookup, "HTTP_GENERATION_MODEL")
                .unwrap_or_else(default_http_generation_model),
            top_k: parse_top_k(&lookup, "HTTP_TOP_K", default_http_top_k())?,
        };
        let console = SurfaceConfig {
            generation_model: optional(&lookup, "CONSOLE_GENERATION_MODEL")
                .unwrap_or_else(default_console_generation_model),
            top_k: parse_top_k(&lookup, "CONSOLE_TOP_K", default_console_top_k())?,
        };

        let bind_raw = optional(&lookup, "BIND_ADDR").unwrap_or_else(default_bind_addr);
        let bind_addr: SocketAddr = bind_raw
            .parse()
            .map_err(|_| Error::Config(format!("BIND_ADDR is not a valid address: {}", bind_raw)))?;

        let static_dir = optional(&lookup, "STATIC_DIR").map(PathBuf::from);

        Ok(Self {
            openai_api_key,
            openai_base_url,
            qdrant_url,
            qdrant_api_key,
            collection,
            embedding_model,
            http,
            console,
            bind_addr,
            static_dir,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or_else(|| Error::Config(format!("{} must be set", key)))
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_top_k<F>(lookup: &F, key: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    match optional(lookup, key) {
        None => Ok(default),
        Some(raw) => {
            let value: usize = raw
                .parse()
                .map_err(|_| Error::Config(format!("{} is not a valid number: {}", key, raw)))?;
            if value == 0 {
                return Err(Error::Config(format!("{} must be at least 1", key)));
            }
            Ok(value)
        }
    }
}
