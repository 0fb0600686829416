//! consulta - question answering over a Qdrant collection
//!
//! The core of this crate is the [`pipeline::QaPipeline`]: embed a question
//! with the OpenAI embeddings API, retrieve the nearest passages from a
//! Qdrant collection, assemble a fixed prompt, and generate a grounded
//! answer with the OpenAI chat completions API.
//!
//! Three entry points share that pipeline:
//! - an axum HTTP service ([`server`])
//! - an interactive console session ([`console`])
//! - a one-shot CLI query (`consulta ask`)

pub mod config;
pub mod console;
pub mod embed;
pub mod error;
pub mod generate;
pub mod pipeline;
pub mod server;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{Answer, QaPipeline};
