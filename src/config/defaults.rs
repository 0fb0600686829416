//! Default values for configuration

/// Default OpenAI API base URL
pub fn default_openai_base_url() -> String {
    "https://api.openai.com".to_string()
}

/// Default Qdrant collection name
pub fn default_collection_name() -> String {
    "mi_coleccion".to_string()
}

/// Default embedding model
pub fn default_embedding_model() -> String {
    "text-embedding-3-small".to_string()
}

/// Default generation model for the HTTP surface
pub fn default_http_generation_model() -> String {
    "gpt-3.5-turbo".to_string()
}

/// Default number of passages retrieved per question on the HTTP surface
pub fn default_http_top_k() -> usize {
    5
}

/// Default generation model for the console surface
pub fn default_console_generation_model() -> String {
    "gpt-4".to_string()
}

/// Default number of passages retrieved per question on the console surface
pub fn default_console_top_k() -> usize {
    10
}

/// Default bind address for the HTTP server
pub fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}
