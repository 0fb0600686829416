//! HTTP service surface
//!
//! A single axum router shared by every deployment variant: health check,
//! JSON landing page, the `/ask` endpoint, optional static file serving,
//! and permissive CORS for development use.

use crate::error::{Error, Result};
use crate::pipeline::QaPipeline;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub sources: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Build the application router
pub fn router(pipeline: Arc<QaPipeline>, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        .route("/ask", post(ask));

    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.layer(CorsLayer::permissive()).with_state(pipeline)
}

/// Bind and serve until the process is stopped
pub async fn serve(
    pipeline: Arc<QaPipeline>,
    bind_addr: SocketAddr,
    static_dir: Option<PathBuf>,
) -> Result<()> {
    let app = router(pipeline, static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Other(e.to_string()))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({"message": "API inicial lista"}))
}

async fn ask(State(pipeline): State<Arc<QaPipeline>>, Json(request): Json<AskRequest>) -> Response {
    match pipeline.answer(&request.question).await {
        Ok(answer) => Json(AskResponse {
            answer: answer.answer,
            sources: answer.sources,
        })
        .into_response(),
        Err(err @ Error::Validation(_)) => {
            warn!("Rejected /ask request: {}", err);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    detail: err.to_string(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!("Error in /ask: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    detail: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
