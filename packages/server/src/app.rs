//! Application router and handlers.
//!
//! Thin wiring: routes in, pipeline out. The analyze endpoint always
//! answers HTTP 200; pipeline failures are carried in the result's
//! `status` field, never as an HTTP error.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use verification::{AnalysisRequest, AnalysisResult, GrokModel, Pipeline, TavilySearch};

/// Shared application state: one pipeline, built at startup.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline<GrokModel, TavilySearch>>,
}

/// Build the Axum application router.
pub fn build_app(pipeline: Pipeline<GrokModel, TavilySearch>) -> Router {
    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Service banner.
async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "TruthCore API is running",
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness probe.
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Run one analysis. Always HTTP 200; failures live in `status`.
async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Json<AnalysisResult> {
    Json(state.pipeline.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_shape() {
        let Json(body) = health_handler().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_root_banner() {
        let Json(body) = root_handler().await;
        assert_eq!(body["status"], "healthy");
        assert!(body["version"].is_string());
    }
}
