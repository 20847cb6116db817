use anyhow::{Context, Result};
use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use boolsearch_core::{build_index, search, DocId, IndexStats, InvertedIndex};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}
fn default_limit() -> usize { 10 }

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub text: String,
}

/// Shared read-only state: the index and the corpus it was built from.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<InvertedIndex>,
    pub docs: Arc<Vec<String>>,
}

/// Load a line-per-document corpus and build the router over it.
pub fn build_app(documents_path: &str) -> Result<Router> {
    let text = std::fs::read_to_string(documents_path)
        .with_context(|| format!("reading corpus {documents_path}"))?;
    let docs: Vec<String> = text.lines().map(str::to_string).collect();
    tracing::info!(path = documents_path, num_docs = docs.len(), "loaded corpus");
    Ok(build_app_from_documents(docs))
}

pub fn build_app_from_documents(docs: Vec<String>) -> Router {
    let index = build_index(&docs);
    let app_state = AppState { index: Arc::new(index), docs: Arc::new(docs) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/doc/:doc_id", get(doc_handler))
        .route("/stats", get(stats_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let ids = search(&state.index, &params.q);
    let total_hits = ids.len();
    let limit = params.limit.clamp(1, 100);
    let results = ids
        .into_iter()
        .take(limit)
        .filter_map(|doc_id| {
            state.docs.get(doc_id as usize).map(|text| SearchHit { doc_id, text: text.clone() })
        })
        .collect();
    let elapsed = start.elapsed();
    tracing::debug!(query = %params.q, total_hits, "search");
    Json(SearchResponse { query: params.q, took_s: elapsed.as_secs_f64(), total_hits, results })
}

pub async fn doc_handler(
    State(state): State<AppState>,
    Path(doc_id): Path<DocId>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    match state.docs.get(doc_id as usize) {
        Some(text) => Ok(Json(serde_json::json!({ "doc_id": doc_id, "text": text }))),
        None => Err((StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "not found" })))),
    }
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<IndexStats> {
    Json(state.index.stats())
}
