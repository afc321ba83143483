//! Axum route handlers for the gistscan API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use gistscan_client::{GistScanner, Upstream};
use gistscan_core::{SearchRequest, SearchResult};

use crate::error::GatewayError;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around a shared scanner.
///
/// The route table is fixed here; nothing mutates it after startup.
pub fn create_router<U: Upstream + 'static>(scanner: Arc<GistScanner<U>>) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/api/v1/search", post(search::<U>))
        .with_state(scanner)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /ping` — liveness check, answers `pong` as plain text.
pub async fn ping() -> &'static str {
    "pong"
}

/// `POST /api/v1/search` — search a user's gists for a pattern.
///
/// Unknown users and rate-limited lookups still answer 200; the outcome is in
/// the `status` field of the body.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the body is not a JSON object
/// with string `username` and `pattern` fields, and [`GatewayError::Client`]
/// for an invalid pattern or a failed gist lookup.
pub async fn search<U: Upstream + 'static>(
    State(scanner): State<Arc<GistScanner<U>>>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResult>, GatewayError> {
    let Json(request) = body.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let result = scanner.search(request).await?;
    Ok(Json(result))
}
