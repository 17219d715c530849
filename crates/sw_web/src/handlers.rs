use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use sw_core::ExtractOutput;
use tracing::{debug, error};

use crate::AppState;

pub async fn extract_article(
    State(state): State<Arc<AppState>>,
    Path(site): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let Some(extractor) = state.manager.get(&site) else {
        error!("no extractor registered for site \"{}\"", site);
        return (
            StatusCode::NOT_FOUND,
            Json(ExtractOutput::failure(format!(
                "Site \"{}\" is not supported",
                site
            ))),
        );
    };

    let url = params.get("url").map(String::as_str).unwrap_or("").trim();
    if url.is_empty() {
        return (
            StatusCode::OK,
            Json(ExtractOutput::failure("Missing \"url\" query parameter")),
        );
    }

    debug!("{}: article request for {}", site, url);
    (StatusCode::OK, Json(extractor.extract(url).await))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn service_meta(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.meta.clone())
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    error!("Not found: {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": 1,
            "message": format!("Requested endpoint \"{}\" does not exist", uri.path()),
        })),
    )
}
