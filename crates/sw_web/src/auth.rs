use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::AppState;

/// API-key check. The key may arrive as a bearer token, an `x-api-key`
/// header or an `apikey` query parameter; the first non-empty source wins.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let bearer = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start_matches("Bearer").trim())
        .unwrap_or("");
    let header_key = req
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .unwrap_or("");
    let query_key = req
        .uri()
        .query()
        .and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(k, _)| k == "apikey")
                .map(|(_, v)| v.trim().to_string())
        })
        .unwrap_or_default();

    let presented = [bearer, header_key, query_key.as_str()]
        .into_iter()
        .find(|k| !k.is_empty())
        .unwrap_or("");

    if presented.is_empty() || presented != state.api_key {
        debug!("rejected request to {} with missing or bad api key", req.uri().path());
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "status": 401,
                "error": 1,
                "message": "Unauthorized",
            })),
        )
            .into_response();
    }

    next.run(req).await
}
