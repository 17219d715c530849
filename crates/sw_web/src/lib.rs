use std::sync::Arc;

use axum::{middleware, routing::any, routing::get, Router};
use tower_http::cors::CorsLayer;

pub mod auth;
pub mod handlers;
pub mod state;

pub use state::{AppState, ServiceMeta};

/// Wires the extraction endpoints behind API-key auth; health, meta and the
/// 404 fallback stay open. Status-code mapping lives here, never in the
/// extractors.
pub async fn create_app(state: AppState) -> Router {
    let shared = Arc::new(state);
    let cors = CorsLayer::permissive();

    let protected = Router::new()
        .route("/api/:site/article", get(handlers::extract_article))
        .route_layer(middleware::from_fn_with_state(
            shared.clone(),
            auth::require_api_key,
        ));

    Router::new()
        .merge(protected)
        .route("/api/health", any(handlers::health))
        .route("/", get(handlers::service_meta))
        .fallback(handlers::not_found)
        .layer(cors)
        .with_state(shared)
}
