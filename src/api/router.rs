use axum::{
    Router,
    http::{HeaderValue, Method, header::InvalidHeaderValue},
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, list_books};

/// Creates the API router with the catalog query endpoint
///
/// - GET /health - Health check
/// - GET /api/books - Paged, title-sorted book list
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Query endpoint (Read only)
        .route("/api/books", get(list_books))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// ブラウザクライアント用のCORSレイヤー
///
/// 読み取り専用APIのためGETのみ許可する。
/// オリジン未指定の場合はすべてのオリジンを許可する。
pub fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = match allowed_origin {
        Some(origin) => AllowOrigin::exact(HeaderValue::from_str(origin)?),
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .allow_origin(origin))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
