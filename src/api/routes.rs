//! API Routes
//!
//! Configures the Axum router with all translation gateway endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_cache_handler, health_handler, hello_handler, languages_handler, root_handler,
    translate_batch_handler, translate_handler, AppState,
};

/// Prefix shared by all translation routes.
pub const API_PREFIX: &str = "/api/v1";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/v1/translate/languages` - Supported languages
/// - `POST /api/v1/translate` - Translate one text
/// - `POST /api/v1/translate/batch` - Translate many texts
/// - `DELETE /api/v1/translate/cache` - Clear the translation cache
/// - `GET /api/v1/hello`, `GET /api/v1/` - Greeting endpoints
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(&format!("{API_PREFIX}/"), get(root_handler))
        .route(&format!("{API_PREFIX}/hello"), get(hello_handler))
        .route(&format!("{API_PREFIX}/translate"), post(translate_handler))
        .route(
            &format!("{API_PREFIX}/translate/batch"),
            post(translate_batch_handler),
        )
        .route(
            &format!("{API_PREFIX}/translate/languages"),
            get(languages_handler),
        )
        .route(
            &format!("{API_PREFIX}/translate/cache"),
            delete(clear_cache_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
