//! API Module
//!
//! HTTP handlers and routing for the translation gateway REST API.
//!
//! # Endpoints
//! - `GET /api/v1/translate/languages` - Supported languages
//! - `POST /api/v1/translate` - Translate one text
//! - `POST /api/v1/translate/batch` - Translate many texts
//! - `DELETE /api/v1/translate/cache` - Clear the translation cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, API_PREFIX};
