//! API Handlers
//!
//! HTTP request handlers for each translation endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::cache::{InMemoryCache, RedisCache, TranslationCache};
use crate::config::{CacheBackend, Config};
use crate::error::{Result, TranslatorError};
use crate::models::{
    BatchTranslationRequest, BatchTranslationResponse, HealthResponse, LanguageResponse,
    MessageResponse, TranslationRequest, TranslationResponse,
};
use crate::provider::DeepLProvider;
use crate::service::TranslationService;

/// Application state shared across all handlers.
///
/// Holds the single translation service built at startup.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TranslationService>,
}

impl AppState {
    /// Creates a new AppState around an already built service.
    pub fn new(service: TranslationService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Selects the cache backend and builds the HTTP-backed DeepL provider.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache: Box<dyn TranslationCache> = match config.cache_backend {
            CacheBackend::Memory => Box::new(InMemoryCache::new()),
            CacheBackend::Redis => {
                Box::new(RedisCache::with_ttl(config.redis_url.clone(), config.cache_ttl()))
            }
        };
        info!("Using {} translation cache", cache.backend_name());

        let provider = DeepLProvider::from_config(config)?;
        Ok(Self::new(TranslationService::new(Box::new(provider), cache)))
    }
}

/// Handler for GET /api/v1/translate/languages
pub async fn languages_handler(State(state): State<AppState>) -> Json<Vec<LanguageResponse>> {
    let languages = state
        .service
        .get_supported_languages()
        .into_iter()
        .map(LanguageResponse::from)
        .collect();
    Json(languages)
}

/// Handler for POST /api/v1/translate
///
/// Translates a single text, answering from the cache when possible.
pub async fn translate_handler(
    State(state): State<AppState>,
    Json(req): Json<TranslationRequest>,
) -> Result<Json<TranslationResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(TranslatorError::InvalidRequest(error_msg));
    }

    let result = state
        .service
        .translate(&req.text, &req.source_language, &req.target_language)
        .await?;

    Ok(Json(result.into()))
}

/// Handler for POST /api/v1/translate/batch
pub async fn translate_batch_handler(
    State(state): State<AppState>,
    Json(req): Json<BatchTranslationRequest>,
) -> Result<Json<BatchTranslationResponse>> {
    let results = state
        .service
        .translate_batch(&req.texts, &req.source_language, &req.target_language)
        .await?;

    Ok(Json(BatchTranslationResponse::new(results)))
}

/// Handler for DELETE /api/v1/translate/cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    state.service.clear_cache().await?;
    info!("Translation cache cleared");
    Ok(Json(MessageResponse::new("Translation cache cleared")))
}

/// Handler for GET /api/v1/hello
pub async fn hello_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from Translator API!"))
}

/// Handler for GET /api/v1/
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to Translator API"))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.service.cache().backend_name()))
}
