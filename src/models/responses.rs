//! Response DTOs for the translation API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::{Language, TranslationResult};

/// One entry of GET /api/v1/translate/languages
#[derive(Debug, Clone, Serialize)]
pub struct LanguageResponse {
    pub code: String,
    pub name: String,
}

impl From<Language> for LanguageResponse {
    fn from(language: Language) -> Self {
        Self {
            code: language.code,
            name: language.name,
        }
    }
}

/// Response body for a single translation
#[derive(Debug, Clone, Serialize)]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
}

impl From<TranslationResult> for TranslationResponse {
    fn from(result: TranslationResult) -> Self {
        Self {
            original_text: result.original_text,
            translated_text: result.translated_text,
            source_language: result.source_language,
            target_language: result.target_language,
        }
    }
}

/// Response body for batch translation, items in request order
#[derive(Debug, Clone, Serialize)]
pub struct BatchTranslationResponse {
    pub translations: Vec<TranslationResponse>,
}

impl BatchTranslationResponse {
    pub fn new(results: Vec<TranslationResult>) -> Self {
        Self {
            translations: results.into_iter().map(TranslationResponse::from).collect(),
        }
    }
}

/// Plain message body used by informational endpoints
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Active cache backend name
    pub cache_backend: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(cache_backend: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            cache_backend: cache_backend.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
