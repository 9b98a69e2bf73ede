//! Error types for the translation gateway
//!
//! Provides unified error handling using thiserror.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Language Role ==
/// Which side of a translation a language code was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRole {
    Source,
    Target,
}

impl fmt::Display for LanguageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageRole::Source => f.write_str("Source"),
            LanguageRole::Target => f.write_str("Target"),
        }
    }
}

// == Remote Call Error ==
/// Failure of a single call to the remote translation API.
///
/// Every variant is transient from the provider's point of view and is
/// eligible for retry.
#[derive(Error, Debug)]
pub enum RemoteCallError {
    /// Transport failure (connect, timeout, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote API answered with a non-success status
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Success status but the body lacked the expected translation field
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

// == Translator Error Enum ==
/// Unified error type for the translation gateway.
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// Language code outside the provider's supported table
    #[error("{role} language '{code}' is not supported")]
    UnsupportedLanguage { role: LanguageRole, code: String },

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Every retry attempt against the remote API failed
    #[error("Translation failed after {attempts} attempts")]
    ProviderExhausted {
        attempts: u32,
        #[source]
        source: RemoteCallError,
    },

    /// Networked cache backend could not be reached or rejected a command
    #[error("Cache unavailable")]
    CacheUnavailable(#[from] redis::RedisError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TranslatorError {
    /// Returns true for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TranslatorError::UnsupportedLanguage { .. } | TranslatorError::InvalidRequest(_)
        )
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for TranslatorError {
    fn into_response(self) -> Response {
        let (status, message) = if self.is_client_error() {
            (StatusCode::BAD_REQUEST, self.to_string())
        } else {
            let detail = match std::error::Error::source(&self) {
                Some(cause) => format!("{}: {}", self, cause),
                None => self.to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Translation failed: {}", detail),
            )
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the translation gateway.
pub type Result<T> = std::result::Result<T, TranslatorError>;
