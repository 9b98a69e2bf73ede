//! Request DTOs for the translation API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Source language used when a request omits one.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "AUTO";

/// Target language used when a request omits one.
pub const DEFAULT_TARGET_LANGUAGE: &str = "EN";

fn default_source_language() -> String {
    DEFAULT_SOURCE_LANGUAGE.to_string()
}

fn default_target_language() -> String {
    DEFAULT_TARGET_LANGUAGE.to_string()
}

/// Request body for single translation (POST /api/v1/translate)
///
/// # Fields
/// - `text`: The text to translate, must be non-empty
/// - `source_language`: Source language code (default "AUTO")
/// - `target_language`: Target language code (default "EN")
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

impl TranslationRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.text.is_empty() {
            return Some("Text cannot be empty".to_string());
        }
        None
    }
}

/// Request body for batch translation (POST /api/v1/translate/batch)
#[derive(Debug, Clone, Deserialize)]
pub struct BatchTranslationRequest {
    pub texts: Vec<String>,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}
