//! Values produced by the translation core.

use serde::Serialize;

/// A language the provider can translate to or from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Uppercase language code, e.g. "EN"
    pub code: String,
    /// Display name, e.g. "English"
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Outcome of translating one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
}

impl TranslationResult {
    pub fn new(
        original_text: impl Into<String>,
        translated_text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            translated_text: translated_text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}
