//! Provider Module
//!
//! Translation providers and the retry machinery they share.

mod deepl;
mod remote;
mod retry;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Language;

pub use deepl::{DeepLProvider, AUTO_LANGUAGE, SUPPORTED_LANGUAGES};
pub use remote::{DeepLRequest, HttpRemoteApi, RemoteApi};
pub use retry::RetryPolicy;

/// A remote translation backend with a closed set of languages.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translates one text. Fails with `UnsupportedLanguage` before any
    /// remote call if either code is outside the supported set.
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String>;

    /// Translates every text, returning results in input order. Fails as a
    /// whole if any single text cannot be translated.
    async fn translate_batch(
        &self,
        texts: &[String],
        source_language: &str,
        target_language: &str,
    ) -> Result<Vec<String>>;

    /// The supported languages, in a fixed order.
    fn supported_languages(&self) -> Vec<Language>;

    fn is_language_supported(&self, code: &str) -> bool;
}
