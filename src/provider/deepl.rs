//! DeepL translation provider with retrying remote calls.

use async_trait::async_trait;
use futures::future::join_all;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{LanguageRole, RemoteCallError, Result, TranslatorError};
use crate::models::Language;
use crate::provider::{DeepLRequest, HttpRemoteApi, RemoteApi, RetryPolicy, TranslationProvider};

/// Source code meaning "let the provider detect the language".
pub const AUTO_LANGUAGE: &str = "AUTO";

/// Languages this deployment accepts, as (code, name).
pub const SUPPORTED_LANGUAGES: [(&str, &str); 3] =
    [("EN", "English"), ("ES", "Spanish"), ("RU", "Russian")];

/// Provider calling the DeepL API through a [`RemoteApi`].
pub struct DeepLProvider<R = HttpRemoteApi> {
    remote: R,
    retry: RetryPolicy,
}

impl DeepLProvider<HttpRemoteApi> {
    /// Builds the HTTP-backed provider from the gateway configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let remote = HttpRemoteApi::new(
            config.api_url.clone(),
            config.api_key.clone(),
            config.request_timeout(),
        )?;
        Ok(Self::new(remote, config.retry_policy()))
    }
}

impl<R: RemoteApi> DeepLProvider<R> {
    pub fn new(remote: R, retry: RetryPolicy) -> Self {
        Self { remote, retry }
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    fn validate_languages(&self, source_language: &str, target_language: &str) -> Result<()> {
        if !self.is_language_supported(target_language) {
            return Err(TranslatorError::UnsupportedLanguage {
                role: LanguageRole::Target,
                code: target_language.to_string(),
            });
        }

        if source_language != AUTO_LANGUAGE && !self.is_language_supported(source_language) {
            return Err(TranslatorError::UnsupportedLanguage {
                role: LanguageRole::Source,
                code: source_language.to_string(),
            });
        }

        Ok(())
    }

    async fn translate_with_retry(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        let request = DeepLRequest::single(text, source_language, target_language);
        let request = &request;
        let remote = &self.remote;

        self.retry
            .run(move || async move {
                let body = remote.call(request).await?;
                extract_translation(&body)
            })
            .await
    }
}

/// Pulls `translations[0].text` out of a DeepL response body.
fn extract_translation(body: &Value) -> std::result::Result<String, RemoteCallError> {
    body.get("translations")
        .and_then(Value::as_array)
        .and_then(|translations| translations.first())
        .and_then(|first| first.get("text"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            RemoteCallError::InvalidResponse("missing translations[0].text".to_string())
        })
}

#[async_trait]
impl<R: RemoteApi> TranslationProvider for DeepLProvider<R> {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        self.validate_languages(source_language, target_language)?;
        self.translate_with_retry(text, source_language, target_language)
            .await
    }

    async fn translate_batch(
        &self,
        texts: &[String],
        source_language: &str,
        target_language: &str,
    ) -> Result<Vec<String>> {
        self.validate_languages(source_language, target_language)?;
        debug!(
            "Translating {} text(s) from {} to {}",
            texts.len(),
            source_language,
            target_language
        );

        // Every call runs to completion before the first error is reported
        let calls = texts
            .iter()
            .map(|text| self.translate_with_retry(text, source_language, target_language));
        join_all(calls).await.into_iter().collect()
    }

    fn supported_languages(&self) -> Vec<Language> {
        SUPPORTED_LANGUAGES
            .iter()
            .map(|(code, name)| Language::new(*code, *name))
            .collect()
    }

    fn is_language_supported(&self, code: &str) -> bool {
        code == AUTO_LANGUAGE
            || SUPPORTED_LANGUAGES
                .iter()
                .any(|(supported, _)| supported.eq_ignore_ascii_case(code))
    }
}
