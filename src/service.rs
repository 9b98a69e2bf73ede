//! Translation Service
//!
//! Cache-aside orchestration over a [`TranslationProvider`] and a
//! [`TranslationCache`]. One instance is built at startup and shared by every
//! request handler.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::cache::{make_key, TranslationCache};
use crate::error::{Result, TranslatorError};
use crate::models::{Language, TranslationResult};
use crate::provider::TranslationProvider;

// == Translation Service ==
pub struct TranslationService {
    provider: Box<dyn TranslationProvider>,
    cache: Box<dyn TranslationCache>,
}

impl TranslationService {
    pub fn new(provider: Box<dyn TranslationProvider>, cache: Box<dyn TranslationCache>) -> Self {
        Self { provider, cache }
    }

    /// The cache this service reads and fills.
    pub fn cache(&self) -> &dyn TranslationCache {
        self.cache.as_ref()
    }

    // == Translate ==
    /// Translates one text, consulting the cache first.
    ///
    /// On a miss the provider result is written back before returning.
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<TranslationResult> {
        let cache_key = make_key(text, source_language, target_language);

        let translated_text = match self.cache.get(&cache_key).await? {
            Some(cached) => {
                info!("Cache hit for key: {}", cache_key);
                cached
            }
            None => {
                debug!("Cache miss for key: {}", cache_key);
                let translated = self
                    .provider
                    .translate(text, source_language, target_language)
                    .await?;
                self.cache.set(&cache_key, &translated, None).await?;
                translated
            }
        };

        Ok(TranslationResult::new(
            text,
            translated_text,
            source_language,
            target_language,
        ))
    }

    // == Translate Batch ==
    /// Translates many texts with a single provider call for the cache misses.
    ///
    /// Each distinct text is looked up once. Results come back in input order,
    /// and repeated texts share one translation.
    pub async fn translate_batch(
        &self,
        texts: &[String],
        source_language: &str,
        target_language: &str,
    ) -> Result<Vec<TranslationResult>> {
        let mut resolved: HashMap<&str, String> = HashMap::with_capacity(texts.len());
        let mut uncached: Vec<&str> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::with_capacity(texts.len());

        for text in texts {
            let text = text.as_str();
            if !seen.insert(text) {
                continue;
            }

            let cache_key = make_key(text, source_language, target_language);
            match self.cache.get(&cache_key).await? {
                Some(cached) => {
                    info!("Cache hit for key: {}", cache_key);
                    resolved.insert(text, cached);
                }
                None => uncached.push(text),
            }
        }

        if !uncached.is_empty() {
            debug!(
                "Batch of {} text(s): {} cached, {} to translate",
                texts.len(),
                resolved.len(),
                uncached.len()
            );

            let request: Vec<String> = uncached.iter().map(|text| text.to_string()).collect();
            let translated = self
                .provider
                .translate_batch(&request, source_language, target_language)
                .await?;

            if translated.len() != uncached.len() {
                return Err(TranslatorError::Internal(format!(
                    "Provider returned {} translations for {} texts",
                    translated.len(),
                    uncached.len()
                )));
            }

            for (text, translation) in uncached.into_iter().zip(translated) {
                let cache_key = make_key(text, source_language, target_language);
                self.cache.set(&cache_key, &translation, None).await?;
                resolved.insert(text, translation);
            }
        }

        texts
            .iter()
            .map(|text| {
                let translated_text = resolved.get(text.as_str()).ok_or_else(|| {
                    TranslatorError::Internal(format!("No translation resolved for '{}'", text))
                })?;
                Ok(TranslationResult::new(
                    text.as_str(),
                    translated_text.as_str(),
                    source_language,
                    target_language,
                ))
            })
            .collect()
    }

    /// Supported languages, straight from the provider.
    pub fn get_supported_languages(&self) -> Vec<Language> {
        self.provider.supported_languages()
    }

    /// Removes every cached translation.
    pub async fn clear_cache(&self) -> Result<()> {
        self.cache.clear().await
    }

    /// Releases cache resources at process shutdown.
    pub async fn shutdown(&self) -> Result<()> {
        self.cache.close().await
    }
}
