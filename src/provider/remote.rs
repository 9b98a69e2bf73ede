//! Transport to the remote translation API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::{RemoteCallError, Result, TranslatorError};

/// Request body accepted by DeepL's `/v2/translate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeepLRequest {
    pub text: Vec<String>,
    pub source_lang: String,
    pub target_lang: String,
}

impl DeepLRequest {
    /// Builds a single-text request with uppercased language codes.
    pub fn single(text: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            text: vec![text.to_string()],
            source_lang: source_language.to_uppercase(),
            target_lang: target_language.to_uppercase(),
        }
    }
}

/// One round trip to the translation endpoint, returning the decoded JSON body.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn call(&self, request: &DeepLRequest) -> std::result::Result<Value, RemoteCallError>;
}

/// reqwest-backed [`RemoteApi`] authenticating with a DeepL API key.
pub struct HttpRemoteApi {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpRemoteApi {
    /// Creates a transport whose every request is bounded by `timeout`.
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslatorError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl RemoteApi for HttpRemoteApi {
    async fn call(&self, request: &DeepLRequest) -> std::result::Result<Value, RemoteCallError> {
        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, format!("DeepL-Auth-Key {}", self.api_key))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteCallError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
