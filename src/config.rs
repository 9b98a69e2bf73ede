//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::provider::RetryPolicy;

/// Default DeepL endpoint (free tier).
pub const DEFAULT_API_URL: &str = "https://api-free.deepl.com/v2/translate";

/// Default Redis connection URL.
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379/0";

// == Cache Backend ==
/// Which cache implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheBackend {
    /// Volatile in-process map
    #[default]
    Memory,
    /// Networked Redis store with TTL expiry
    Redis,
}

impl CacheBackend {
    /// Parses a `CACHE_TYPE` value, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Some(CacheBackend::Memory),
            "redis" => Some(CacheBackend::Redis),
            _ => None,
        }
    }
}

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// DeepL API key sent in the Authorization header
    pub api_key: String,
    /// DeepL translate endpoint
    pub api_url: String,
    /// Cache implementation selection
    pub cache_backend: CacheBackend,
    /// Redis connection URL (used when `cache_backend` is Redis)
    pub redis_url: String,
    /// TTL in seconds for Redis entries
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum attempts per remote call
    pub max_retries: u32,
    /// First backoff delay in milliseconds
    pub retry_initial_delay_ms: u64,
    /// Exponential backoff base
    pub retry_backoff_base: f64,
    /// Backoff cap in milliseconds
    pub retry_max_delay_ms: u64,
    /// Per-request timeout for the remote API in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEEPL_API_KEY` - Provider API key (default: empty)
    /// - `DEEPL_API_URL` - Provider endpoint (default: DeepL free tier)
    /// - `CACHE_TYPE` - `memory` or `redis` (default: memory)
    /// - `REDIS_URL` - Redis connection URL (default: redis://localhost:6379/0)
    /// - `CACHE_TTL` - Redis entry TTL in seconds (default: 86400)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `MAX_RETRIES` - Attempts per remote call (default: 3)
    /// - `RETRY_INITIAL_DELAY_MS` - First backoff delay (default: 500)
    /// - `RETRY_BACKOFF_BASE` - Backoff base (default: 2.0)
    /// - `RETRY_MAX_DELAY_MS` - Backoff cap (default: 30000)
    /// - `REQUEST_TIMEOUT_SECS` - Remote call timeout (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let cache_backend = match env::var("CACHE_TYPE") {
            Ok(value) => CacheBackend::parse(&value).unwrap_or_else(|| {
                warn!("Unknown CACHE_TYPE '{}', falling back to memory", value);
                CacheBackend::Memory
            }),
            Err(_) => defaults.cache_backend,
        };

        Self {
            api_key: env::var("DEEPL_API_KEY").unwrap_or(defaults.api_key),
            api_url: env::var("DEEPL_API_URL").unwrap_or(defaults.api_url),
            cache_backend,
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            max_retries: parse_var("MAX_RETRIES").unwrap_or(defaults.max_retries),
            retry_initial_delay_ms: parse_var("RETRY_INITIAL_DELAY_MS")
                .unwrap_or(defaults.retry_initial_delay_ms),
            retry_backoff_base: parse_var("RETRY_BACKOFF_BASE")
                .unwrap_or(defaults.retry_backoff_base),
            retry_max_delay_ms: parse_var("RETRY_MAX_DELAY_MS")
                .unwrap_or(defaults.retry_max_delay_ms),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    /// Builds the provider retry policy from the configured values.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_retries,
            initial_delay: Duration::from_millis(self.retry_initial_delay_ms),
            exponential_base: self.retry_backoff_base,
            max_delay: Duration::from_millis(self.retry_max_delay_ms),
        }
    }

    /// Remote API request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Redis entry TTL.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            cache_backend: CacheBackend::Memory,
            redis_url: DEFAULT_REDIS_URL.to_string(),
            cache_ttl: 86_400,
            server_port: 8000,
            max_retries: 3,
            retry_initial_delay_ms: 500,
            retry_backoff_base: 2.0,
            retry_max_delay_ms: 30_000,
            request_timeout_secs: 30,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
