//! Redis-backed translation cache with per-entry TTL.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::cache::{TranslationCache, DEFAULT_TTL};
use crate::error::Result;

/// Bound on establishing a connection to the server.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
/// Bound on a single command round trip.
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(2);
/// Reconnect attempts after the first one fails.
const CONNECT_RETRIES: usize = 1;

// == Redis Cache ==
/// Networked cache storing each translation under its key with an expiry.
///
/// The connection is opened on first use and reused afterwards. `clear` only
/// flushes the logical database selected by the URL.
pub struct RedisCache {
    redis_url: String,
    default_ttl: Duration,
    connection: Mutex<Option<ConnectionManager>>,
}

impl RedisCache {
    /// Creates a cache for `redis_url` using the 24 hour default TTL.
    ///
    /// No connection is made until the first operation.
    pub fn new(redis_url: impl Into<String>) -> Self {
        Self::with_ttl(redis_url, DEFAULT_TTL)
    }

    /// Creates a cache with a custom default TTL.
    pub fn with_ttl(redis_url: impl Into<String>, default_ttl: Duration) -> Self {
        Self {
            redis_url: redis_url.into(),
            default_ttl,
            connection: Mutex::new(None),
        }
    }

    pub fn redis_url(&self) -> &str {
        &self.redis_url
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Returns the shared connection handle, opening it on first use.
    ///
    /// The lock is not held while connecting, so an unreachable server fails
    /// each caller within the connect timeout instead of queueing them.
    async fn connection(&self) -> Result<ConnectionManager> {
        if let Some(conn) = self.connection.lock().await.as_ref() {
            return Ok(conn.clone());
        }

        let client = redis::Client::open(self.redis_url.as_str())?;
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(CONNECT_RETRIES)
            .set_connection_timeout(CONNECT_TIMEOUT)
            .set_response_timeout(RESPONSE_TIMEOUT);
        let conn = ConnectionManager::new_with_config(client, config).await?;

        let mut guard = self.connection.lock().await;
        match guard.as_ref() {
            // Another caller connected first
            Some(existing) => Ok(existing.clone()),
            None => {
                info!("Connected to Redis cache at {}", self.redis_url);
                *guard = Some(conn.clone());
                Ok(conn)
            }
        }
    }
}

#[async_trait]
impl TranslationCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        // EX rejects zero, so sub-second TTLs round up to one second
        let seconds = ttl.unwrap_or(self.default_ttl).as_secs().max(1);

        let mut conn = self.connection().await?;
        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(seconds)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let found: bool = conn.exists(key).await?;
        Ok(found)
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        let _: () = redis::cmd("FLUSHDB").query_async(&mut conn).await?;
        info!("Flushed Redis cache database");
        Ok(())
    }

    /// Always 0: counting keys needs a round trip, use `async_size` instead.
    fn size(&self) -> usize {
        0
    }

    async fn async_size(&self) -> Result<usize> {
        let mut conn = self.connection().await?;
        let count: usize = redis::cmd("DBSIZE").query_async(&mut conn).await?;
        Ok(count)
    }

    async fn close(&self) -> Result<()> {
        if self.connection.lock().await.take().is_some() {
            debug!("Closed Redis cache connection");
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
