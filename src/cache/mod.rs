//! Cache Module
//!
//! Translation cache abstraction with an in-process backend and a Redis backend.

mod entry;
mod memory;
mod redis_cache;


use std::time::Duration;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::error::Result;

// Re-export public types
pub use redis_cache::RedisCache;
pub use entry::CacheEntry;
pub use memory::InMemoryCache;

// == Public Constants ==
/// TTL applied by the Redis backend when the caller gives none (24 hours)
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

// == Translation Cache ==
/// Storage for translated text keyed by [`make_key`].
///
/// `get` returns `Ok(None)` for missing or expired keys. Backend failures are
/// reported as errors, never as misses.
#[async_trait]
pub trait TranslationCache: Send + Sync {
    /// Returns the stored translation, if present and unexpired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores a translation, overwriting any existing entry.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()>;

    /// True iff a subsequent `get` would return a value.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Removes every entry in this cache's namespace.
    async fn clear(&self) -> Result<()>;

    /// Best-effort entry count without I/O.
    fn size(&self) -> usize;

    /// Entry count, asking the backend if necessary.
    async fn async_size(&self) -> Result<usize> {
        Ok(self.size())
    }

    /// Releases backend resources. Safe to call more than once.
    async fn close(&self) -> Result<()> {
        Ok(())
    }

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}

// == Key Derivation ==
/// Derives the cache key for a translation request.
///
/// The key is the hex SHA-256 digest of `source:target:text`, so it is
/// stable across restarts and identical for both backends.
pub fn make_key(text: &str, source_language: &str, target_language: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source_language.as_bytes());
    hasher.update(b":");
    hasher.update(target_language.as_bytes());
    hasher.update(b":");
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
