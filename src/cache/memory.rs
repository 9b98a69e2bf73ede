//! In-process translation cache backed by a concurrent map.

use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::cache::{CacheEntry, TranslationCache};
use crate::error::Result;

// == In-Memory Cache ==
/// Volatile cache living for the process lifetime.
///
/// Entries only expire when `set` is given an explicit TTL. Expired entries
/// are dropped lazily on access.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: DashMap<String, CacheEntry>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn live_value(&self, key: &str) -> Option<String> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove_if(key, |_, entry| entry.is_expired());
        }
        None
    }
}

#[async_trait]
impl TranslationCache for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.live_value(key))
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        self.entries
            .insert(key.to_string(), CacheEntry::new(value.to_string(), ttl));
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.live_value(key).is_some())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }

    fn size(&self) -> usize {
        self.entries.retain(|_, entry| !entry.is_expired());
        self.entries.len()
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = InMemoryCache::new();

        cache.set("key1", "value1", None).await.unwrap();

        assert_eq!(cache.get("key1").await.unwrap().as_deref(), Some("value1"));
        assert_eq!(cache.size(), 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = InMemoryCache::new();
        assert!(cache.get("nonexistent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exists() {
        let cache = InMemoryCache::new();
        cache.set("key1", "value1", None).await.unwrap();

        assert!(cache.exists("key1").await.unwrap());
        assert!(!cache.exists("nonexistent").await.unwrap());
    }

    #[tokio::test]
    async fn test_overwrite() {
        let cache = InMemoryCache::new();
        cache.set("key1", "value1", None).await.unwrap();
        cache.set("key1", "value2", None).await.unwrap();

        assert_eq!(cache.get("key1").await.unwrap().as_deref(), Some("value2"));
        assert_eq!(cache.size(), 1);
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = InMemoryCache::new();
        cache.set("key1", "value1", None).await.unwrap();
        cache.set("key2", "value2", None).await.unwrap();
        assert_eq!(cache.size(), 2);

        cache.clear().await.unwrap();

        assert_eq!(cache.size(), 0);
        assert!(cache.get("key1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_explicit_ttl_expires() {
        let cache = InMemoryCache::new();
        cache
            .set("key1", "value1", Some(Duration::from_secs(1)))
            .await
            .unwrap();
        assert_eq!(cache.get("key1").await.unwrap().as_deref(), Some("value1"));

        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert!(cache.get("key1").await.unwrap().is_none());
        assert!(!cache.exists("key1").await.unwrap());
        assert_eq!(cache.size(), 0);
    }

    #[tokio::test]
    async fn test_async_size_matches_size() {
        let cache = InMemoryCache::new();
        cache.set("key1", "value1", None).await.unwrap();
        assert_eq!(cache.async_size().await.unwrap(), cache.size());
    }

    #[tokio::test]
    async fn test_concurrent_writers_same_key() {
        let cache = Arc::new(InMemoryCache::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    cache.set("shared", &format!("v{}", i), None).await.unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.size(), 1);
        let value = cache.get("shared").await.unwrap().unwrap();
        assert!(value.starts_with('v'));
    }
}
