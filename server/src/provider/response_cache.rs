use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// A successful catalog response kept for reuse.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    /// Raw response body
    pub body: Vec<u8>,
    /// When the response was received
    pub fetched_at: Instant,
    /// When the response stops being reused; `None` if the time to live
    /// reaches past what an `Instant` can represent
    pub expires_at: Option<Instant>,
}

impl CachedResponse {
    /// Creates a cached response valid for `ttl` from now.
    pub fn new(body: Vec<u8>, ttl: Duration) -> Self {
        let fetched_at = Instant::now();
        Self {
            body,
            fetched_at,
            expires_at: fetched_at.checked_add(ttl),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }

    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }
}

/// URL-keyed store of raw HTTP bodies with a fixed time to live.
///
/// Only successful responses are stored, so a failed request is always retried
/// on the next call. Expired entries are ignored on read and replaced on the
/// next successful write.
#[derive(Clone)]
pub struct ResponseCache {
    ttl: Duration,
    cache: Arc<RwLock<HashMap<String, CachedResponse>>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Caching is disabled when the time to live is zero.
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    pub async fn get(&self, url: &str) -> Option<Vec<u8>> {
        let cache = self.cache.read().await;
        cache
            .get(url)
            .filter(|entry| !entry.is_expired())
            .map(|entry| {
                log::debug!("Response cache hit for {url} (age: {:?})", entry.age());
                entry.body.clone()
            })
    }

    pub async fn set(&self, url: String, body: Vec<u8>) {
        if !self.is_enabled() {
            return;
        }
        let mut cache = self.cache.write().await;
        cache.insert(url, CachedResponse::new(body, self.ttl));
    }

    pub async fn invalidate(&self, url: &str) {
        let mut cache = self.cache.write().await;
        cache.remove(url);
    }

    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.clear();
    }

    /// Number of entries that are still fresh.
    pub async fn len(&self) -> usize {
        let cache = self.cache.read().await;
        cache.values().filter(|entry| !entry.is_expired()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("ttl", &self.ttl)
            .finish()
    }
}
