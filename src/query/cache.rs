//! In-memory query cache with staleness windows.
//!
//! Each cache carries a short identifying tag (`"invoice"`, `"cashFlow"`)
//! and a staleness duration. Within the window a read is served from memory;
//! past it the next read refetches. Concurrent reads of the same key are
//! single-flighted, and a failed refetch serves the previous value instead
//! of flashing to nothing. The cache lives for the process and is dropped
//! with it; writes to the backing resource invalidate rather than mutate.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::portal::PortalError;

/// Observable state of a cached query: loading, error, or success.
#[derive(Debug, Clone)]
pub enum QueryState<T> {
    /// No resolution has been attempted for this key yet.
    Pending,
    /// The last fetch failed and there is no previous value to fall back on.
    Error(String),
    /// A value is available (possibly stale and due for refetch).
    Ready(Arc<T>),
}

struct Entry<T> {
    value: Option<(Arc<T>, Instant)>,
    last_error: Option<String>,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            value: None,
            last_error: None,
        }
    }
}

pub struct QueryCache<T> {
    name: &'static str,
    stale_after: Duration,
    entries: RwLock<HashMap<String, Entry<T>>>,
    /// Per-key fetch locks; holders of the same key queue here so only one
    /// request is in flight per key.
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<T> QueryCache<T> {
    pub fn new(name: &'static str, stale_after: Duration) -> Self {
        Self {
            name,
            stale_after,
            entries: RwLock::new(HashMap::new()),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key`, fetching if it is absent or stale.
    ///
    /// Cancel-safe: dropping the returned future drops any in-flight fetch
    /// with it, leaving the previous entry in place.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<Arc<T>, PortalError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, PortalError>>,
    {
        if let Some(value) = self.fresh(key).await {
            debug!(cache = self.name, key, "cache hit");
            return Ok(value);
        }

        let lock = self.key_lock(key).await;
        let _guard = lock.lock().await;

        // A concurrent caller may have resolved this key while we queued.
        if let Some(value) = self.fresh(key).await {
            debug!(cache = self.name, key, "cache hit after wait");
            return Ok(value);
        }

        debug!(cache = self.name, key, "fetching");
        match fetch().await {
            Ok(value) => {
                let value = Arc::new(value);
                let mut entries = self.entries.write().await;
                let entry = entries.entry(key.to_string()).or_default();
                entry.value = Some((value.clone(), Instant::now()));
                entry.last_error = None;
                Ok(value)
            }
            Err(err) => {
                let mut entries = self.entries.write().await;
                let entry = entries.entry(key.to_string()).or_default();
                entry.last_error = Some(err.to_string());
                if let Some((previous, _)) = &entry.value {
                    // Keep showing what we had rather than nothing.
                    warn!(
                        cache = self.name,
                        key,
                        error = %err,
                        "refetch failed, serving previous data"
                    );
                    return Ok(previous.clone());
                }
                Err(err)
            }
        }
    }

    /// Current observable state for a key, without triggering a fetch.
    pub async fn peek(&self, key: &str) -> QueryState<T> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            None => QueryState::Pending,
            Some(entry) => match (&entry.value, &entry.last_error) {
                (Some((value, _)), _) => QueryState::Ready(value.clone()),
                (None, Some(message)) => QueryState::Error(message.clone()),
                (None, None) => QueryState::Pending,
            },
        }
    }

    /// Drop one key so the next read refetches.
    pub async fn invalidate(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    /// Drop every key, after a write to the backing resource.
    pub async fn invalidate_all(&self) {
        self.entries.write().await.clear();
    }

    async fn fresh(&self, key: &str) -> Option<Arc<T>> {
        let entries = self.entries.read().await;
        let (value, fetched_at) = entries.get(key)?.value.as_ref()?;
        (fetched_at.elapsed() < self.stale_after).then(|| value.clone())
    }

    async fn key_lock(&self, key: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(key.to_string()).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_fetch(
        counter: &Arc<AtomicUsize>,
        result: Result<u64, PortalError>,
    ) -> impl Future<Output = Result<u64, PortalError>> {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            result
        }
    }

    #[tokio::test]
    async fn test_fresh_hit_skips_fetch() {
        let cache = QueryCache::new("invoice", Duration::from_secs(300));
        let calls = Arc::new(AtomicUsize::new(0));

        let first = cache
            .get_or_fetch("all", || counting_fetch(&calls, Ok(7)))
            .await
            .unwrap();
        let second = cache
            .get_or_fetch("all", || counting_fetch(&calls, Ok(8)))
            .await
            .unwrap();

        assert_eq!(*first, 7);
        assert_eq!(*second, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_entry_refetches() {
        let cache = QueryCache::new("invoice", Duration::ZERO);
        let calls = Arc::new(AtomicUsize::new(0));

        let first = cache
            .get_or_fetch("all", || counting_fetch(&calls, Ok(7)))
            .await
            .unwrap();
        let second = cache
            .get_or_fetch("all", || counting_fetch(&calls, Ok(8)))
            .await
            .unwrap();

        assert_eq!(*first, 7);
        assert_eq!(*second, 8);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_refetch_serves_previous_data() {
        let cache = QueryCache::new("cashFlow", Duration::ZERO);
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .get_or_fetch("series", || counting_fetch(&calls, Ok(42)))
            .await
            .unwrap();
        let kept = cache
            .get_or_fetch("series", || {
                counting_fetch(&calls, Err(PortalError::Status(500)))
            })
            .await
            .unwrap();

        assert_eq!(*kept, 42);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_error_without_previous_data_propagates() {
        let cache: QueryCache<u64> = QueryCache::new("invoice", Duration::from_secs(300));

        let result = cache
            .get_or_fetch("all", || async { Err(PortalError::Status(503)) })
            .await;
        assert!(result.is_err());

        match cache.peek("all").await {
            QueryState::Error(message) => assert!(!message.is_empty()),
            other => panic!("expected error state, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_peek_states() {
        let cache: QueryCache<u64> = QueryCache::new("invoice", Duration::from_secs(300));
        assert!(matches!(cache.peek("all").await, QueryState::Pending));

        cache.get_or_fetch("all", || async { Ok(1) }).await.unwrap();
        assert!(matches!(cache.peek("all").await, QueryState::Ready(_)));
    }

    #[tokio::test]
    async fn test_concurrent_same_key_single_flight() {
        let cache = Arc::new(QueryCache::new("customer", Duration::from_secs(300)));
        let calls = Arc::new(AtomicUsize::new(0));

        let slow_fetch = || {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                Ok(5u64)
            }
        };

        let (a, b) = tokio::join!(
            cache.get_or_fetch("all", slow_fetch),
            cache.get_or_fetch("all", slow_fetch),
        );

        assert_eq!(*a.unwrap(), 5);
        assert_eq!(*b.unwrap(), 5);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache = QueryCache::new("property", Duration::from_secs(300));
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .get_or_fetch("available", || counting_fetch(&calls, Ok(1)))
            .await
            .unwrap();
        cache.invalidate("available").await;
        let refetched = cache
            .get_or_fetch("available", || counting_fetch(&calls, Ok(2)))
            .await
            .unwrap();

        assert_eq!(*refetched, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let cache = QueryCache::new("invoice", Duration::from_secs(300));
        let calls = Arc::new(AtomicUsize::new(0));

        let all = cache
            .get_or_fetch("all", || counting_fetch(&calls, Ok(10)))
            .await
            .unwrap();
        let recent = cache
            .get_or_fetch("recent", || counting_fetch(&calls, Ok(3)))
            .await
            .unwrap();

        assert_eq!(*all, 10);
        assert_eq!(*recent, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
