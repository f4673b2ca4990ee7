//! The cache proper: staleness window, single-flight de-duplication,
//! invalidation, and observer subscriptions.

use crate::cache::{QueryOptions, QueryState, Tag};
use crate::error::ClientError;

use async_lock::{Mutex, RwLock};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

type ObserverFn = dyn Fn(Tag, &QueryState) + Send + Sync;
type ObserverMap = HashMap<Tag, Vec<(u64, Arc<ObserverFn>)>>;

#[derive(Default)]
struct EntryState {
    payload: Option<serde_json::Value>,
    fetched_at: Option<Instant>,
    error: Option<String>,
    loading: bool,
    invalidated: bool,
}

impl EntryState {
    fn fresh(&self, ttl: Duration) -> bool {
        !self.invalidated && self.fetched_at.is_some_and(|t| t.elapsed() < ttl)
    }

    fn snapshot(&self, ttl: Duration) -> QueryState {
        QueryState {
            loading: self.loading,
            stale: self.payload.is_some() && !self.fresh(ttl),
            payload: self.payload.clone(),
            error: self.error.clone(),
        }
    }
}

#[derive(Default)]
struct Entry {
    state: RwLock<EntryState>,
    flight: Mutex<()>,
}

/// Process-wide cache of asynchronous query results, keyed by [`Tag`].
pub struct QueryCache {
    ttl: Duration,
    entries: RwLock<HashMap<Tag, Arc<Entry>>>,
    observers: Arc<Mutex<ObserverMap>>,
    next_observer_id: AtomicU64,
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
            observers: Arc::new(Mutex::new(HashMap::new())),
            next_observer_id: AtomicU64::new(0),
        }
    }

    /// The configured staleness window.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Serve `tag` from cache when fresh, otherwise run `fetch` and store
    /// the outcome.
    ///
    /// Concurrent calls for the same tag line up on a per-tag flight lock;
    /// whoever wins fetches once and the stragglers are served the newly
    /// cached payload, so one burst of identical queries costs one request.
    /// A failed fetch records the error but keeps any previous payload
    /// visible to subscribers.
    pub async fn query<T, F, Fut>(
        &self,
        tag: Tag,
        options: &QueryOptions,
        fetch: F,
    ) -> Result<T, ClientError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let ttl = options.max_age.unwrap_or(self.ttl);
        let entry = self.entry(tag).await;

        if let Some(value) = Self::fresh_payload(&entry, ttl).await {
            tracing::trace!(%tag, "cache hit");
            return Ok(serde_json::from_value(value)?);
        }

        let _flight = entry.flight.lock().await;
        // Re-check: the flight we waited on may have refilled the entry.
        if let Some(value) = Self::fresh_payload(&entry, ttl).await {
            tracing::trace!(%tag, "served by concurrent fetch");
            return Ok(serde_json::from_value(value)?);
        }

        let snapshot = {
            let mut state = entry.state.write().await;
            state.loading = true;
            state.snapshot(ttl)
        };
        self.notify(tag, &snapshot);

        match fetch().await {
            Ok(value) => {
                let json = serde_json::to_value(&value)?;
                let snapshot = {
                    let mut state = entry.state.write().await;
                    state.payload = Some(json);
                    state.fetched_at = Some(Instant::now());
                    state.error = None;
                    state.invalidated = false;
                    state.loading = false;
                    state.snapshot(ttl)
                };
                self.notify(tag, &snapshot);
                Ok(value)
            }
            Err(e) => {
                let snapshot = {
                    let mut state = entry.state.write().await;
                    // stale-while-error: the old payload stays visible
                    state.error = Some(e.user_message());
                    state.loading = false;
                    state.snapshot(ttl)
                };
                tracing::debug!(%tag, "query failed: {}", e);
                self.notify(tag, &snapshot);
                Err(e)
            }
        }
    }

    /// Run a write operation; on success mark every related tag stale so
    /// the next query refetches regardless of the staleness window.
    /// Failures propagate untouched and invalidate nothing.
    pub async fn mutate<T, F, Fut>(&self, related: &[Tag], op: F) -> Result<T, ClientError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let value = op().await?;
        for &tag in related {
            self.invalidate(tag).await;
        }
        Ok(value)
    }

    /// Mark `tag` stale; the next query bypasses the staleness window.
    pub async fn invalidate(&self, tag: Tag) {
        let entry = self.entry(tag).await;
        let snapshot = {
            let mut state = entry.state.write().await;
            state.invalidated = true;
            state.snapshot(self.ttl)
        };
        tracing::debug!(%tag, "invalidated");
        self.notify(tag, &snapshot);
    }

    /// Current snapshot for `tag` (an empty default if never queried).
    pub async fn state(&self, tag: Tag) -> QueryState {
        let entry = self.entry(tag).await;
        let state = entry.state.read().await;
        state.snapshot(self.ttl)
    }

    /// Register `callback` for every state change of `tag`. Dropping the
    /// returned [`Subscription`] unsubscribes.
    pub fn subscribe<F>(&self, tag: Tag, callback: F) -> Subscription
    where
        F: Fn(Tag, &QueryState) + Send + Sync + 'static,
    {
        let id = self.next_observer_id.fetch_add(1, Ordering::Relaxed);
        self.observers
            .lock_blocking()
            .entry(tag)
            .or_default()
            .push((id, Arc::new(callback)));
        Subscription {
            tag,
            id,
            observers: Arc::downgrade(&self.observers),
        }
    }

    async fn entry(&self, tag: Tag) -> Arc<Entry> {
        if let Some(entry) = self.entries.read().await.get(&tag) {
            return entry.clone();
        }
        self.entries
            .write()
            .await
            .entry(tag)
            .or_default()
            .clone()
    }

    async fn fresh_payload(entry: &Entry, ttl: Duration) -> Option<serde_json::Value> {
        let state = entry.state.read().await;
        if state.fresh(ttl) {
            state.payload.clone()
        } else {
            None
        }
    }

    fn notify(&self, tag: Tag, snapshot: &QueryState) {
        // Clone the callbacks out so none run under the lock.
        let callbacks: Vec<Arc<ObserverFn>> = self
            .observers
            .lock_blocking()
            .get(&tag)
            .map(|subs| subs.iter().map(|(_, cb)| cb.clone()).collect())
            .unwrap_or_default();
        for callback in callbacks {
            callback(tag, snapshot);
        }
    }
}

/// Handle for an active subscription; unsubscribes on drop.
pub struct Subscription {
    tag: Tag,
    id: u64,
    observers: Weak<Mutex<ObserverMap>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(observers) = self.observers.upgrade() {
            if let Some(subs) = observers.lock_blocking().get_mut(&self.tag) {
                subs.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, HttpError};
    use std::sync::atomic::AtomicUsize;

    fn cache() -> QueryCache {
        QueryCache::new(Duration::from_secs(60))
    }

    async fn fetch_number(
        cache: &QueryCache,
        tag: Tag,
        calls: &AtomicUsize,
        value: i64,
    ) -> Result<i64, ClientError> {
        cache
            .query(tag, &QueryOptions::default(), || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(value)
            })
            .await
    }

    #[tokio::test]
    async fn test_fresh_entry_serves_cached_payload() {
        let cache = cache();
        let calls = AtomicUsize::new(0);
        assert_eq!(fetch_number(&cache, Tag::Stocks, &calls, 1).await.unwrap(), 1);
        // second call is a cache hit and never reruns the fetch
        assert_eq!(fetch_number(&cache, Tag::Stocks, &calls, 2).await.unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_bypasses_staleness_window() {
        let cache = cache();
        let calls = AtomicUsize::new(0);
        fetch_number(&cache, Tag::Portfolio, &calls, 1).await.unwrap();
        cache.invalidate(Tag::Portfolio).await;
        assert_eq!(
            fetch_number(&cache, Tag::Portfolio, &calls, 2).await.unwrap(),
            2
        );
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_expired_entry_refetches() {
        let cache = QueryCache::new(Duration::ZERO);
        let calls = AtomicUsize::new(0);
        fetch_number(&cache, Tag::Stocks, &calls, 1).await.unwrap();
        fetch_number(&cache, Tag::Stocks, &calls, 2).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_payload() {
        let cache = cache();
        let calls = AtomicUsize::new(0);
        fetch_number(&cache, Tag::Stocks, &calls, 42).await.unwrap();
        cache.invalidate(Tag::Stocks).await;

        let result = cache
            .query::<i64, _, _>(Tag::Stocks, &QueryOptions::default(), || async {
                Err(ClientError::Http(HttpError::ServerError {
                    status: 500,
                    body: String::new(),
                }))
            })
            .await;
        assert!(result.is_err());

        let state = cache.state(Tag::Stocks).await;
        assert_eq!(state.payload, Some(serde_json::json!(42)));
        assert!(state.error.is_some());
        assert!(state.stale);
    }

    #[tokio::test]
    async fn test_concurrent_queries_share_one_fetch() {
        let cache = Arc::new(cache());
        let calls = Arc::new(AtomicUsize::new(0));

        let slow_fetch = |cache: Arc<QueryCache>, calls: Arc<AtomicUsize>| async move {
            cache
                .query(Tag::Stocks, &QueryOptions::default(), || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    Ok(7i64)
                })
                .await
        };

        let (a, b) = tokio::join!(
            slow_fetch(cache.clone(), calls.clone()),
            slow_fetch(cache.clone(), calls.clone())
        );
        assert_eq!(a.unwrap(), 7);
        assert_eq!(b.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_mutate_invalidates_related_tags_on_success() {
        let cache = cache();
        let calls = AtomicUsize::new(0);
        fetch_number(&cache, Tag::Portfolio, &calls, 1).await.unwrap();
        fetch_number(&cache, Tag::Stocks, &calls, 1).await.unwrap();

        cache
            .mutate(&[Tag::Portfolio], || async { Ok(()) })
            .await
            .unwrap();

        assert!(cache.state(Tag::Portfolio).await.stale);
        assert!(!cache.state(Tag::Stocks).await.stale);
    }

    #[tokio::test]
    async fn test_failed_mutation_invalidates_nothing() {
        let cache = cache();
        let calls = AtomicUsize::new(0);
        fetch_number(&cache, Tag::Portfolio, &calls, 1).await.unwrap();

        let result = cache
            .mutate::<(), _, _>(&[Tag::Portfolio], || async {
                Err(ClientError::Other("boom".to_string()))
            })
            .await;
        assert!(result.is_err());
        assert!(!cache.state(Tag::Portfolio).await.stale);
    }

    #[tokio::test]
    async fn test_subscribers_observe_load_and_update() {
        let cache = cache();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = cache.subscribe(Tag::Stocks, move |_, state| {
            sink.lock_blocking().push((state.loading, state.payload.clone()));
        });

        let calls = AtomicUsize::new(0);
        fetch_number(&cache, Tag::Stocks, &calls, 5).await.unwrap();

        let events = seen.lock_blocking().clone();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], (true, None));
        assert_eq!(events[1], (false, Some(serde_json::json!(5))));
    }

    #[tokio::test]
    async fn test_dropped_subscription_stops_callbacks() {
        let cache = cache();
        let count = Arc::new(AtomicUsize::new(0));
        let sink = count.clone();
        let sub = cache.subscribe(Tag::Stocks, move |_, _| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        cache.invalidate(Tag::Stocks).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        drop(sub);
        cache.invalidate(Tag::Stocks).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
