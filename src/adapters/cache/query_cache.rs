//! Keyed cache of repository results with staleness windows.
//!
//! Freshness model, per entry age:
//!
//! - younger than `stale_time`: served from memory, no fetch;
//! - between `stale_time` and `gc_time`: served immediately while one
//!   background refetch runs (stale-while-revalidate);
//! - older than `gc_time`: evicted, the caller waits for a fresh fetch.
//!
//! Concurrent callers for one key share a single in-flight fetch
//! (single-flight), so identical requests within one tick cost one
//! upstream call. Failed fetches are stored as error entries and shared
//! with waiters; a cached error is never passed off as stale data.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::time::Instant;
use tracing::debug;

use crate::domain::errors::ApiError;

/// Result served from the cache: the value is shared between all
/// subscribers of the entry.
pub type FetchResult<T> = Result<Arc<T>, ApiError>;

type SharedFetch<T> = Shared<BoxFuture<'static, FetchResult<T>>>;

struct Entry<T> {
    value: FetchResult<T>,
    fetched_at: Instant,
    /// Set by `invalidate_prefix`; an invalidated entry is stale
    /// regardless of age.
    invalidated: bool,
}

struct Inner<T> {
    entries: HashMap<String, Entry<T>>,
    in_flight: HashMap<String, SharedFetch<T>>,
}

/// What `get_with` decided to do while holding the lock.
enum Plan<T> {
    /// Fresh entry, serve as-is.
    Hit(FetchResult<T>),
    /// Stale success entry: serve it now; a refetch is already running
    /// or was just started.
    StaleHit(FetchResult<T>),
    /// Somebody else is fetching this key; wait for their result.
    Join(SharedFetch<T>),
    /// We started the fetch; wait for it.
    Fetch(SharedFetch<T>),
}

/// Keyed cache of fetch results with `stale_time`/`gc_time` windows.
pub struct QueryCache<T> {
    inner: Arc<Mutex<Inner<T>>>,
    stale_time: Duration,
    gc_time: Duration,
}

impl<T: Send + Sync + 'static> QueryCache<T> {
    /// Create a cache with the given freshness windows.
    ///
    /// `stale_time` must not exceed `gc_time`.
    pub fn new(stale_time: Duration, gc_time: Duration) -> Self {
        debug_assert!(stale_time <= gc_time);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: HashMap::new(),
                in_flight: HashMap::new(),
            })),
            stale_time,
            gc_time,
        }
    }

    /// Look up `key`, running `fetch` only when the cache cannot serve it.
    ///
    /// See the module docs for the freshness model. `fetch` is invoked at
    /// most once per call, and not at all on a fresh hit or when another
    /// caller's fetch for the same key is already in flight.
    pub async fn get_with<F, Fut>(&self, key: &str, fetch: F) -> FetchResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let plan = {
            let mut inner = self.inner.lock().expect("cache lock poisoned");

            let usable = match inner.entries.get(key) {
                None => None,
                Some(entry) => {
                    let age = entry.fetched_at.elapsed();
                    let stale = entry.invalidated || age >= self.stale_time;
                    if age >= self.gc_time || (stale && entry.value.is_err()) {
                        // Expired, or a stale error entry: errors are
                        // refetched synchronously rather than served, so
                        // the caller sees "errored", never "old data".
                        None
                    } else {
                        Some((entry.value.clone(), stale))
                    }
                }
            };
            if usable.is_none() {
                inner.entries.remove(key);
            }

            match usable {
                Some((value, false)) => Plan::Hit(value),
                Some((value, true)) => {
                    if !inner.in_flight.contains_key(key) {
                        let shared = Self::make_shared(fetch());
                        self.start_fetch(&mut inner, key, shared);
                    }
                    Plan::StaleHit(value)
                }
                None => {
                    if let Some(shared) = inner.in_flight.get(key) {
                        Plan::Join(shared.clone())
                    } else {
                        let shared = Self::make_shared(fetch());
                        self.start_fetch(&mut inner, key, shared.clone());
                        Plan::Fetch(shared)
                    }
                }
            }
        };

        match plan {
            Plan::Hit(value) | Plan::StaleHit(value) => value,
            Plan::Join(shared) | Plan::Fetch(shared) => shared.await,
        }
    }

    /// Fetch `key` now, bypassing freshness.
    ///
    /// Used by the manual refetch affordance. Still deduplicates against
    /// an already in-flight fetch for the same key.
    pub async fn force_refresh<F, Fut>(&self, key: &str, fetch: F) -> FetchResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let shared = {
            let mut inner = self.inner.lock().expect("cache lock poisoned");
            if let Some(shared) = inner.in_flight.get(key) {
                shared.clone()
            } else {
                let shared = Self::make_shared(fetch());
                self.start_fetch(&mut inner, key, shared.clone());
                shared
            }
        };
        shared.await
    }

    /// Overwrite an entry with a known-fresh value, e.g. the body of a
    /// successful update response.
    pub fn put(&self, key: &str, value: T) {
        let mut inner = self.inner.lock().expect("cache lock poisoned");
        Self::sweep_expired(&mut inner, self.gc_time);
        inner.entries.insert(
            key.to_string(),
            Entry {
                value: Ok(Arc::new(value)),
                fetched_at: Instant::now(),
                invalidated: false,
            },
        );
    }

    /// Mark every entry whose key starts with `prefix` as stale.
    ///
    /// The next access serves the old value while refetching (success
    /// entries) or refetches synchronously (error entries). Called after
    /// writes so subsequent reads observe fresh data.
    pub fn invalidate_prefix(&self, prefix: &str) {
        let mut inner = self.inner.lock().expect("cache lock poisoned");
        let mut hits = 0usize;
        for (key, entry) in &mut inner.entries {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                hits += 1;
            }
        }
        debug!(prefix, entries = hits, "cache invalidated");
    }

    /// Number of materialized entries (in-flight fetches excluded).
    pub fn entry_count(&self) -> usize {
        self.inner.lock().expect("cache lock poisoned").entries.len()
    }

    fn make_shared<Fut>(fut: Fut) -> SharedFetch<T>
    where
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        fut.map(|result| result.map(Arc::new)).boxed().shared()
    }

    /// Drop entries past `gc_time`. Run on every insert so the map does
    /// not grow unboundedly with distinct keys in a long-lived process;
    /// expired entries would otherwise linger until their own key is
    /// accessed again.
    fn sweep_expired(inner: &mut Inner<T>, gc_time: Duration) {
        inner
            .entries
            .retain(|_, entry| entry.fetched_at.elapsed() < gc_time);
    }

    /// Register `shared` as the in-flight fetch for `key` and spawn the
    /// writer task that records its result.
    ///
    /// The writer, not the caller, owns the entry update: callers may be
    /// dropped mid-await, and background revalidation has no caller at all.
    fn start_fetch(&self, inner: &mut Inner<T>, key: &str, shared: SharedFetch<T>) {
        inner.in_flight.insert(key.to_string(), shared.clone());

        let cache = Arc::clone(&self.inner);
        let key = key.to_string();
        let gc_time = self.gc_time;
        tokio::spawn(async move {
            let value = shared.await;
            let mut inner = cache.lock().expect("cache lock poisoned");
            Self::sweep_expired(&mut inner, gc_time);
            inner.entries.insert(
                key.clone(),
                Entry {
                    value,
                    fetched_at: Instant::now(),
                    invalidated: false,
                },
            );
            inner.in_flight.remove(&key);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_fresh_hit_skips_fetch() {
        let cache: QueryCache<u32> =
            QueryCache::new(Duration::from_secs(60), Duration::from_secs(120));
        cache.put("k", 7);
        let value = cache
            .get_with("k", || async { Err(ApiError::Unknown("must not fetch".to_string())) })
            .await
            .unwrap();
        assert_eq!(*value, 7);
        assert_eq!(cache.entry_count(), 1);
    }

    #[tokio::test]
    async fn test_miss_fetches_and_records_entry() {
        let cache: QueryCache<u32> =
            QueryCache::new(Duration::from_secs(60), Duration::from_secs(120));
        let value = cache.get_with("k", || async { Ok(41) }).await.unwrap();
        assert_eq!(*value, 41);
    }

    #[tokio::test(start_paused = true)]
    async fn test_put_sweeps_expired_entries() {
        let cache: QueryCache<u32> =
            QueryCache::new(Duration::from_secs(1), Duration::from_secs(2));
        cache.put("old:a", 1);
        cache.put("old:b", 2);
        tokio::time::advance(Duration::from_secs(3)).await;

        cache.put("new", 3);
        assert_eq!(cache.entry_count(), 1, "expired entries swept on insert");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_insert_sweeps_expired_entries() {
        let cache: QueryCache<u32> =
            QueryCache::new(Duration::from_secs(1), Duration::from_secs(2));
        cache.put("old", 1);
        tokio::time::advance(Duration::from_secs(3)).await;

        let value = cache.get_with("new", || async { Ok(2) }).await.unwrap();
        assert_eq!(*value, 2);
        // Let the writer task record the entry.
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(cache.entry_count(), 1);
    }
}
