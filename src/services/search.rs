//! Search orchestration.
//!
//! Sits between the CLI and the property repository: routes reads
//! through the query cache, applies client-side filtering on top of
//! whatever the server returned, and enforces last-request-wins when
//! searches overlap.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, instrument};

use crate::adapters::cache::{FetchResult, QueryCache};
use crate::domain::errors::ApiResult;
use crate::domain::filter;
use crate::domain::models::{CacheConfig, NewProperty, Property, PropertyPatch, SearchFilters};
use crate::domain::ports::PropertyRepository;
use crate::domain::validation::{validate_filters, validate_new_property};

const FEATURED_KEY: &str = "properties:featured";

/// What the presentation layer renders after a search settles.
#[derive(Debug, Clone, Default)]
pub struct SearchSnapshot {
    pub is_loading: bool,
    pub is_error: bool,
    /// Human-readable message for the last error, if any.
    pub error: Option<String>,
    /// Results of the last search that was applied. Kept through later
    /// failures so the view never blanks out on a transient error.
    pub properties: Vec<Property>,
}

/// How a single search call ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// This was still the newest search when its response arrived; the
    /// snapshot now shows these listings.
    Applied(Vec<Property>),
    /// A newer search started before this one resolved; its response was
    /// discarded (though the cache entry was still written).
    Superseded,
}

struct State {
    snapshot: SearchSnapshot,
    last_filters: SearchFilters,
}

/// Orchestrates property reads and writes over a [`PropertyRepository`],
/// with per-concern caches and last-request-wins search semantics.
pub struct SearchOrchestrator {
    repo: Arc<dyn PropertyRepository>,
    listings: QueryCache<Vec<Property>>,
    featured: QueryCache<Vec<Property>>,
    details: QueryCache<Property>,
    /// Monotonic search counter; a response is applied only if its
    /// generation still matches when it arrives.
    generation: AtomicU64,
    state: Mutex<State>,
}

impl SearchOrchestrator {
    pub fn new(repo: Arc<dyn PropertyRepository>, cache: &CacheConfig) -> Self {
        let gc = cache.gc_time();
        Self {
            repo,
            listings: QueryCache::new(cache.stale_time(), gc),
            featured: QueryCache::new(cache.featured_stale_time(), gc.max(cache.featured_stale_time())),
            details: QueryCache::new(cache.stale_time(), gc),
            generation: AtomicU64::new(0),
            state: Mutex::new(State {
                snapshot: SearchSnapshot::default(),
                last_filters: SearchFilters::default(),
            }),
        }
    }

    /// Run a search with `filters`.
    ///
    /// Listings come from the cache when fresh; otherwise from the
    /// repository, deduplicated with any identical in-flight search. The
    /// server result is then narrowed by [`filter::matches`] so the
    /// snapshot honors every active filter even when the server ignores
    /// some of them.
    #[instrument(skip(self, filters))]
    pub async fn search(&self, filters: &SearchFilters) -> ApiResult<SearchOutcome> {
        validate_filters(filters)?;
        let filters = filters.normalized();
        let generation = self.begin(&filters);

        let repo = Arc::clone(&self.repo);
        let for_fetch = filters.clone();
        let result = self
            .listings
            .get_with(&filters.cache_key(), move || async move {
                repo.search(&for_fetch).await
            })
            .await;

        self.apply(generation, &filters, result)
    }

    /// Run a search that bypasses cache freshness and always fetches live.
    #[instrument(skip(self, filters))]
    pub async fn search_fresh(&self, filters: &SearchFilters) -> ApiResult<SearchOutcome> {
        validate_filters(filters)?;
        let filters = filters.normalized();
        let generation = self.begin(&filters);

        let repo = Arc::clone(&self.repo);
        let for_fetch = filters.clone();
        let result = self
            .listings
            .force_refresh(&filters.cache_key(), move || async move {
                repo.search(&for_fetch).await
            })
            .await;

        self.apply(generation, &filters, result)
    }

    /// Re-run the last search, bypassing cache freshness.
    #[instrument(skip(self))]
    pub async fn refetch(&self) -> ApiResult<SearchOutcome> {
        let filters = {
            let state = self.state.lock().expect("search lock poisoned");
            state.last_filters.clone()
        };
        let generation = self.begin(&filters);

        let repo = Arc::clone(&self.repo);
        let for_fetch = filters.clone();
        let result = self
            .listings
            .force_refresh(&filters.cache_key(), move || async move {
                repo.search(&for_fetch).await
            })
            .await;

        self.apply(generation, &filters, result)
    }

    /// Featured listings for the landing view; cached on their own,
    /// longer window.
    pub async fn featured(&self) -> ApiResult<Vec<Property>> {
        let repo = Arc::clone(&self.repo);
        let result = self
            .featured
            .get_with(FEATURED_KEY, move || async move { repo.featured().await })
            .await;
        result.map(|listings| (*listings).clone())
    }

    /// Fetch one property by id, cache-first.
    pub async fn property(&self, id: &str) -> ApiResult<Property> {
        let repo = Arc::clone(&self.repo);
        let owned = id.to_string();
        let result = self
            .details
            .get_with(&detail_key(id), move || async move {
                repo.get(&owned).await
            })
            .await;
        result.map(|property| (*property).clone())
    }

    /// Create a listing, then invalidate cached listing sets so the next
    /// read includes it.
    pub async fn create_property(&self, draft: &NewProperty) -> ApiResult<Property> {
        validate_new_property(draft)?;
        let created = self.repo.create(draft).await?;
        self.listings.invalidate_prefix("properties");
        self.featured.invalidate_prefix("properties");
        self.details.put(&detail_key(&created.id), created.clone());
        Ok(created)
    }

    /// Apply a partial update, seed the detail cache with the response
    /// body, and invalidate listing sets.
    pub async fn update_property(&self, id: &str, patch: &PropertyPatch) -> ApiResult<Property> {
        let updated = self.repo.update(id, patch).await?;
        self.details.put(&detail_key(id), updated.clone());
        self.listings.invalidate_prefix("properties");
        self.featured.invalidate_prefix("properties");
        Ok(updated)
    }

    /// Current view state.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.state.lock().expect("search lock poisoned").snapshot.clone()
    }

    /// Claim a new generation and flip the snapshot to loading.
    ///
    /// The counter is bumped under the state lock, pairing with the
    /// lock-held check in [`Self::apply`].
    fn begin(&self, filters: &SearchFilters) -> u64 {
        let mut state = self.state.lock().expect("search lock poisoned");
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        state.snapshot.is_loading = true;
        state.last_filters = filters.clone();
        generation
    }

    /// Settle a search: apply the response if this is still the newest
    /// generation, discard it otherwise.
    fn apply(
        &self,
        generation: u64,
        filters: &SearchFilters,
        result: FetchResult<Vec<Property>>,
    ) -> ApiResult<SearchOutcome> {
        let mut state = self.state.lock().expect("search lock poisoned");
        // Checked under the state lock so a newer `begin` cannot slip in
        // between the check and the snapshot write.
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "search response superseded, discarding");
            return Ok(SearchOutcome::Superseded);
        }

        match result {
            Ok(listings) => {
                let visible: Vec<Property> = listings
                    .iter()
                    .filter(|property| filter::matches(property, filters))
                    .cloned()
                    .collect();
                state.snapshot = SearchSnapshot {
                    is_loading: false,
                    is_error: false,
                    error: None,
                    properties: visible.clone(),
                };
                Ok(SearchOutcome::Applied(visible))
            }
            Err(error) => {
                state.snapshot.is_loading = false;
                state.snapshot.is_error = true;
                state.snapshot.error = Some(error.user_message());
                Err(error)
            }
        }
    }
}

fn detail_key(id: &str) -> String {
    format!("property:{id}")
}
