// SPDX-License-Identifier: Apache-2.0

use crate::backend::CatalogBackend;
use crate::error::EngineError;
use crate::query_hash::query_tuple_hash;
use macroscout_model::{FilterState, ResultItem, ResultPage, SortState, VariantId};
use macroscout_store::{CacheKey, CacheStore, CachedResultSet};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Page size for full-list queries.
pub const FULL_LIST_PAGE_SIZE: usize = 100;
/// Page size for infinite-scroll retrieval.
pub const SCROLL_PAGE_SIZE: usize = 24;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub page_size: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: SCROLL_PAGE_SIZE,
        }
    }
}

/// Observable state of the controller, for the consumer's rendering logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Ready,
    Exhausted,
    Failed,
}

/// Settlement of one `fetch_more` call. Errors surface here as explicit
/// state rather than crossing the component boundary as an error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A page settled: `appended` new (deduplicated) items are in the
    /// cache.
    Appended { appended: usize, more_available: bool },
    /// A fetch for this query is already outstanding; the trigger is
    /// suppressed, not queued.
    AlreadyInFlight,
    /// The end of results was already observed; no call was issued.
    Exhausted,
    /// The response belonged to a superseded query tuple and was discarded.
    Superseded,
    /// The backend failed. Accumulated pages and the more-available signal
    /// survive, so re-triggering retries the same page.
    Failed { message: String },
}

struct FetchState {
    filters: FilterState,
    sort: SortState,
    query_hash: String,
    generation: u64,
    pages_loaded: usize,
    more_available: bool,
    in_flight: bool,
    last_error: Option<String>,
}

struct FetchTicket {
    generation: u64,
    filters: FilterState,
    sort: SortState,
    query_hash: String,
    offset: usize,
}

/// Drives repeated search calls for one logical query tuple into an
/// appendable, deduplicated page sequence in the shared cache.
///
/// At most one fetch is outstanding at a time; page `n+1` is never
/// requested before page `n` settles. Changing the query bumps a
/// monotonically increasing generation token, and a response tagged with a
/// stale generation is discarded on arrival; there is no hard cancellation
/// of backend calls.
#[derive(Clone)]
pub struct FetchController {
    backend: Arc<dyn CatalogBackend>,
    store: CacheStore,
    page_size: usize,
    state: Arc<Mutex<FetchState>>,
}

impl FetchController {
    pub fn new(
        backend: Arc<dyn CatalogBackend>,
        store: CacheStore,
        config: FetchConfig,
        filters: FilterState,
        sort: SortState,
    ) -> Result<Self, EngineError> {
        let query_hash = query_tuple_hash(&filters, sort, config.page_size)?;
        Ok(Self {
            backend,
            store,
            page_size: config.page_size,
            state: Arc::new(Mutex::new(FetchState {
                filters,
                sort,
                query_hash,
                generation: 0,
                pages_loaded: 0,
                more_available: true,
                in_flight: false,
                last_error: None,
            })),
        })
    }

    /// Replaces the query tuple. The accumulated page sequence is
    /// invalidated and retrieval restarts at page zero; a fetch still in
    /// flight for the old tuple settles as [`FetchOutcome::Superseded`].
    pub fn set_query(&self, filters: FilterState, sort: SortState) -> Result<(), EngineError> {
        let query_hash = query_tuple_hash(&filters, sort, self.page_size)?;
        let mut state = self.lock_state();
        state.generation += 1;
        debug!(
            generation = state.generation,
            query_hash = %query_hash,
            "query tuple replaced"
        );
        state.filters = filters;
        state.sort = sort;
        state.query_hash = query_hash;
        state.pages_loaded = 0;
        state.more_available = true;
        state.last_error = None;
        Ok(())
    }

    /// Requests the next page. Duplicate triggers while a fetch is in
    /// flight are suppressed; advance requests after exhaustion are no-ops.
    pub async fn fetch_more(&self) -> FetchOutcome {
        let ticket = {
            let mut state = self.lock_state();
            if state.in_flight {
                return FetchOutcome::AlreadyInFlight;
            }
            if !state.more_available {
                return FetchOutcome::Exhausted;
            }
            state.in_flight = true;
            FetchTicket {
                generation: state.generation,
                filters: state.filters.clone(),
                sort: state.sort,
                query_hash: state.query_hash.clone(),
                offset: state.pages_loaded * self.page_size,
            }
        };

        debug!(
            offset = ticket.offset,
            generation = ticket.generation,
            "requesting page"
        );
        let result = self
            .backend
            .search(&ticket.filters, ticket.sort, self.page_size, ticket.offset)
            .await;

        let mut state = self.lock_state();
        state.in_flight = false;

        if state.generation != ticket.generation {
            debug!(
                stale = ticket.generation,
                current = state.generation,
                "discarding response for superseded query"
            );
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(items) => {
                let fetched = items.len();
                state.more_available = fetched == self.page_size;
                state.pages_loaded += 1;
                state.last_error = None;
                let appended = self.append_page(&ticket.query_hash, items);
                debug!(
                    fetched,
                    appended,
                    more_available = state.more_available,
                    "page settled"
                );
                FetchOutcome::Appended {
                    appended,
                    more_available: state.more_available,
                }
            }
            Err(err) => {
                // Accumulated pages and more_available stay intact so the
                // consumer can re-trigger the same page.
                warn!(offset = ticket.offset, error = %err, "page fetch failed");
                let message = err.to_string();
                state.last_error = Some(message.clone());
                FetchOutcome::Failed { message }
            }
        }
    }

    /// Appends a page to the cached paginated set for this query,
    /// dropping items whose identifier an earlier page already carries.
    /// Returns the number of items actually appended.
    fn append_page(&self, query_hash: &str, items: Vec<ResultItem>) -> usize {
        let key = CacheKey::listing(query_hash);
        let mut appended = items.len();
        let mut handled = false;
        self.store.update(&key, |set| {
            if let CachedResultSet::Paginated { pages } = set {
                let seen: HashSet<VariantId> = pages
                    .iter()
                    .flat_map(|page| page.items.iter().map(|item| item.variant_id.clone()))
                    .collect();
                let fresh: Vec<ResultItem> = items
                    .iter()
                    .filter(|item| !seen.contains(&item.variant_id))
                    .cloned()
                    .collect();
                appended = fresh.len();
                pages.push(ResultPage::new(fresh));
                handled = true;
            }
        });
        if !handled {
            // First page for this tuple, or the entry was evicted (or held
            // a foreign shape): start the accumulation over.
            self.store.insert(
                key,
                CachedResultSet::Paginated {
                    pages: vec![ResultPage::new(items)],
                },
            );
        }
        appended
    }

    #[must_use]
    pub fn phase(&self) -> FetchPhase {
        let state = self.lock_state();
        if state.in_flight {
            FetchPhase::Loading
        } else if state.last_error.is_some() {
            FetchPhase::Failed
        } else if !state.more_available {
            FetchPhase::Exhausted
        } else if state.pages_loaded == 0 {
            FetchPhase::Idle
        } else {
            FetchPhase::Ready
        }
    }

    /// Cache key of this query's page accumulation.
    #[must_use]
    pub fn listing_key(&self) -> CacheKey {
        CacheKey::listing(&self.lock_state().query_hash)
    }

    #[must_use]
    pub fn pages_loaded(&self) -> usize {
        self.lock_state().pages_loaded
    }

    #[must_use]
    pub fn more_available(&self) -> bool {
        self.lock_state().more_available
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.lock_state().last_error.clone()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, FetchState> {
        // Every lock scope leaves the state consistent, so a poisoned lock
        // is still safe to recover.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
