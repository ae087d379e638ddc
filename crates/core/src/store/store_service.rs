//! Cache store service - collection handles and fetch orchestration.

use std::future::Future;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use log::{debug, warn};

use super::snapshot_model::Snapshot;
use super::store_model::{CacheEntity, CollectionState, Domain};
use crate::companies::Company;
use crate::constants::DEFAULT_CACHE_MAX_AGE_MS;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::holdings::Holding;
use crate::investments::Investment;
use crate::profit_loss::ProfitLossRecord;
use crate::users::User;

/// Shared handle to one cached collection.
///
/// All collection-level mutations go through this handle so loading, error,
/// and staleness stay auditable. Clones share the same underlying state.
#[derive(Clone)]
pub struct Collection<T: CacheEntity> {
    domain: Domain,
    state: Arc<RwLock<CollectionState<T>>>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl<T: CacheEntity> Collection<T> {
    fn new(domain: Domain, event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self {
            domain,
            state: Arc::new(RwLock::new(CollectionState::default())),
            event_sink,
        }
    }

    /// The domain this collection caches.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns a copy of the full collection state.
    pub fn state(&self) -> CollectionState<T> {
        self.state.read().unwrap().clone()
    }

    /// Returns a copy of the cached items.
    pub fn items(&self) -> Vec<T> {
        self.state.read().unwrap().items.clone()
    }

    /// Replaces the collection with a fetched result: clears any error,
    /// stops loading, and stamps the fetch time.
    pub fn set_items(&self, items: Vec<T>) {
        let mut state = self.state.write().unwrap();
        state.items = items;
        state.loading = false;
        state.error = None;
        state.last_fetched_at = Some(Utc::now());
    }

    /// Sets the loading flag without touching items or error.
    pub fn set_loading(&self, loading: bool) {
        self.state.write().unwrap().loading = loading;
    }

    /// Records a fetch error. The previous items stay in place so the UI
    /// keeps showing the last good data.
    pub fn set_error(&self, error: Option<String>) {
        let mut state = self.state.write().unwrap();
        state.error = error;
        state.loading = false;
    }

    /// Inserts or replaces a single entity after a successful local mutation,
    /// so the UI reflects the change before the next full re-fetch. Emits a
    /// domain-changed event through the sink.
    pub fn upsert_one(&self, item: T) {
        let id = item.id().to_string();
        {
            let mut state = self.state.write().unwrap();
            match state.items.iter_mut().find(|existing| existing.id() == id) {
                Some(existing) => *existing = item,
                None => state.items.push(item),
            }
        }
        self.event_sink
            .emit(DomainEvent::for_domain(self.domain, vec![id]));
    }

    /// Removes a single entity after a successful local deletion. Emits a
    /// domain-changed event when something was actually removed.
    pub fn remove_one(&self, id: &str) -> bool {
        let removed = {
            let mut state = self.state.write().unwrap();
            let before = state.items.len();
            state.items.retain(|item| item.id() != id);
            state.items.len() < before
        };
        if removed {
            self.event_sink
                .emit(DomainEvent::for_domain(self.domain, vec![id.to_string()]));
        }
        removed
    }

    /// True when the collection was never fetched or is older than
    /// `max_age_ms`.
    pub fn is_stale(&self, max_age_ms: i64) -> bool {
        self.state.read().unwrap().is_stale_at(max_age_ms, Utc::now())
    }

    /// Staleness-gated fetch orchestration.
    ///
    /// Skips the fetch entirely when the collection is fresh and the caller
    /// did not force a refresh. Otherwise sets loading, awaits the supplied
    /// fetch, and records the outcome: items replace the collection on
    /// success, the error message lands on the state on failure (previous
    /// items untouched). Concurrent calls are not serialized - a collection
    /// replacement is a pure overwrite, so last-write-wins is safe.
    pub async fn ensure_fresh<F, Fut>(&self, force_refresh: bool, fetch: F) -> Result<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        if !force_refresh && !self.is_stale(DEFAULT_CACHE_MAX_AGE_MS) {
            debug!("{} cache is fresh, skipping fetch", self.domain);
            return Ok(());
        }

        self.set_loading(true);
        match fetch().await {
            Ok(items) => {
                debug!("Fetched {} {} item(s)", items.len(), self.domain);
                self.set_items(items);
                Ok(())
            }
            Err(e) => {
                warn!("Fetch for {} failed: {}", self.domain, e);
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }
}

/// The owned store of all cached domain collections.
///
/// Handed around as a cloned handle (clones share state); every view reads
/// the same snapshot. Local optimistic mutations emit domain-changed events
/// through the injected sink; fetch replacements do not, so a bus-triggered
/// re-fetch never re-triggers the bus.
#[derive(Clone)]
pub struct CacheStore {
    investments: Collection<Investment>,
    holdings: Collection<Holding>,
    users: Collection<User>,
    companies: Collection<Company>,
    profit_loss: Collection<ProfitLossRecord>,
}

impl CacheStore {
    /// Creates a store that discards mutation events.
    pub fn new() -> Self {
        Self::with_event_sink(Arc::new(NoOpDomainEventSink))
    }

    /// Creates a store that emits mutation events through the given sink.
    pub fn with_event_sink(event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self {
            investments: Collection::new(Domain::Investments, event_sink.clone()),
            holdings: Collection::new(Domain::Holdings, event_sink.clone()),
            users: Collection::new(Domain::Users, event_sink.clone()),
            companies: Collection::new(Domain::Companies, event_sink.clone()),
            profit_loss: Collection::new(Domain::ProfitLoss, event_sink),
        }
    }

    pub fn investments(&self) -> &Collection<Investment> {
        &self.investments
    }

    pub fn holdings(&self) -> &Collection<Holding> {
        &self.holdings
    }

    pub fn users(&self) -> &Collection<User> {
        &self.users
    }

    pub fn companies(&self) -> &Collection<Company> {
        &self.companies
    }

    pub fn profit_loss(&self) -> &Collection<ProfitLossRecord> {
        &self.profit_loss
    }

    /// True when the given domain's collection needs a re-fetch.
    pub fn is_stale(&self, domain: Domain, max_age_ms: i64) -> bool {
        match domain {
            Domain::Investments => self.investments.is_stale(max_age_ms),
            Domain::Holdings => self.holdings.is_stale(max_age_ms),
            Domain::Users => self.users.is_stale(max_age_ms),
            Domain::Companies => self.companies.is_stale(max_age_ms),
            Domain::ProfitLoss => self.profit_loss.is_stale(max_age_ms),
        }
    }

    /// Copies every collection into an immutable snapshot for derivations.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            investments: self.investments.items(),
            holdings: self.holdings.items(),
            users: self.users.items(),
            companies: self.companies.items(),
            profit_loss: self.profit_loss.items(),
            taken_at: Utc::now(),
        }
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}
