//! Query lifecycle controller
//!
//! Turns keystrokes into committed queries and committed queries into result
//! sets. Owns the debouncer, the suggestion cache and the single live request.
//!
//! The controller is poll-driven: the host calls [`QueryController::tick`]
//! from its event loop, which fires an elapsed debounce deadline and drains
//! finished fetches. Fetches are spawned on the ambient tokio runtime and
//! report back over a channel tagged with their request id, so an outcome can
//! only land while its request is still the live one.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

use super::cache::SuggestionCache;
use super::debouncer::Debouncer;
use crate::source::{SearchResult, SuggestionSource};

/// Coarse state reported to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Nothing typed (or too short), nothing displayed
    Idle,
    /// Waiting for the debounce delay to elapse
    Pending,
    /// A fetch is in flight
    Loading,
    /// A result set (possibly empty) is displayed
    Ready,
}

/// Outcome of one fetch, sent from the spawned task back to the controller
#[derive(Debug)]
struct SourceResponse {
    request_id: u64,
    query: String,
    outcome: SearchResult,
}

/// The one outstanding fetch
#[derive(Debug)]
struct LiveRequest {
    request_id: u64,
    query: String,
    cancel: CancellationToken,
}

pub struct QueryController {
    source: Box<dyn SuggestionSource>,
    debouncer: Debouncer,
    cache: SuggestionCache,
    /// Trimmed query waiting on the debouncer
    pending_query: Option<String>,
    live_request: Option<LiveRequest>,
    /// Incremented for each fetch; outcomes with another id are stale
    request_id: u64,
    response_tx: UnboundedSender<SourceResponse>,
    response_rx: UnboundedReceiver<SourceResponse>,
    results: Vec<String>,
    /// Query that produced `results`, None when nothing is displayed
    results_query: Option<String>,
    loading: bool,
    last_error: Option<String>,
    fetch_count: usize,
    disposed: bool,
}

impl QueryController {
    pub fn new(source: Box<dyn SuggestionSource>, debounce: Duration) -> Self {
        let (response_tx, response_rx) = unbounded_channel();
        Self {
            source,
            debouncer: Debouncer::new(debounce),
            cache: SuggestionCache::new(),
            pending_query: None,
            live_request: None,
            request_id: 0,
            response_tx,
            response_rx,
            results: Vec::new(),
            results_query: None,
            loading: false,
            last_error: None,
            fetch_count: 0,
            disposed: false,
        }
    }

    /// Bound the cache to `capacity` queries (LRU); None keeps it unbounded
    pub fn with_cache_capacity(mut self, capacity: Option<usize>) -> Self {
        self.cache = match capacity {
            Some(capacity) => SuggestionCache::with_capacity(capacity),
            None => SuggestionCache::new(),
        };
        self
    }

    /// Handle a keystroke's worth of input
    ///
    /// Queries shorter than `min_length` (after trimming) clear the display
    /// and cancel everything pending. Longer ones restart the debounce timer;
    /// resolution happens in [`tick`](Self::tick) once the delay elapses.
    pub fn submit_query(&mut self, raw: &str, min_length: usize) {
        if self.disposed {
            log::debug!("Ignoring query submitted after dispose");
            return;
        }

        let query = raw.trim();
        if query.chars().count() < min_length {
            self.cancel_pending();
            self.results.clear();
            self.results_query = None;
            self.last_error = None;
            return;
        }

        self.pending_query = Some(query.to_string());
        self.debouncer.schedule(Instant::now());
    }

    /// Advance the controller: fire an elapsed debounce and apply finished fetches
    ///
    /// Returns true when the displayed result set was replaced.
    /// Must be called from within a tokio runtime, since firing may spawn a fetch.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;

        if self.debouncer.should_fire(Instant::now()) {
            self.debouncer.mark_fired();
            if let Some(query) = self.pending_query.take() {
                changed |= self.resolve(query);
            }
        }

        while let Ok(response) = self.response_rx.try_recv() {
            changed |= self.handle_response(response);
        }

        changed
    }

    /// Serve `query` from the cache or start a fetch for it
    fn resolve(&mut self, query: String) -> bool {
        if let Some(results) = self.cache.get(&query) {
            log::debug!("Cache hit for {:?} ({} results)", query, results.len());
            // The cached answer supersedes whatever is still in flight
            self.cancel_live_request();
            return self.apply_results(query, results);
        }

        self.start_fetch(query);
        false
    }

    fn start_fetch(&mut self, query: String) {
        self.cancel_live_request();

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        let cancel = CancellationToken::new();

        let search = self.source.search(&query, cancel.clone());
        let response_tx = self.response_tx.clone();
        let task_query = query.clone();
        tokio::spawn(async move {
            let outcome = search.await;
            // A closed channel means the controller is gone
            let _ = response_tx.send(SourceResponse {
                request_id,
                query: task_query,
                outcome,
            });
        });

        log::debug!("Started request {} for {:?}", request_id, query);
        self.live_request = Some(LiveRequest {
            request_id,
            query,
            cancel,
        });
        self.loading = true;
        self.last_error = None;
        self.fetch_count += 1;
    }

    fn handle_response(&mut self, response: SourceResponse) -> bool {
        let SourceResponse {
            request_id,
            query,
            outcome,
        } = response;

        let is_live = self
            .live_request
            .as_ref()
            .is_some_and(|live| live.request_id == request_id);

        if !is_live {
            log::debug!(
                "Discarded stale response for request {} ({:?})",
                request_id,
                query
            );
            return false;
        }

        self.live_request = None;
        self.loading = false;

        match outcome {
            Ok(results) => {
                log::debug!(
                    "Request {} for {:?} returned {} results",
                    request_id,
                    query,
                    results.len()
                );
                self.cache.insert(query.clone(), results.clone());
                self.apply_results(query, results)
            }
            Err(e) if e.is_cancelled() => {
                log::debug!("Request {} cancelled", request_id);
                false
            }
            Err(e) => {
                log::warn!("Suggestion request for {:?} failed: {}", query, e);
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    fn apply_results(&mut self, query: String, results: Vec<String>) -> bool {
        self.results = results;
        self.results_query = Some(query);
        self.loading = false;
        true
    }

    /// Cancel the live request, if any, signalling its cancellation token
    ///
    /// Returns true if a request was cancelled.
    pub fn cancel_live_request(&mut self) -> bool {
        match self.live_request.take() {
            Some(live) => {
                live.cancel.cancel();
                log::debug!("Cancelled request {} for {:?}", live.request_id, live.query);
                self.loading = false;
                true
            }
            None => false,
        }
    }

    /// Drop the pending debounce and cancel the live request, keeping results
    pub fn cancel_pending(&mut self) {
        self.debouncer.cancel();
        self.pending_query = None;
        self.cancel_live_request();
    }

    /// Release the timer and the live request; safe to call more than once
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.cancel_pending();
        self.disposed = true;
        log::debug!("Query controller disposed");
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn results_query(&self) -> Option<&str> {
        self.results_query.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> QueryStatus {
        if self.loading {
            QueryStatus::Loading
        } else if self.debouncer.is_pending() {
            QueryStatus::Pending
        } else if self.results_query.is_some() {
            QueryStatus::Ready
        } else {
            QueryStatus::Idle
        }
    }

    /// Message of the most recent fetch failure, cleared by the next fetch
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn has_live_request(&self) -> bool {
        self.live_request.is_some()
    }

    pub fn has_pending_debounce(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending debounce fires, for hosts that sleep until then
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Number of fetches issued to the source so far
    pub fn fetch_count(&self) -> usize {
        self.fetch_count
    }

    pub fn is_cached(&self, query: &str) -> bool {
        self.cache.contains(query)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for QueryController {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
