//! Memoizing lookup gateway
//!
//! Wraps an [`EmojiSearch`] implementation with a process-lifetime cache
//! keyed by the exact query string. The cache is owned by the gateway and
//! handed to whoever needs it; there is no ambient global state.

use super::error::{Result, SearchError};
use super::traits::{Emoji, EmojiSearch};
use log::{debug, warn};
use moka::sync::Cache;
use std::sync::Arc;

/// Default number of candidates kept per query
pub const DEFAULT_MAX_RESULTS: usize = 7;

/// Cached, truncating front for the lookup service
///
/// Cloning is cheap: clones share the same cache and backend, which is what
/// lets worker threads run fetches against one memo table.
#[derive(Clone)]
pub struct LookupGateway {
    backend: Arc<dyn EmojiSearch>,
    cache: Cache<String, Arc<Vec<Emoji>>>,
    max_results: usize,
}

impl LookupGateway {
    /// Create a gateway keeping at most [`DEFAULT_MAX_RESULTS`] per query
    #[must_use]
    pub fn new(backend: Arc<dyn EmojiSearch>) -> Self {
        Self::with_max_results(backend, DEFAULT_MAX_RESULTS)
    }

    /// Create a gateway with a custom result bound
    ///
    /// A bound of 0 is raised to 1.
    #[must_use]
    pub fn with_max_results(backend: Arc<dyn EmojiSearch>, max_results: usize) -> Self {
        // No capacity or TTL: entries live as long as the process.
        let cache = Cache::builder().build();

        Self {
            backend,
            cache,
            max_results: max_results.max(1),
        }
    }

    /// Fetch candidates for `query`, truncated to the result bound
    ///
    /// Concurrent calls for the same string wait on a single backend call
    /// and share its outcome. Failures are not cached, so a failed query is
    /// retried on the next call.
    ///
    /// # Errors
    ///
    /// Returns the backend's `SearchError` (wrapped as `Shared` when it was
    /// produced for another waiter).
    pub fn fetch(&self, query: &str) -> Result<Arc<Vec<Emoji>>> {
        if let Some(hit) = self.cache.get(query) {
            debug!("Lookup cache hit for {query:?}");
            return Ok(hit);
        }

        self.cache
            .try_get_with(query.to_string(), || {
                let mut emojis = self.backend.search(query)?;
                emojis.truncate(self.max_results);
                debug!("Lookup for {query:?} returned {} candidate(s)", emojis.len());
                Ok::<_, SearchError>(Arc::new(emojis))
            })
            .map_err(|e| {
                warn!("Lookup for {query:?} failed: {e}");
                e.into()
            })
    }

    /// Maximum number of candidates returned per query
    #[must_use]
    pub const fn max_results(&self) -> usize {
        self.max_results
    }

    /// Number of memoized queries
    #[must_use]
    pub fn cached_queries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}
