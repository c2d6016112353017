//! Testing utilities for emoj
//!
//! This module provides scripted stand-ins for the external collaborators
//! (lookup service, connectivity probe) so the picker and session can be
//! exercised without a network.
//!
//! Only available when compiled with `cfg(test)`.

use crate::connectivity::{Probe, ProbeOutcome};
use crate::search::{Emoji, EmojiSearch, SearchError};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// Scripted lookup backend that counts calls per query
///
/// Unknown queries resolve to an empty list.
///
/// # Examples
/// ```ignore
/// let stub = StubSearch::new().with_results("ca", &["🐱", "🐈"]);
/// assert_eq!(stub.search("ca").unwrap().len(), 2);
/// assert_eq!(stub.calls("ca"), 1);
/// ```
#[derive(Default)]
pub struct StubSearch {
    results: HashMap<String, Vec<Emoji>>,
    fail_once: Mutex<HashSet<String>>,
    calls: Mutex<HashMap<String, usize>>,
    delay: Option<Duration>,
}

impl StubSearch {
    /// Create an empty stub
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the results for `query`
    #[must_use]
    pub fn with_results(mut self, query: &str, emojis: &[&str]) -> Self {
        self.results.insert(
            query.to_string(),
            emojis.iter().map(|e| Emoji::new(*e)).collect(),
        );
        self
    }

    /// Make the first call for `query` fail with a transport error
    #[must_use]
    pub fn failing_once(self, query: &str) -> Self {
        self.fail_once
            .lock()
            .expect("stub lock poisoned")
            .insert(query.to_string());
        self
    }

    /// Sleep for `delay` inside every call
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls made for `query`
    ///
    /// # Panics
    /// Panics if the call counter lock is poisoned.
    #[must_use]
    pub fn calls(&self, query: &str) -> usize {
        self.calls
            .lock()
            .expect("stub lock poisoned")
            .get(query)
            .copied()
            .unwrap_or(0)
    }

    /// Total number of calls across all queries
    ///
    /// # Panics
    /// Panics if the call counter lock is poisoned.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.calls.lock().expect("stub lock poisoned").values().sum()
    }
}

impl EmojiSearch for StubSearch {
    fn search(&self, text: &str) -> crate::search::error::Result<Vec<Emoji>> {
        *self
            .calls
            .lock()
            .expect("stub lock poisoned")
            .entry(text.to_string())
            .or_insert(0) += 1;

        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }

        if self.fail_once.lock().expect("stub lock poisoned").remove(text) {
            return Err(SearchError::Transport("stubbed failure".to_string()));
        }

        Ok(self.results.get(text).cloned().unwrap_or_default())
    }
}

/// Connectivity probe that returns a fixed outcome and records the host
pub struct StubProbe {
    outcome: ProbeOutcome,
    probed: Mutex<Vec<String>>,
}

impl StubProbe {
    /// Create a probe that always answers `outcome`
    #[must_use]
    pub const fn new(outcome: ProbeOutcome) -> Self {
        Self {
            outcome,
            probed: Mutex::new(Vec::new()),
        }
    }

    /// Hosts probed so far, in order
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().expect("stub lock poisoned").clone()
    }
}

impl Probe for StubProbe {
    fn probe(&self, host: &str) -> ProbeOutcome {
        self.probed
            .lock()
            .expect("stub lock poisoned")
            .push(host.to_string());
        self.outcome
    }
}
