//! Picker session driver
//!
//! Wires the picker to its collaborators: the startup connectivity check,
//! the debouncer, and the memoizing lookup gateway. The session never blocks
//! on a lookup. Debounced requests run on worker threads and report back
//! over a channel that the event loop drains with [`Session::tick`].

use crate::connectivity::{self, Probe};
use crate::debounce::Debouncer;
use crate::picker::{FetchRequest, KeyPress, Outcome, Picker, Snapshot, Stage, project};
use crate::search::{Emoji, LookupGateway, SearchError};
use crate::skin_tone::SkinTone;
use log::debug;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Side-effect collaborators notified by the session's owner
///
/// Each hook fires at most once per session.
pub trait SessionHandler {
    /// An emoji was picked
    ///
    /// # Errors
    ///
    /// Returns an error if the hand-off (e.g. clipboard write) fails.
    fn on_select(&mut self, emoji: &str) -> crate::ui::Result<()>;

    /// The connectivity probe could not find the lookup host
    fn on_offline(&mut self);

    /// The user pressed Escape or Control+C
    fn on_exit(&mut self);
}

/// Finished lookup reported by a worker thread
#[derive(Debug)]
pub struct FetchCompletion {
    pub request: FetchRequest,
    pub result: Result<Arc<Vec<Emoji>>, SearchError>,
}

/// One interactive picking session
pub struct Session {
    picker: Picker,
    debouncer: Debouncer<FetchRequest>,
    gateway: LookupGateway,
    tx: Sender<FetchCompletion>,
    rx: Receiver<FetchCompletion>,
    in_flight: usize,
}

impl Session {
    /// Create a session in the `Checking` stage
    #[must_use]
    pub fn new(gateway: LookupGateway, debounce: Duration, tone: SkinTone) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            picker: Picker::new(tone),
            debouncer: Debouncer::new(debounce),
            gateway,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Run the one-shot connectivity check and leave `Checking`
    pub fn start(&mut self, probe: &dyn Probe, host: &str) -> Stage {
        let stage = connectivity::check(probe, host);
        self.picker.resolve_connectivity(stage);
        self.picker.stage()
    }

    /// Feed one keypress to the picker
    ///
    /// Query changes long enough to look up arm the debouncer; the request
    /// is still reported back so callers can redraw.
    pub fn handle_key(&mut self, key: &KeyPress, now: Instant) -> Outcome {
        let outcome = self.picker.handle_key(key);

        match &outcome {
            Outcome::Fetch(request) => {
                self.debouncer.schedule(request.clone(), now);
            }
            Outcome::Commit(_) | Outcome::Exit => {
                self.debouncer.cancel();
            }
            Outcome::Updated | Outcome::Ignored => {}
        }

        outcome
    }

    /// Advance timers and apply finished lookups
    ///
    /// Returns `true` when the visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(request) = self.debouncer.fire(now) {
            self.dispatch(request);
        }

        let mut changed = false;
        while let Ok(completion) = self.rx.try_recv() {
            changed |= self.complete(completion);
        }
        changed
    }

    /// Block until one lookup finishes or `timeout` elapses, then apply it
    ///
    /// Returns `true` when a completion arrived and changed the state.
    pub fn wait_for_fetch(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(completion) => self.complete(completion),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }

    /// How long the event loop may sleep before the debouncer needs attention
    #[must_use]
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Number of lookups dispatched but not yet applied
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    #[must_use]
    pub const fn picker(&self) -> &Picker {
        &self.picker
    }

    /// Display snapshot of the current state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        project(&self.picker)
    }

    fn dispatch(&mut self, request: FetchRequest) {
        debug!(
            "Dispatching lookup for {:?} (generation {})",
            request.query, request.generation
        );

        let gateway = self.gateway.clone();
        let tx = self.tx.clone();
        self.in_flight += 1;

        thread::spawn(move || {
            let result = gateway.fetch(&request.query);
            // The receiver is gone once the session ends; the result is moot.
            let _ = tx.send(FetchCompletion { request, result });
        });
    }

    fn complete(&mut self, completion: FetchCompletion) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        let FetchCompletion { request, result } = completion;

        match result {
            Ok(emojis) => self
                .picker
                .apply_results(request.generation, emojis.as_ref().clone()),
            Err(e) => self.picker.apply_failure(request.generation, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::ProbeOutcome;
    use crate::testing::{StubProbe, StubSearch};

    const WAIT: Duration = Duration::from_secs(5);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn session(stub: &Arc<StubSearch>) -> Session {
        let gateway = LookupGateway::new(stub.clone());
        let mut session = Session::new(gateway, ms(200), SkinTone::None);
        session.start(&StubProbe::new(ProbeOutcome::Reachable), "example.com");
        session
    }

    fn type_at(session: &mut Session, text: &str, now: Instant) {
        for c in text.chars() {
            session.handle_key(&KeyPress::char(c), now);
        }
    }

    #[test]
    fn test_offline_start() {
        let stub = Arc::new(StubSearch::new());
        let mut session = Session::new(LookupGateway::new(stub), ms(200), SkinTone::None);
        let stage = session.start(&StubProbe::new(ProbeOutcome::Unreachable), "example.com");

        assert_eq!(stage, Stage::Offline);
        let outcome = session.handle_key(&KeyPress::char('a'), Instant::now());
        assert_eq!(outcome, Outcome::Ignored);
    }

    #[test]
    fn test_debounced_fetch_applies_results() {
        let stub = Arc::new(StubSearch::new().with_results("ca", &["🐱", "🐈"]));
        let mut session = session(&stub);
        let start = Instant::now();

        type_at(&mut session, "ca", start);
        assert!(!session.tick(start + ms(100)));
        assert_eq!(session.in_flight(), 0);

        session.tick(start + ms(200));
        assert_eq!(session.in_flight(), 1);
        assert!(session.wait_for_fetch(WAIT));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.emojis, vec!["🐱".to_string(), "🐈".to_string()]);
        assert_eq!(snapshot.selected, Some(0));
    }

    #[test]
    fn test_burst_of_keys_fetches_only_final_query() {
        let stub = Arc::new(StubSearch::new().with_results("cat", &["🐱"]));
        let mut session = session(&stub);
        let start = Instant::now();

        session.handle_key(&KeyPress::char('c'), start);
        session.handle_key(&KeyPress::char('a'), start + ms(50));
        session.handle_key(&KeyPress::char('t'), start + ms(100));

        session.tick(start + ms(250));
        assert_eq!(session.in_flight(), 0);
        session.tick(start + ms(300));
        assert!(session.wait_for_fetch(WAIT));

        assert_eq!(stub.calls("ca"), 0);
        assert_eq!(stub.calls("cat"), 1);
        assert_eq!(session.picker().results(), &[Emoji::new("🐱")]);
    }

    #[test]
    fn test_single_character_never_fetches() {
        let stub = Arc::new(StubSearch::new());
        let mut session = session(&stub);
        let start = Instant::now();

        type_at(&mut session, "c", start);
        assert_eq!(session.next_wakeup(start), None);
        session.tick(start + ms(1000));
        assert_eq!(session.in_flight(), 0);
        assert_eq!(stub.total_calls(), 0);
    }

    #[test]
    fn test_result_for_superseded_query_is_dropped() {
        let stub = Arc::new(StubSearch::new().with_results("ca", &["🐱"]));
        let mut session = session(&stub);
        let start = Instant::now();

        type_at(&mut session, "ca", start);
        session.tick(start + ms(200));
        // Typed again before the lookup came back.
        session.handle_key(&KeyPress::char('t'), start + ms(210));

        assert!(!session.wait_for_fetch(WAIT));
        assert!(session.picker().results().is_empty());
        assert_eq!(session.picker().query(), "cat");
    }

    #[test]
    fn test_retyped_query_uses_cache() {
        let stub = Arc::new(StubSearch::new().with_results("ca", &["🐱"]));
        let mut session = session(&stub);
        let mut now = Instant::now();

        type_at(&mut session, "ca", now);
        now += ms(200);
        session.tick(now);
        assert!(session.wait_for_fetch(WAIT));

        session.handle_key(&KeyPress::char('t'), now);
        session.handle_key(&KeyPress::backspace(), now);
        now += ms(200);
        session.tick(now);
        assert!(session.wait_for_fetch(WAIT));

        assert_eq!(stub.calls("ca"), 1);
        assert_eq!(session.picker().results(), &[Emoji::new("🐱")]);
    }

    #[test]
    fn test_failed_lookup_sets_notice() {
        let stub = Arc::new(StubSearch::new().failing_once("ca"));
        let mut session = session(&stub);
        let start = Instant::now();

        type_at(&mut session, "ca", start);
        session.tick(start + ms(200));
        assert!(session.wait_for_fetch(WAIT));

        let snapshot = session.snapshot();
        assert!(snapshot.emojis.is_empty());
        assert!(snapshot.notice.is_some());
        assert_eq!(snapshot.stage, Stage::Searching);
    }

    #[test]
    fn test_exit_cancels_pending_fetch() {
        let stub = Arc::new(StubSearch::new().with_results("ca", &["🐱"]));
        let mut session = session(&stub);
        let start = Instant::now();

        type_at(&mut session, "ca", start);
        assert_eq!(session.handle_key(&KeyPress::escape(), start), Outcome::Exit);
        session.tick(start + ms(500));

        assert_eq!(session.in_flight(), 0);
        assert_eq!(stub.total_calls(), 0);
    }
}
