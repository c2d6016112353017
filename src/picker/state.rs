//! Picker state machine
//!
//! Owns the query buffer, the current candidate list, the selection cursor,
//! the skin tone and the lifecycle stage. Keypresses are handled
//! synchronously; lookups are only requested here (as [`FetchRequest`]s) and
//! their results come back through [`Picker::apply_results`], tagged with the
//! generation they were requested for so late answers for an older query
//! never overwrite a newer one.

use super::keys::{KeyName, KeyPress};
use crate::search::Emoji;
use crate::skin_tone::{self, SkinTone};
use log::{debug, info};

/// Lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Waiting for the startup connectivity probe
    #[default]
    Checking,
    /// The lookup host could not be found; input is not accepted
    Offline,
    /// Accepting keypresses
    Searching,
    /// An emoji was picked; input is not accepted
    Committed,
}

impl Stage {
    /// Whether no further productive input is accepted
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Offline | Self::Committed)
    }
}

/// A lookup the picker wants performed once the debounce window closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Query generation at the time of the request
    pub generation: u64,
    /// Query text captured at the time of the request
    pub query: String,
}

/// What a keypress resulted in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    /// State changed; redraw
    Updated,
    /// Query changed and is long enough to look up
    Fetch(FetchRequest),
    /// An emoji (already rendered with the skin tone) was picked
    Commit(String),
    /// The user asked to leave
    Exit,
}

/// Interactive search state
#[derive(Debug, Clone, Default)]
pub struct Picker {
    stage: Stage,
    query: String,
    results: Vec<Emoji>,
    selected: usize,
    tone: SkinTone,
    committed: Option<String>,
    generation: u64,
    notice: Option<String>,
    halted: bool,
}

impl Picker {
    /// Create a picker in the `Checking` stage with an initial skin tone
    #[must_use]
    pub fn new(tone: SkinTone) -> Self {
        Self {
            tone,
            ..Self::default()
        }
    }

    /// Leave `Checking` once the connectivity probe has answered
    ///
    /// Only `Offline` and `Searching` are accepted, and only once; later
    /// calls are ignored.
    pub fn resolve_connectivity(&mut self, stage: Stage) {
        if self.stage != Stage::Checking {
            return;
        }
        if matches!(stage, Stage::Offline | Stage::Searching) {
            info!("Picker stage: {:?} -> {stage:?}", self.stage);
            self.stage = stage;
        }
    }

    /// Handle one raw input event
    ///
    /// Only acts while `Searching` and before an exit was requested.
    pub fn handle_key(&mut self, key: &KeyPress) -> Outcome {
        if self.stage != Stage::Searching || self.halted {
            return Outcome::Ignored;
        }

        // Stray escape sequences before real typing are never query text.
        if key.is_escape_sequence() && (!key.is_arrow() || self.query_len() <= 1) {
            return Outcome::Ignored;
        }

        if key.name == Some(KeyName::Escape)
            || (key.ctrl && key.name == Some(KeyName::Letter('c')))
        {
            self.halted = true;
            info!("Exit requested");
            return Outcome::Exit;
        }

        if let Some(KeyName::Digit(d)) = key.name {
            let index = usize::from(d);
            if (1..=self.results.len()).contains(&index) {
                return self.commit(index - 1);
            }
            return Outcome::Ignored;
        }

        let previous = self.query.clone();

        match key.name {
            Some(KeyName::Backspace) => {
                self.query.pop();
            }
            Some(KeyName::Return) => return self.commit_selected(),
            Some(KeyName::Letter('u')) if key.ctrl => return self.commit_selected(),
            Some(KeyName::Up) => return self.set_tone(self.tone.darker()),
            Some(KeyName::Down) => return self.set_tone(self.tone.lighter()),
            Some(KeyName::Right) => return self.select_next(),
            Some(KeyName::Left) => return self.select_previous(),
            _ => match key.ch {
                Some(c) if !key.ctrl && !c.is_control() => self.query.push(c),
                _ => return Outcome::Ignored,
            },
        }

        if self.query == previous {
            return Outcome::Ignored;
        }
        self.query_changed()
    }

    /// Install lookup results for `generation`
    ///
    /// Returns `false` (and changes nothing) when the results belong to an
    /// older query or the picker is no longer searching.
    pub fn apply_results(&mut self, generation: u64, results: Vec<Emoji>) -> bool {
        if !self.accepts(generation) {
            debug!(
                "Discarding results for generation {generation} (current {})",
                self.generation
            );
            return false;
        }

        self.results = results;
        self.selected = 0;
        self.notice = None;
        true
    }

    /// Record a failed lookup for `generation`
    ///
    /// Clears the candidates so nothing stale stays on screen and keeps the
    /// message as an inline notice until the query changes.
    pub fn apply_failure(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if !self.accepts(generation) {
            return false;
        }

        self.results.clear();
        self.selected = 0;
        self.notice = Some(message.into());
        true
    }

    fn accepts(&self, generation: u64) -> bool {
        self.stage == Stage::Searching && !self.halted && generation == self.generation
    }

    fn query_changed(&mut self) -> Outcome {
        self.results.clear();
        self.selected = 0;
        self.notice = None;
        self.generation += 1;

        if self.query_len() <= 1 {
            return Outcome::Updated;
        }

        debug!(
            "Query changed to {:?} (generation {})",
            self.query, self.generation
        );
        Outcome::Fetch(FetchRequest {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    fn commit_selected(&mut self) -> Outcome {
        if self.results.is_empty() {
            return Outcome::Ignored;
        }
        self.commit(self.selected)
    }

    fn commit(&mut self, index: usize) -> Outcome {
        let Some(emoji) = self.results.get(index) else {
            return Outcome::Ignored;
        };

        let rendered = skin_tone::apply(&emoji.text, self.tone);
        info!("Committed {rendered} (index {index}, tone {})", self.tone.index());
        self.committed = Some(rendered.clone());
        self.stage = Stage::Committed;
        Outcome::Commit(rendered)
    }

    fn set_tone(&mut self, tone: SkinTone) -> Outcome {
        if tone == self.tone {
            return Outcome::Ignored;
        }
        self.tone = tone;
        Outcome::Updated
    }

    fn select_next(&mut self) -> Outcome {
        if self.results.is_empty() {
            return Outcome::Ignored;
        }
        self.selected = (self.selected + 1) % self.results.len();
        Outcome::Updated
    }

    fn select_previous(&mut self) -> Outcome {
        if self.results.is_empty() {
            return Outcome::Ignored;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.results.len() - 1);
        Outcome::Updated
    }

    fn query_len(&self) -> usize {
        self.query.chars().count()
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[Emoji] {
        &self.results
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub const fn tone(&self) -> SkinTone {
        self.tone
    }

    #[must_use]
    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Current query generation
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether an exit was requested
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }
}
