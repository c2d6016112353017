//! Lookup collaborator abstraction
//!
//! The remote emoji service is a black box: text goes in, a ranked list of
//! candidates comes out. Everything above this trait (cache, picker, session)
//! is written against it so tests can swap in a scripted stub.

use super::error::Result;
use serde::{Deserialize, Serialize};

/// A single candidate returned by the lookup service
///
/// `text` is the base form without any skin tone modifier; tone variants are
/// produced on demand by [`crate::skin_tone::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emoji {
    pub text: String,
}

impl Emoji {
    /// Create a new candidate from its base text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl std::fmt::Display for Emoji {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Text to ranked emoji lookup
///
/// Implementations must be shareable across the worker threads that run
/// debounced fetches.
pub trait EmojiSearch: Send + Sync {
    /// Look up candidates for `text`, best match first
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if the service cannot be reached or replies
    /// with something unusable.
    fn search(&self, text: &str) -> Result<Vec<Emoji>>;
}

impl<T: EmojiSearch + ?Sized> EmojiSearch for std::sync::Arc<T> {
    fn search(&self, text: &str) -> Result<Vec<Emoji>> {
        (**self).search(text)
    }
}
