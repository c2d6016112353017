//! Display projection
//!
//! [`project`] turns the picker state into a plain [`Snapshot`] the terminal
//! layer can draw without knowing any picker rules. Candidates are already
//! rendered with the current skin tone.

use super::state::{Picker, Stage};

/// Placeholder shown while the query is empty
pub const PLACEHOLDER: &str = "Relevant emojis will appear when you start writing";

/// Message shown when the lookup host cannot be found
pub const OFFLINE_MESSAGE: &str = "Please check your internet connection";

/// What should be on screen right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub stage: Stage,
    pub query: String,
    /// Candidates rendered with the current tone
    pub emojis: Vec<String>,
    pub tone: u8,
    /// Position of the selection indicator, `None` when there are no candidates
    pub selected: Option<usize>,
    pub committed: Option<String>,
    /// Transient inline notice (failed lookup)
    pub notice: Option<String>,
}

impl Snapshot {
    /// Text for the query line: the query, or the placeholder when empty
    #[must_use]
    pub fn query_line(&self) -> (&str, bool) {
        if self.query.is_empty() {
            (PLACEHOLDER, true)
        } else {
            (self.query.as_str(), false)
        }
    }

    /// Confirmation line for a committed emoji
    #[must_use]
    pub fn copied_message(&self) -> Option<String> {
        self.committed
            .as_ref()
            .map(|emoji| format!("{emoji}  has been copied to the clipboard"))
    }
}

/// Project the picker into a display snapshot
#[must_use]
pub fn project(picker: &Picker) -> Snapshot {
    let tone = picker.tone();
    let emojis: Vec<String> = picker
        .results()
        .iter()
        .map(|e| crate::skin_tone::apply(&e.text, tone))
        .collect();

    let selected = if emojis.is_empty() {
        None
    } else {
        Some(picker.selected())
    };

    Snapshot {
        stage: picker.stage(),
        query: picker.query().to_string(),
        emojis,
        tone: tone.index(),
        selected,
        committed: picker.committed().map(str::to_string),
        notice: picker.notice().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::KeyPress;
    use crate::search::Emoji;
    use crate::skin_tone::SkinTone;

    fn searching_with(query: &str, emojis: &[&str]) -> Picker {
        let mut picker = Picker::new(SkinTone::None);
        picker.resolve_connectivity(Stage::Searching);
        for c in query.chars() {
            picker.handle_key(&KeyPress::char(c));
        }
        let generation = picker.generation();
        picker.apply_results(generation, emojis.iter().map(|e| Emoji::new(*e)).collect());
        picker
    }

    #[test]
    fn test_checking_snapshot() {
        let picker = Picker::new(SkinTone::None);
        let snapshot = project(&picker);
        assert_eq!(snapshot.stage, Stage::Checking);
        assert!(snapshot.emojis.is_empty());
        assert_eq!(snapshot.selected, None);
    }

    #[test]
    fn test_placeholder_when_query_empty() {
        let snapshot = project(&searching_with("", &[]));
        assert_eq!(snapshot.query_line(), (PLACEHOLDER, true));
    }

    #[test]
    fn test_query_line_shows_query() {
        let snapshot = project(&searching_with("ca", &["🐱"]));
        assert_eq!(snapshot.query_line(), ("ca", false));
        assert_eq!(snapshot.selected, Some(0));
    }

    #[test]
    fn test_emojis_rendered_with_tone() {
        let mut picker = searching_with("ok", &["👌", "🆗"]);
        picker.handle_key(&KeyPress::up());

        let snapshot = project(&picker);
        assert_eq!(snapshot.tone, 1);
        assert_eq!(snapshot.emojis, vec!["👌\u{1F3FB}".to_string(), "🆗".to_string()]);
    }

    #[test]
    fn test_copied_message() {
        let mut picker = searching_with("ca", &["🐱"]);
        picker.handle_key(&KeyPress::enter());

        let snapshot = project(&picker);
        assert_eq!(snapshot.stage, Stage::Committed);
        assert_eq!(
            snapshot.copied_message().as_deref(),
            Some("🐱  has been copied to the clipboard")
        );
    }

    #[test]
    fn test_projection_is_pure() {
        let picker = searching_with("ca", &["🐱", "🐈"]);
        assert_eq!(project(&picker), project(&picker));
    }
}
