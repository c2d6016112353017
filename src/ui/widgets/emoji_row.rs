//! Candidate row with selection indicator

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const GAP: &str = "  ";

/// Emoji laid out on one line, with `↑` under the selected one on the next
///
/// Needs two rows; with only one, the indicator is dropped.
pub struct EmojiRow<'a> {
    emojis: &'a [String],
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> EmojiRow<'a> {
    /// Create a new row widget
    #[must_use]
    pub const fn new(emojis: &'a [String], selected: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            emojis,
            selected,
            theme,
        }
    }

    /// Column where the candidate at `index` starts
    #[must_use]
    pub fn column_of(&self, index: usize) -> usize {
        self.emojis
            .iter()
            .take(index)
            .map(|e| Span::raw(e.as_str()).width() + GAP.len())
            .sum()
    }
}

impl Widget for EmojiRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let spans: Vec<Span> = self
            .emojis
            .iter()
            .flat_map(|e| [Span::raw(e.as_str()), Span::raw(GAP)])
            .collect();
        Paragraph::new(Line::from(spans)).render(Rect { height: 1, ..area }, buf);

        let Some(selected) = self.selected else {
            return;
        };
        if area.height < 2 {
            return;
        }

        let indent = " ".repeat(self.column_of(selected));
        let line = Line::from(vec![
            Span::raw(indent),
            Span::styled("↑", self.theme.indicator_style()),
        ]);
        Paragraph::new(line).render(
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emojis(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_column_of_accounts_for_wide_glyphs() {
        let theme = Theme::default();
        let items = emojis(&["🐱", "🐈", "🐯"]);
        let row = EmojiRow::new(&items, Some(2), &theme);

        assert_eq!(row.column_of(0), 0);
        assert_eq!(row.column_of(1), 4);
        assert_eq!(row.column_of(2), 8);
    }

    #[test]
    fn test_indicator_under_selection() {
        let theme = Theme::default();
        let items = emojis(&["🐱", "🐈"]);
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);

        EmojiRow::new(&items, Some(1), &theme).render(area, &mut buf);
        assert_eq!(buf[(4, 1)].symbol(), "↑");
        assert_eq!(buf[(0, 1)].symbol(), " ");
    }

    #[test]
    fn test_no_indicator_without_selection() {
        let theme = Theme::default();
        let items: Vec<String> = Vec::new();
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);

        EmojiRow::new(&items, None, &theme).render(area, &mut buf);
        assert!((0..10).all(|x| buf[(x, 1)].symbol() == " "));
    }
}
