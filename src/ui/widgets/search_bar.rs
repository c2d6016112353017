//! Search bar widget for query input

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Single-line query prompt: `› query`, or a dimmed placeholder when empty
pub struct SearchBar<'a> {
    /// Text to show after the prompt
    text: &'a str,
    /// Whether `text` is the placeholder
    placeholder: bool,
    /// Draw the prompt in the error color
    alert: bool,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(text: &'a str, placeholder: bool, theme: &'a Theme) -> Self {
        Self {
            text,
            placeholder,
            alert: false,
            theme,
        }
    }

    /// Render the prompt in the error color, e.g. when offline
    #[must_use]
    pub const fn alert(mut self) -> Self {
        self.alert = true;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_style = if self.placeholder {
            self.theme.dimmed_style()
        } else {
            self.theme.query_style()
        };
        let prompt_style = if self.alert {
            self.theme.error_prompt_style()
        } else {
            self.theme.prompt_style()
        };

        let line = Line::from(vec![
            Span::styled("›", prompt_style),
            Span::raw(" "),
            Span::styled(self.text, text_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_renders_prompt_and_query() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        SearchBar::new("cat", false, &theme).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "› cat");
    }

    #[test]
    fn test_placeholder_is_dimmed() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        SearchBar::new("Type here", true, &theme).render(area, &mut buf);
        assert_eq!(buf[(2, 0)].fg, theme.dimmed);
    }

    #[test]
    fn test_alert_prompt_uses_error_color() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        SearchBar::new("offline", false, &theme)
            .alert()
            .render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, theme.error);
    }
}
