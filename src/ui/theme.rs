//! Color theme for the inline picker
//!
//! Defines colors and styles used when drawing a [`Snapshot`](crate::picker::Snapshot).

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the picker
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color for the `›` prompt and the selection indicator
    pub accent: Color,
    /// Color for the copied confirmation
    pub success: Color,
    /// Color for the offline prompt and lookup notices
    pub error: Color,
    /// Color for placeholder and hint text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the search prompt
    #[must_use]
    pub fn prompt_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the typed query
    #[must_use]
    pub fn query_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Style for the selection indicator (↑)
    #[must_use]
    pub fn indicator_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for the offline prompt
    #[must_use]
    pub fn error_prompt_style(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for inline error notices
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
