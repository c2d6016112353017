//! Inline terminal picker
//!
//! Draws a [`Snapshot`] into a small inline viewport below the shell prompt
//! and runs the event loop that feeds keypresses to a [`Session`].

use super::error::{Result, UiError};
use super::theme::Theme;
use super::widgets::{EmojiRow, HelpBar, KeyHint, SearchBar};
use crate::connectivity::Probe;
use crate::picker::view::OFFLINE_MESSAGE;
use crate::picker::{KeyPress, Outcome, Snapshot, Stage};
use crate::session::{Session, SessionHandler};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, info};
use ratatui::{
    Frame, Terminal, TerminalOptions, Viewport,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io::{self, IsTerminal, Stdout};
use std::time::{Duration, Instant};

/// Rows reserved below the prompt: query, candidates, indicator, notice, hints
pub const VIEWPORT_HEIGHT: u16 = 5;

/// Upper bound on how long the loop sleeps waiting for input
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderOutcome {
    /// An emoji was picked and handed to the handler
    Committed(String),
    /// The user pressed Escape or Control+C
    Exited,
    /// The lookup host could not be resolved at startup
    Offline,
}

/// Inline picker front end
pub struct InlineFinder {
    theme: Theme,
    hints: Vec<KeyHint>,
}

impl InlineFinder {
    /// Create a finder whose hints advertise `max_results` number keys
    #[must_use]
    pub fn new(max_results: usize) -> Self {
        Self {
            theme: Theme::default(),
            hints: HelpBar::default_hints(max_results),
        }
    }

    /// Setup terminal for the inline viewport
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let backend = CrosstermBackend::new(io::stdout());
        Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(VIEWPORT_HEIGHT),
            },
        )
        .map_err(Into::into)
    }

    /// Clear the viewport and give the terminal back to the shell
    fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        terminal.clear()?;
        terminal.show_cursor()?;
        disable_raw_mode()?;
        Ok(())
    }

    /// Run the session until the user commits, exits, or the host is unreachable
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NotATerminal`] when stdin or stdout is not a TTY,
    /// an IO error if the terminal cannot be driven, or whatever
    /// [`SessionHandler::on_select`] reports.
    pub fn run(
        &self,
        session: &mut Session,
        probe: &dyn Probe,
        host: &str,
        handler: &mut dyn SessionHandler,
    ) -> Result<FinderOutcome> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(UiError::NotATerminal);
        }

        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, session, probe, host, handler);

        if let Err(e) = Self::cleanup_terminal(&mut terminal) {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut Session,
        probe: &dyn Probe,
        host: &str,
        handler: &mut dyn SessionHandler,
    ) -> Result<FinderOutcome> {
        terminal.draw(|frame| self.render(frame, &session.snapshot()))?;

        if session.start(probe, host) == Stage::Offline {
            info!("Lookup host {host} is unreachable");
            terminal.draw(|frame| self.render(frame, &session.snapshot()))?;
            handler.on_offline();
            return Ok(FinderOutcome::Offline);
        }

        let mut dirty = true;
        loop {
            let now = Instant::now();
            dirty |= session.tick(now);

            if dirty {
                terminal.draw(|frame| self.render(frame, &session.snapshot()))?;
                dirty = false;
            }

            let timeout = session
                .next_wakeup(now)
                .map_or(POLL_INTERVAL, |remaining| remaining.min(POLL_INTERVAL));
            if !event::poll(timeout)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let press = KeyPress::from(key);
                    match session.handle_key(&press, Instant::now()) {
                        Outcome::Ignored => {}
                        Outcome::Updated | Outcome::Fetch(_) => dirty = true,
                        Outcome::Commit(emoji) => {
                            debug!("Committed {emoji}");
                            handler.on_select(&emoji)?;
                            return Ok(FinderOutcome::Committed(emoji));
                        }
                        Outcome::Exit => {
                            handler.on_exit();
                            return Ok(FinderOutcome::Exited);
                        }
                    }
                }
                Event::Resize(_, _) => {
                    terminal.autoresize()?;
                    dirty = true;
                }
                _ => {}
            }
        }
    }

    /// Draw one frame for `snapshot`
    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let area = frame.area();
        draw_snapshot(frame, area, snapshot, &self.theme, &self.hints);
    }
}

/// Lay out and draw a snapshot into `area`
pub fn draw_snapshot(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    theme: &Theme,
    hints: &[KeyHint],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    match snapshot.stage {
        Stage::Checking => {
            frame.render_widget(SearchBar::new("", false, theme), chunks[0]);
        }
        Stage::Offline => {
            frame.render_widget(SearchBar::new(OFFLINE_MESSAGE, false, theme).alert(), chunks[0]);
        }
        Stage::Searching => {
            let (text, placeholder) = snapshot.query_line();
            frame.render_widget(SearchBar::new(text, placeholder, theme), chunks[0]);
            frame.render_widget(
                EmojiRow::new(&snapshot.emojis, snapshot.selected, theme),
                chunks[1],
            );
            if let Some(notice) = &snapshot.notice {
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        notice.as_str(),
                        theme.error_style(),
                    ))),
                    chunks[2],
                );
            }
            frame.render_widget(HelpBar::new(hints, theme), chunks[3]);

            let column = if placeholder {
                0
            } else {
                Span::raw(text).width()
            };
            let x = chunks[0].x.saturating_add(2).saturating_add(
                u16::try_from(column).unwrap_or(u16::MAX),
            );
            frame.set_cursor_position(Position::new(
                x.min(chunks[0].right().saturating_sub(1)),
                chunks[0].y,
            ));
        }
        Stage::Committed => {
            if let Some(message) = snapshot.copied_message() {
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(message, theme.success_style()))),
                    chunks[0],
                );
            }
        }
    }
}
