//! Clipboard hand-off for picked emoji

use super::error::{Result, UiError};
use crate::session::SessionHandler;
use log::{debug, info};

/// Somewhere a picked emoji can be written
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable or rejects the write.
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard via arboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| UiError::ClipboardError(format!("Clipboard unavailable: {e}")))?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Session handler that copies the picked emoji
///
/// Printing the confirmation is left to the caller, once the terminal has
/// been restored.
pub struct ClipboardHandler<C: ClipboardSink = SystemClipboard> {
    sink: C,
    copied: Option<String>,
}

impl ClipboardHandler {
    /// Handler backed by the system clipboard
    #[must_use]
    pub const fn system() -> Self {
        Self::new(SystemClipboard)
    }
}

impl<C: ClipboardSink> ClipboardHandler<C> {
    #[must_use]
    pub const fn new(sink: C) -> Self {
        Self { sink, copied: None }
    }

    /// The emoji written to the clipboard, if any
    #[must_use]
    pub fn copied(&self) -> Option<&str> {
        self.copied.as_deref()
    }

    #[must_use]
    pub const fn sink(&self) -> &C {
        &self.sink
    }
}

impl<C: ClipboardSink> SessionHandler for ClipboardHandler<C> {
    fn on_select(&mut self, emoji: &str) -> Result<()> {
        self.sink.copy(emoji)?;
        debug!("Copied {emoji} to the clipboard");
        self.copied = Some(emoji.to_string());
        Ok(())
    }

    fn on_offline(&mut self) {
        info!("Session ended offline");
    }

    fn on_exit(&mut self) {
        debug!("Session exited without a pick");
    }
}
