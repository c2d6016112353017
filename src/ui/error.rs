//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during terminal operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The system clipboard could not be opened or written
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// stdin/stdout is not an interactive terminal
    #[error("Interactive mode requires a terminal")]
    NotATerminal,
}

impl From<arboard::Error> for UiError {
    fn from(e: arboard::Error) -> Self {
        Self::ClipboardError(e.to_string())
    }
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
