//! Terminal front end
//!
//! Everything that touches the terminal or the clipboard lives here. The
//! picker rules themselves are in [`crate::picker`]; this layer only draws
//! [`Snapshot`](crate::picker::Snapshot)s and forwards keypresses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   crossterm events  →  KeyPress         │
//! └────────────────┬────────────────────────┘
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │   Session (picker + debounce + lookup)  │
//! └────────────────┬────────────────────────┘
//!                  ▼
//! ┌───────────────────────┐  ┌──────────────────┐
//! │ InlineFinder (ratatui)│  │ ClipboardHandler │
//! │  SearchBar / EmojiRow │  │  (arboard)       │
//! └───────────────────────┘  └──────────────────┘
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use emoj::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("🦄  has been copied to the clipboard");
//! output.error("Please check your internet connection");
//! ```

mod error;

pub mod clipboard;
pub mod finder;
pub mod output;
pub mod theme;
pub mod widgets;

pub use clipboard::{ClipboardHandler, ClipboardSink, SystemClipboard};
pub use error::{Result, UiError};
pub use finder::{FinderOutcome, InlineFinder};
pub use output::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use theme::Theme;
