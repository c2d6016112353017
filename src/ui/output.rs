//! Output abstraction layer
//!
//! Line-oriented output used once the inline viewport is gone, and by the
//! non-interactive lookup mode. Tests capture output with [`BufferWriter`].

use colored::Colorize;
use std::sync::Mutex;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use emoj::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("🐱  🐈");
/// output.success("🐱  has been copied to the clipboard");
/// output.error("Please check your internet connection");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "›".red().bold(), message.red());
    }

    fn success(&self, message: &str) {
        println!("{}", message.green());
    }

    fn info(&self, message: &str) {
        eprintln!("{}", message.dimmed());
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Info message
    Info,
}

/// Writer that keeps messages in memory
///
/// # Examples
///
/// ```
/// use emoj::ui::output::{BufferWriter, MessageLevel, OutputWriter};
///
/// let writer = BufferWriter::new();
/// writer.success("done");
/// assert_eq!(writer.messages(), vec![(MessageLevel::Success, "done".to_string())]);
/// ```
#[derive(Default)]
pub struct BufferWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferWriter {
    /// Create an empty buffer writer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// Messages at a single level
    #[must_use]
    pub fn at_level(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg)
            .collect()
    }

    fn add_message(&self, level: MessageLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message);
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_writer_creation() {
        let _writer = StdoutWriter::new();
        let _writer2 = StdoutWriter::default();
    }

    #[test]
    fn test_buffer_writer_messages() {
        let writer = BufferWriter::new();

        writer.success("Test success");
        writer.error("Test error");
        writer.write("Plain");

        let messages = writer.messages();
        assert_eq!(messages.len(), 3);

        assert_eq!(messages[0].0, MessageLevel::Success);
        assert_eq!(messages[0].1, "Test success");

        assert_eq!(messages[1].0, MessageLevel::Error);
        assert_eq!(messages[2].0, MessageLevel::Normal);
    }

    #[test]
    fn test_buffer_writer_at_level() {
        let writer = BufferWriter::new();

        writer.info("one");
        writer.write("two");
        writer.info("three");

        assert_eq!(writer.at_level(MessageLevel::Info), vec!["one", "three"]);
        assert!(writer.at_level(MessageLevel::Error).is_empty());
    }

    #[test]
    fn test_message_level_equality() {
        assert_eq!(MessageLevel::Normal, MessageLevel::Normal);
        assert_ne!(MessageLevel::Error, MessageLevel::Success);
    }
}
