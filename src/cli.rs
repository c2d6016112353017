//! Command-line interface definitions and parsing
//!
//! Without any text the interactive picker opens. Given text, emoj looks it
//! up once and prints the matches, which is handy in scripts.
//!
//! # Examples
//!
//! ```
//! use emoj::cli::Cli;
//!
//! let cli = Cli::parse_from_iter(["emoj", "unicorn", "--copy"]);
//! assert_eq!(cli.query_text().as_deref(), Some("unicorn"));
//! assert!(cli.copy);
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Find relevant emoji from text on the command-line
#[derive(Parser, Debug, Clone)]
#[command(name = "emoj")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text to look up; omit to open the interactive picker
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Copy the first match to the clipboard (with TEXT)
    #[arg(short = 'c', long = "copy")]
    pub copy: bool,

    /// Set and persist the default skin tone (0 = none, 1-5 = light to dark)
    #[arg(
        short = 's',
        long = "skin-tone",
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub skin_tone: Option<u8>,

    /// Write debug logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    #[must_use]
    pub fn parse_from_iter<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Positional words joined with spaces, or `None` for interactive mode
    #[must_use]
    pub fn query_text(&self) -> Option<String> {
        let text = self.text.join(" ");
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Whether to open the interactive picker
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.query_text().is_none()
    }
}
