//! Emoj CLI application entry point
//!
//! Opens an inline emoji picker below the shell prompt. Type a few words,
//! pick a match with a number key or Enter, and it lands on the clipboard.
//!
//! # Usage
//!
//! ```bash
//! # Interactive picker
//! emoj
//!
//! # One-shot lookup, printed on one line
//! emoj unicorn
//!
//! # Copy the first match and remember a medium skin tone
//! emoj -c -s 3 thumbs up
//!
//! # Keep a debug log of the session
//! emoj --log-file /tmp/emoj.log
//! ```
//!
//! # Configuration
//!
//! Settings are stored in the user's config directory
//! (`~/.config/emoj/config.toml` on Linux) and created on first run.

use emoj::{
    EmojError,
    cli::Cli,
    commands,
    config::EmojConfig,
    connectivity::DnsProbe,
    picker::view::OFFLINE_MESSAGE,
    ui::{
        ClipboardHandler, ClipboardSink, FinderOutcome, OutputWriter, StdoutWriter,
        SystemClipboard,
    },
};
use env_logger::{Env, Target};
use std::fs::File;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, EmojError>;

/// Exit status when the lookup host could not be resolved
const EXIT_OFFLINE: u8 = 2;

/// Route logs to `--log-file` when given; otherwise only errors reach stderr
///
/// # Errors
/// Returns an error if the log file cannot be created.
fn init_logging(cli: &Cli) -> Result<()> {
    let mut builder = match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            let mut builder =
                env_logger::Builder::from_env(Env::default().default_filter_or("debug"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => env_logger::Builder::from_env(Env::default().default_filter_or("error")),
    };
    builder.init();
    Ok(())
}

fn run(cli: &Cli, output: &dyn OutputWriter) -> Result<ExitCode> {
    let mut config = EmojConfig::load()?;

    if let Some(tone) = cli.skin_tone {
        config.set_skin_tone(tone);
        config.save()?;
    }

    let gateway = emoj::build_gateway(&config)?;

    if let Some(text) = cli.query_text() {
        let mut clipboard = SystemClipboard;
        let sink = if cli.copy {
            Some(&mut clipboard as &mut dyn ClipboardSink)
        } else {
            None
        };
        commands::lookup(&gateway, &text, config.tone(), sink, output)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut handler = ClipboardHandler::system();
    match commands::pick(&config, gateway, &DnsProbe, &mut handler)? {
        FinderOutcome::Committed(emoji) => {
            output.success(&format!("{emoji}  has been copied to the clipboard"));
            Ok(ExitCode::SUCCESS)
        }
        FinderOutcome::Exited => Ok(ExitCode::SUCCESS),
        FinderOutcome::Offline => {
            output.error(OFFLINE_MESSAGE);
            Ok(ExitCode::from(EXIT_OFFLINE))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let output = StdoutWriter::new();

    if let Err(e) = init_logging(&cli) {
        output.error(&format!("Cannot open log file: {e}"));
        return ExitCode::FAILURE;
    }

    match run(&cli, &output) {
        Ok(code) => code,
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
