//! Lookup command - one-shot search from command-line text

use crate::EmojError;
use crate::search::LookupGateway;
use crate::skin_tone::{self, SkinTone};
use crate::ui::{ClipboardSink, OutputWriter};
use log::debug;

type Result<T> = std::result::Result<T, EmojError>;

/// Look `text` up once and print the matches on one line
///
/// With a clipboard, the first match is also copied. Returns the number of
/// matches printed.
///
/// # Errors
/// Returns an error if the lookup fails or the clipboard write fails.
pub fn execute(
    gateway: &LookupGateway,
    text: &str,
    tone: SkinTone,
    clipboard: Option<&mut dyn ClipboardSink>,
    output: &dyn OutputWriter,
) -> Result<usize> {
    let results = gateway.fetch(text)?;
    let rendered: Vec<String> = results
        .iter()
        .map(|emoji| skin_tone::apply(&emoji.text, tone))
        .collect();

    debug!("{} match(es) for {text:?}", rendered.len());

    let Some(first) = rendered.first() else {
        output.info(&format!("No emoji found for \"{text}\""));
        return Ok(0);
    };

    output.write(&rendered.join("  "));

    if let Some(clipboard) = clipboard {
        clipboard.copy(first)?;
        output.success(&format!("{first}  has been copied to the clipboard"));
    }

    Ok(rendered.len())
}
