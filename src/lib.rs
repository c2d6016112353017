//! Emoj - find relevant emoji from text on the command-line
//!
//! This library provides the interactive inline picker, a memoizing client
//! for the emoji lookup service, and the skin tone rules used to render
//! candidates.

use std::sync::Arc;
use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod connectivity;
pub mod debounce;
pub mod picker;
pub mod search;
pub mod session;
pub mod skin_tone;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum EmojError {
    /// Lookup error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Terminal or clipboard error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Build the lookup gateway described by `config`
///
/// # Errors
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_gateway(config: &config::EmojConfig) -> Result<search::LookupGateway, EmojError> {
    let client = search::DangoClient::new(&config.endpoint, config.timeout())?;
    Ok(search::LookupGateway::with_max_results(
        Arc::new(client),
        config.max_results,
    ))
}
