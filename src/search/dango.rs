//! HTTP client for the Dango emoji prediction service

use super::error::{Result, SearchError};
use super::traits::{Emoji, EmojiSearch};
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Default lookup endpoint
pub const DEFAULT_ENDPOINT: &str = "https://emoji.getdango.com/api/emoji";

#[derive(Deserialize)]
struct DangoResponse {
    results: Vec<DangoResult>,
}

#[derive(Deserialize)]
struct DangoResult {
    text: String,
    #[allow(dead_code)]
    #[serde(default)]
    score: f64,
}

/// Blocking client for the Dango API
///
/// Sends `GET {endpoint}?q=<text>` and returns the predicted emoji in the
/// order the service ranked them.
pub struct DangoClient {
    endpoint: String,
    client: Client,
}

impl DangoClient {
    /// Create a client for `endpoint` with a per-request timeout
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Transport` if the HTTP client cannot be built
    /// (for example when the TLS backend fails to initialise).
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// The endpoint this client talks to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EmojiSearch for DangoClient {
    fn search(&self, text: &str) -> Result<Vec<Emoji>> {
        debug!("GET {} q={text:?}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", text)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text()?;
        parse_response(&body)
    }
}

/// Decode a Dango response body into candidates
fn parse_response(body: &str) -> Result<Vec<Emoji>> {
    let response: DangoResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;

    Ok(response
        .results
        .into_iter()
        .map(|r| Emoji::new(r.text))
        .collect())
}
