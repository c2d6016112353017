//! Lookup-specific error types
//!
//! This module defines the errors that can occur while asking the remote
//! emoji service for candidates. They are never fatal to the picker: a failed
//! lookup leaves the session running with an inline notice.
//!
//! # Error Types
//!
//! - **`Transport`**: The request could not be sent or the connection dropped
//! - **`Status`**: The service answered with a non-success HTTP status
//! - **`Decode`**: The response body was not the expected JSON shape
//! - **`Shared`**: A failure produced by another caller of the same cached query

use std::sync::Arc;
use thiserror::Error;

/// Lookup errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network-level failure (DNS, connect, timeout, TLS)
    #[error("Lookup request failed: {0}")]
    Transport(String),

    /// The service replied with an unexpected status code
    #[error("Lookup service returned HTTP {0}")]
    Status(u16),

    /// The response body could not be decoded
    #[error("Malformed lookup response: {0}")]
    Decode(String),

    /// Failure shared with concurrent callers waiting on the same query
    #[error("{0}")]
    Shared(Arc<SearchError>),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<Arc<SearchError>> for SearchError {
    fn from(e: Arc<SearchError>) -> Self {
        Self::Shared(e)
    }
}

/// Result type for lookup operations
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
