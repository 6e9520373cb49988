//! Error types for the folio libraries.
//!
//! This module provides a unified error type with explicit variants for
//! transport, API, data-quality and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for folio operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error responses from the listing API.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// A fetched record is missing required fields or has degenerate
    /// values that would poison the ranking.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] InvalidRecordError),

    /// The collector hit its page ceiling without the API signaling
    /// end-of-data.
    #[error("pagination limit exceeded after {limit} pages")]
    PageLimitExceeded { limit: u32 },

    /// Input validation errors (invalid organization login, URL format).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// An error response from the listing API.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server, if any.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Check if this is a not-found response (unknown organization or repo).
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Data-quality errors on individual repository records.
#[derive(Debug, Error)]
pub enum InvalidRecordError {
    /// A field required for ranking was absent from the payload.
    #[error("repository '{repo}' is missing required field '{field}'")]
    MissingField { repo: String, field: &'static str },

    /// The record's creation time is not strictly in the past, so the
    /// age-normalized popularity term has no meaningful value.
    #[error("repository '{repo}' has a zero or negative age")]
    DegenerateAge { repo: String },

    /// The computed hotness was NaN or infinite.
    #[error("repository '{repo}' produced a non-finite hotness")]
    NonFiniteHotness { repo: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid organization login.
    #[error("invalid organization login '{value}': {reason}")]
    OrgName { value: String, reason: String },

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Malformed overrides configuration.
    #[error("invalid overrides: {reason}")]
    Overrides { reason: String },
}
