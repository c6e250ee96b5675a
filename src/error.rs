//! Error types for discord-rest
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for discord-rest
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// The request never produced a usable response
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The request exceeded its deadline
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// The deadline that was exceeded
        timeout_ms: u64,
    },

    /// The service refused the request with 429 and retries ran out
    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited {
        /// Delay the service asked for before the next attempt
        retry_after_seconds: u64,
    },

    /// Every retry attempt failed
    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded {
        /// The configured retry cap
        max_retries: u32,
    },

    /// A request URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // API Errors
    // ============================================================================
    /// The service rejected the request with a decodable error body
    #[error("API error {code} (HTTP {status}): {message}")]
    Api {
        /// HTTP status of the response
        status: u16,
        /// Platform error code from the response body
        code: u64,
        /// Human-readable message from the response body
        message: String,
    },

    /// A non-success response whose body was not the platform error shape
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status of the response
        status: u16,
        /// Raw response body
        body: String,
    },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    /// A body failed to serialize or deserialize as JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A response decoded but did not match the expected shape
    #[error("Failed to decode response: {message}")]
    Decode {
        /// What went wrong
        message: String,
    },
}

/// Error body the platform returns on failed requests
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: u64,
    message: String,
}

impl Error {
    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Build an error from a non-success status and its raw body.
    ///
    /// The platform sends `{"code": <int>, "message": <str>}` on failures;
    /// when the body matches that shape the error becomes [`Error::Api`],
    /// otherwise the raw body is preserved in [`Error::HttpStatus`].
    pub fn from_response(status: u16, body: String) -> Self {
        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(api) => Self::Api {
                status,
                code: api.code,
                message: api.message,
            },
            Err(_) => Self::HttpStatus { status, body },
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } | Error::Api { status, .. } => {
                is_retryable_status(*status)
            }
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for discord-rest
pub type Result<T> = std::result::Result<T, Error>;
