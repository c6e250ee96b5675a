//! HTTP client module
//!
//! The shared request executor: a reqwest-backed client with credential
//! injection, bounded retries, backoff strategies, and local rate limiting.
//!
//! # Features
//!
//! - **Authentication**: bot and bearer tokens via [`Token`]
//! - **Automatic Retries**: configurable retry logic with backoff
//! - **Rate Limiting**: token bucket limiter plus 429 `Retry-After` handling
//! - **Decoding**: JSON responses and the platform's error body format

mod client;
mod rate_limit;
mod token;

pub use client::{
    BackoffType, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, API_BASE,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use token::Token;
