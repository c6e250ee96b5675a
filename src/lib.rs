//! # discord-rest
//!
//! Async Rust bindings for the Discord REST API: guild membership,
//! channel management, bans, and pins.
//!
//! ## Features
//!
//! - **One method per endpoint**: typed wrappers over the documented
//!   member, ban, channel, pin, and recipient routes
//! - **Member pagination**: whole-listing drains with partial-result
//!   preservation, or a lazy page stream
//! - **Robust executor**: bot/bearer auth, bounded retries with backoff,
//!   429 `Retry-After` handling, local rate limiting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use discord_rest::{Client, Snowflake, Token};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new(Token::bot(std::env::var("BOT_TOKEN").unwrap()));
//!
//!     let guild = Snowflake::new(41_771_983_423_143_937);
//!
//!     // Fetch every member, paginating behind the scenes
//!     let drained = client.members(guild, 0).await;
//!     println!("fetched {} members", drained.len());
//!     if let Some(err) = drained.error {
//!         eprintln!("stopped early: {err}");
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        api::Client                          │
//! │   member / members_after / ban / channels / pins / ...      │
//! └────────────────────────────┬────────────────────────────────┘
//!                              │
//!          ┌───────────────────┴───────────────────┐
//!          │                                       │
//! ┌────────┴─────────┐                   ┌─────────┴─────────┐
//! │    pagination    │                   │   http (executor) │
//! │ drain_after      │── page fetches ──▶│ auth, retries,    │
//! │ page_stream      │                   │ rate limiting     │
//! └──────────────────┘                   └───────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module declarations
// ============================================================================

/// API client and endpoint wrappers
pub mod api;

/// Error types
pub mod error;

/// HTTP request executor
pub mod http;

/// Resource models
pub mod model;

/// Cursor pagination
pub mod pagination;

/// Shared identifier type
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::Client;
pub use error::{Error, Result};
pub use http::{HttpClient, HttpClientConfig, Token};
pub use pagination::{Cursored, Drained, MAX_PAGE_SIZE};
pub use types::Snowflake;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
