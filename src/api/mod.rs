//! API client and endpoint wrappers
//!
//! [`Client`] is the public face of the crate: one method per documented
//! endpoint, grouped by resource. Every method builds a path from the
//! given identifiers, attaches query or JSON body parameters, and runs
//! the request through the shared executor.

mod channel;
mod member;

pub use channel::{
    Ack, CreateChannelData, ModifyChannelData, MoveChannelData, PermissionOverwriteData,
};
pub use member::{AddMemberData, BanData, ModifyMemberData};

use crate::http::{HttpClient, HttpClientConfig, Token};

/// A client for the REST API.
///
/// Cheap to share: the underlying executor holds one connection pool,
/// every method takes `&self`, and clones share the pool and rate
/// limiter, so a single client can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Create a client with default configuration and the given credential
    pub fn new(token: Token) -> Self {
        Self {
            http: HttpClient::new(token),
        }
    }

    /// Create a client with custom executor configuration
    pub fn with_config(config: HttpClientConfig, token: Token) -> Self {
        Self {
            http: HttpClient::with_token(config, token),
        }
    }

    /// Wrap an already-built executor
    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Access the underlying executor
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
