//! Credential types
//!
//! The platform accepts exactly two credential forms in the
//! `Authorization` header: bot tokens (prefixed `Bot `) and OAuth2 bearer
//! tokens (prefixed `Bearer `).

use std::fmt;

/// An `Authorization` credential for the REST API
#[derive(Clone, PartialEq, Eq)]
pub enum Token {
    /// A bot token, sent as `Authorization: Bot <token>`
    Bot(String),
    /// An OAuth2 access token, sent as `Authorization: Bearer <token>`
    Bearer(String),
}

impl Token {
    /// Create a bot token credential
    pub fn bot(token: impl Into<String>) -> Self {
        Self::Bot(token.into())
    }

    /// Create an OAuth2 bearer credential
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    /// The full `Authorization` header value
    pub fn header_value(&self) -> String {
        match self {
            Self::Bot(token) => format!("Bot {token}"),
            Self::Bearer(token) => format!("Bearer {token}"),
        }
    }
}

// Tokens are secrets; never let one leak through a Debug log line.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bot(_) => f.write_str("Token::Bot(<redacted>)"),
            Self::Bearer(_) => f.write_str("Token::Bearer(<redacted>)"),
        }
    }
}

#[cfg(test)]
mod token_tests {
    use super::*;

    #[test]
    fn test_header_value() {
        assert_eq!(Token::bot("abc.def").header_value(), "Bot abc.def");
        assert_eq!(Token::bearer("xyz").header_value(), "Bearer xyz");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", Token::bot("very-secret"));
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("redacted"));
    }
}
