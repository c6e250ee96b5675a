//! Message objects
//!
//! Only the fields the pin endpoints exchange are modeled here; this
//! crate does not cover message creation or editing.

use super::user::User;
use crate::types::Snowflake;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message in a channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The message's identifier
    pub id: Snowflake,
    /// Channel the message was sent in
    pub channel_id: Snowflake,
    /// The message author
    pub author: User,
    /// Text content
    #[serde(default)]
    pub content: String,
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
    /// When the message was last edited, if ever
    #[serde(default)]
    pub edited_timestamp: Option<DateTime<Utc>>,
    /// Whether the message is pinned in its channel
    #[serde(default)]
    pub pinned: bool,
}
