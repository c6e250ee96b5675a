//! Guild member and ban objects

use super::user::User;
use crate::pagination::Cursored;
use crate::types::Snowflake;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's membership in a guild
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// The underlying user account
    pub user: User,
    /// Guild-specific nickname
    #[serde(default)]
    pub nick: Option<String>,
    /// Role identifiers assigned to the member
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    /// When the user joined the guild
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
    /// Whether the member is deafened in voice channels
    #[serde(default)]
    pub deaf: bool,
    /// Whether the member is muted in voice channels
    #[serde(default)]
    pub mute: bool,
}

// The member listing endpoint orders by user id, so the user id is the
// resume point for the next page.
impl Cursored for Member {
    fn cursor(&self) -> Snowflake {
        self.user.id
    }
}

/// A guild ban entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ban {
    /// Reason recorded when the ban was created
    #[serde(default)]
    pub reason: Option<String>,
    /// The banned user
    pub user: User,
}
