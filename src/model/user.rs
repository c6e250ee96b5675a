//! User objects

use crate::types::Snowflake;
use serde::{Deserialize, Serialize};

/// A user account.
///
/// Users are the base entity of the platform; members, bans, and message
/// authors all embed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's identifier
    pub id: Snowflake,
    /// The user's name, not unique across the platform
    pub username: String,
    /// Four-digit tag distinguishing same-named users ("0" for migrated accounts)
    #[serde(default)]
    pub discriminator: String,
    /// Avatar image hash
    #[serde(default)]
    pub avatar: Option<String>,
    /// Whether the account belongs to an OAuth2 application
    #[serde(default)]
    pub bot: bool,
}
