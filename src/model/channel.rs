//! Channel objects

use crate::types::Snowflake;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The kind of a channel, as the integer the wire format uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ChannelType {
    /// A text channel within a guild
    #[default]
    GuildText = 0,
    /// A direct message between users
    Dm = 1,
    /// A voice channel within a guild
    GuildVoice = 2,
    /// A direct message between multiple users
    GroupDm = 3,
    /// An organizational category containing other channels
    GuildCategory = 4,
    /// A channel users can follow and crosspost from
    GuildAnnouncement = 5,
    /// A kind this crate does not model
    #[serde(other)]
    Unknown = u8::MAX,
}

/// Whether a permission overwrite targets a role or a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum OverwriteType {
    /// Overwrite applies to everyone holding a role
    Role = 0,
    /// Overwrite applies to a single member
    Member = 1,
}

/// A channel- or category-level permission overwrite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overwrite {
    /// Role or user identifier the overwrite targets
    pub id: Snowflake,
    /// Whether `id` is a role or a member
    #[serde(rename = "type")]
    pub kind: OverwriteType,
    /// Granted permission bit set, as a decimal string
    pub allow: String,
    /// Denied permission bit set, as a decimal string
    pub deny: String,
}

/// A guild channel, category, or direct message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// The channel's identifier
    pub id: Snowflake,
    /// The kind of channel
    #[serde(rename = "type")]
    pub kind: ChannelType,
    /// Owning guild; absent for direct messages
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    /// Sorting position in the channel list
    #[serde(default)]
    pub position: Option<i32>,
    /// Permission overwrites for the channel
    #[serde(default)]
    pub permission_overwrites: Vec<Overwrite>,
    /// Channel name; absent for direct messages
    #[serde(default)]
    pub name: Option<String>,
    /// Channel topic
    #[serde(default)]
    pub topic: Option<String>,
    /// Whether the channel is age-restricted
    #[serde(default)]
    pub nsfw: bool,
    /// Identifier of the most recent message, if any
    #[serde(default)]
    pub last_message_id: Option<Snowflake>,
    /// Voice bitrate in bits per second
    #[serde(default)]
    pub bitrate: Option<u32>,
    /// Voice user limit; 0 means unlimited
    #[serde(default)]
    pub user_limit: Option<u16>,
    /// Seconds a user must wait between messages
    #[serde(default)]
    pub rate_limit_per_user: Option<u32>,
    /// Parent category identifier
    #[serde(default)]
    pub parent_id: Option<Snowflake>,
}
