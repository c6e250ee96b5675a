//! Channel, pin, and recipient operations

use super::Client;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::model::{Channel, ChannelType, Message, Overwrite, OverwriteType};
use crate::types::Snowflake;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Parameters for [`Client::create_channel`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateChannelData {
    /// Channel name, 2-100 characters
    pub name: String,
    /// Kind of channel to create; the service defaults to a text channel
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChannelType>,
    /// Channel topic, 0-1024 characters (text channels)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Voice bitrate in bits per second (voice channels)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    /// Voice user limit; 0 means unlimited (voice channels)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u16>,
    /// Seconds a user must wait between messages, 0-21600 (text channels)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u32>,
    /// Sorting position in the channel list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Permission overwrites for the new channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_overwrites: Option<Vec<Overwrite>>,
    /// Parent category identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    /// Whether the channel is age-restricted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
}

/// One entry of a [`Client::move_channels`] reorder
#[derive(Debug, Clone, Serialize)]
pub struct MoveChannelData {
    /// Channel to reposition
    pub id: Snowflake,
    /// New sorting position; null resets it
    pub position: Option<i32>,
}

/// Parameters for [`Client::modify_channel`]
///
/// Unset fields are left unchanged. Doubly-optional fields distinguish
/// "leave alone" (unset) from "clear" (explicit null).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyChannelData {
    /// New channel name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Convert between text and announcement kinds
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChannelType>,
    /// New sorting position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Option<i32>>,
    /// New topic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<Option<String>>,
    /// Whether the channel is age-restricted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<Option<bool>>,
    /// Seconds a user must wait between messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<Option<u32>>,
    /// Voice bitrate in bits per second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<Option<u32>>,
    /// Voice user limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<Option<u16>>,
    /// Full replacement permission overwrites
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_overwrites: Option<Vec<Overwrite>>,
    /// New parent category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
}

/// Body for [`Client::edit_channel_permission`]; the overwrite target is
/// named in the path, not here
#[derive(Debug, Clone, Serialize)]
pub struct PermissionOverwriteData {
    /// Whether the target is a role or a member
    #[serde(rename = "type")]
    pub kind: OverwriteType,
    /// Granted permission bit set, as a decimal string
    pub allow: String,
    /// Denied permission bit set, as a decimal string
    pub deny: String,
}

/// Read-state token for a channel. Undocumented.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    /// Token from the previous acknowledgement, if any
    pub token: Option<String>,
}

#[derive(Serialize)]
struct AddRecipientBody {
    access_token: String,
    nickname: String,
}

impl Client {
    /// List a guild's channels.
    pub async fn channels(&self, guild_id: Snowflake) -> Result<Vec<Channel>> {
        self.http()
            .request_json(
                Method::GET,
                &format!("/guilds/{guild_id}/channels"),
                RequestConfig::new(),
            )
            .await
    }

    /// Create a channel in a guild. Requires MANAGE_CHANNELS.
    pub async fn create_channel(
        &self,
        guild_id: Snowflake,
        data: CreateChannelData,
    ) -> Result<Channel> {
        self.http()
            .request_json(
                Method::POST,
                &format!("/guilds/{guild_id}/channels"),
                RequestConfig::new().json(serde_json::to_value(&data)?),
            )
            .await
    }

    /// Reorder a guild's channels. Requires MANAGE_CHANNELS.
    pub async fn move_channels(
        &self,
        guild_id: Snowflake,
        data: Vec<MoveChannelData>,
    ) -> Result<()> {
        self.http()
            .request_empty(
                Method::PATCH,
                &format!("/guilds/{guild_id}/channels"),
                RequestConfig::new().json(serde_json::to_value(&data)?),
            )
            .await
    }

    /// Get a channel by identifier.
    pub async fn channel(&self, channel_id: Snowflake) -> Result<Channel> {
        self.http()
            .request_json(
                Method::GET,
                &format!("/channels/{channel_id}"),
                RequestConfig::new(),
            )
            .await
    }

    /// Update a channel's settings. Requires MANAGE_CHANNELS.
    pub async fn modify_channel(
        &self,
        channel_id: Snowflake,
        data: ModifyChannelData,
    ) -> Result<()> {
        self.http()
            .request_empty(
                Method::PATCH,
                &format!("/channels/{channel_id}"),
                RequestConfig::new().json(serde_json::to_value(&data)?),
            )
            .await
    }

    /// Delete a channel, or close a direct message. Deleting a category
    /// leaves its children in place without a parent. Requires
    /// MANAGE_CHANNELS.
    pub async fn delete_channel(&self, channel_id: Snowflake) -> Result<()> {
        self.http()
            .request_empty(
                Method::DELETE,
                &format!("/channels/{channel_id}"),
                RequestConfig::new(),
            )
            .await
    }

    /// Set a channel permission overwrite for the role or member named by
    /// `overwrite_id`. Requires MANAGE_ROLES.
    pub async fn edit_channel_permission(
        &self,
        channel_id: Snowflake,
        overwrite_id: Snowflake,
        data: PermissionOverwriteData,
    ) -> Result<()> {
        self.http()
            .request_empty(
                Method::PUT,
                &format!("/channels/{channel_id}/permissions/{overwrite_id}"),
                RequestConfig::new().json(serde_json::to_value(&data)?),
            )
            .await
    }

    /// Remove a channel permission overwrite. Requires MANAGE_ROLES.
    pub async fn delete_channel_permission(
        &self,
        channel_id: Snowflake,
        overwrite_id: Snowflake,
    ) -> Result<()> {
        self.http()
            .request_empty(
                Method::DELETE,
                &format!("/channels/{channel_id}/permissions/{overwrite_id}"),
                RequestConfig::new(),
            )
            .await
    }

    /// Post a typing indicator to a channel. Clients clear it after a few
    /// seconds or on the next message.
    pub async fn typing(&self, channel_id: Snowflake) -> Result<()> {
        self.http()
            .request_empty(
                Method::POST,
                &format!("/channels/{channel_id}/typing"),
                RequestConfig::new(),
            )
            .await
    }

    /// List a channel's pinned messages.
    pub async fn pinned_messages(&self, channel_id: Snowflake) -> Result<Vec<Message>> {
        self.http()
            .request_json(
                Method::GET,
                &format!("/channels/{channel_id}/pins"),
                RequestConfig::new(),
            )
            .await
    }

    /// Pin a message in a channel. Requires MANAGE_MESSAGES.
    pub async fn pin_message(&self, channel_id: Snowflake, message_id: Snowflake) -> Result<()> {
        self.http()
            .request_empty(
                Method::PUT,
                &format!("/channels/{channel_id}/pins/{message_id}"),
                RequestConfig::new(),
            )
            .await
    }

    /// Unpin a message from a channel. Requires MANAGE_MESSAGES.
    pub async fn unpin_message(&self, channel_id: Snowflake, message_id: Snowflake) -> Result<()> {
        self.http()
            .request_empty(
                Method::DELETE,
                &format!("/channels/{channel_id}/pins/{message_id}"),
                RequestConfig::new(),
            )
            .await
    }

    /// Add a user to a group direct message. Needs an OAuth2 access token
    /// with the `gdm.join` scope.
    pub async fn add_recipient(
        &self,
        channel_id: Snowflake,
        user_id: Snowflake,
        access_token: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Result<()> {
        let body = AddRecipientBody {
            access_token: access_token.into(),
            nickname: nickname.into(),
        };

        self.http()
            .request_empty(
                Method::PUT,
                &format!("/channels/{channel_id}/recipients/{user_id}"),
                RequestConfig::new().json(serde_json::to_value(&body)?),
            )
            .await
    }

    /// Remove a user from a group direct message.
    pub async fn remove_recipient(
        &self,
        channel_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<()> {
        self.http()
            .request_empty(
                Method::DELETE,
                &format!("/channels/{channel_id}/recipients/{user_id}"),
                RequestConfig::new(),
            )
            .await
    }

    /// Mark a channel as read up to a message. Undocumented. The token
    /// from the previous acknowledgement rides along and the service
    /// answers with a fresh one.
    pub async fn ack(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        ack: Ack,
    ) -> Result<Ack> {
        self.http()
            .request_json(
                Method::POST,
                &format!("/channels/{channel_id}/messages/{message_id}/ack"),
                RequestConfig::new().json(serde_json::to_value(&ack)?),
            )
            .await
    }
}
