//! Guild member and ban operations

use super::Client;
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use crate::model::{Ban, Member};
use crate::pagination::{self, Drained, MAX_PAGE_SIZE};
use crate::types::Snowflake;
use futures::Stream;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

/// Parameters for [`Client::add_member`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddMemberData {
    /// OAuth2 access token granted with the `guilds.join` scope for the
    /// user being added
    pub access_token: String,
    /// Nickname to set on join. Requires MANAGE_NICKNAMES.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// Role identifiers to assign on join. Requires MANAGE_ROLES.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Snowflake>>,
    /// Whether the user joins muted in voice channels. Requires MUTE_MEMBERS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    /// Whether the user joins deafened in voice channels. Requires DEAFEN_MEMBERS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaf: Option<bool>,
}

/// Parameters for [`Client::modify_member`]
///
/// Unset fields are left unchanged. `channel_id` distinguishes "leave
/// alone" (unset) from "disconnect from voice" (explicit null).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyMemberData {
    /// New nickname. Requires MANAGE_NICKNAMES.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// Full replacement role set. Requires MANAGE_ROLES.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Snowflake>>,
    /// Mute or unmute in voice channels. Requires MUTE_MEMBERS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    /// Deafen or undeafen in voice channels. Requires DEAFEN_MEMBERS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaf: Option<bool>,
    /// Voice channel to move the member to; `Some(None)` disconnects
    /// them. Requires MOVE_MEMBERS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Option<Snowflake>>,
}

/// Parameters for [`Client::ban`]
#[derive(Debug, Clone, Default)]
pub struct BanData {
    /// Days of the user's recent messages to delete, 0-7
    pub delete_message_days: Option<u32>,
    /// Reason to record for the ban
    pub reason: Option<String>,
}

#[derive(Deserialize)]
struct Pruned {
    pruned: Option<u64>,
}

impl Client {
    /// Get a single guild member.
    pub async fn member(&self, guild_id: Snowflake, user_id: Snowflake) -> Result<Member> {
        self.http()
            .request_json(
                Method::GET,
                &format!("/guilds/{guild_id}/members/{user_id}"),
                RequestConfig::new(),
            )
            .await
    }

    /// List a guild's members from the beginning, smallest identifier
    /// first, paginating until `limit` records are collected or the
    /// listing is exhausted. `limit == 0` means "everything available".
    pub async fn members(&self, guild_id: Snowflake, limit: u32) -> Drained<Member> {
        self.members_after(guild_id, Snowflake::default(), limit).await
    }

    /// List a guild's members with identifiers strictly greater than
    /// `after`, paginating like [`Client::members`].
    ///
    /// Pages are fetched sequentially, at most [`MAX_PAGE_SIZE`] records
    /// per request, so a bounded fetch costs at most `limit / 1000`
    /// requests, rounded up. A page failure stops pagination and the
    /// returned [`Drained`] keeps the records collected so far next to
    /// the error.
    pub async fn members_after(
        &self,
        guild_id: Snowflake,
        after: Snowflake,
        limit: u32,
    ) -> Drained<Member> {
        pagination::drain_after(after, limit, move |cursor, size| {
            self.members_page(guild_id, cursor, size)
        })
        .await
    }

    /// Lazily page through a guild's members with the same cursor and
    /// limit semantics as [`Client::members_after`], yielding one page
    /// per item.
    pub fn member_pages(
        &self,
        guild_id: Snowflake,
        after: Snowflake,
        limit: u32,
    ) -> impl Stream<Item = Result<Vec<Member>>> + '_ {
        pagination::page_stream(after, limit, move |cursor, size| {
            self.members_page(guild_id, cursor, size)
        })
    }

    /// Fetch one page of a guild's member listing.
    ///
    /// `limit` above [`MAX_PAGE_SIZE`] is clamped down to it; `0` asks
    /// for the service's default page size. The zero cursor is omitted
    /// from the query, fetching from the beginning.
    pub async fn members_page(
        &self,
        guild_id: Snowflake,
        after: Snowflake,
        limit: u32,
    ) -> Result<Vec<Member>> {
        let limit = limit.min(MAX_PAGE_SIZE);

        let mut config = RequestConfig::new().query("limit", limit);
        if !after.is_zero() {
            config = config.query("after", after);
        }

        self.http()
            .request_json(Method::GET, &format!("/guilds/{guild_id}/members"), config)
            .await
    }

    /// Add a user to a guild using an OAuth2 access token with the
    /// `guilds.join` scope.
    ///
    /// Returns the new member, or `None` when the user was already a
    /// member (the service answers 204 No Content).
    pub async fn add_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        data: AddMemberData,
    ) -> Result<Option<Member>> {
        let response = self
            .http()
            .request(
                Method::PUT,
                &format!("/guilds/{guild_id}/members/{user_id}"),
                RequestConfig::new().json(serde_json::to_value(&data)?),
            )
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let member = response.json().await.map_err(Error::Http)?;
        Ok(Some(member))
    }

    /// Modify attributes of a guild member.
    pub async fn modify_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        data: ModifyMemberData,
    ) -> Result<()> {
        self.http()
            .request_empty(
                Method::PATCH,
                &format!("/guilds/{guild_id}/members/{user_id}"),
                RequestConfig::new().json(serde_json::to_value(&data)?),
            )
            .await
    }

    /// Count the members a prune operation would remove. `days` must be
    /// 1 or more; 0 falls back to the default of 7. Requires KICK_MEMBERS.
    pub async fn prune_count(&self, guild_id: Snowflake, days: u32) -> Result<u64> {
        let days = if days == 0 { 7 } else { days };

        let resp: Pruned = self
            .http()
            .request_json(
                Method::GET,
                &format!("/guilds/{guild_id}/prune"),
                RequestConfig::new().query("days", days),
            )
            .await?;

        Ok(resp.pruned.unwrap_or(0))
    }

    /// Begin a prune without waiting for the removed-member count.
    /// `days` defaults like [`Client::prune_count`]. Requires KICK_MEMBERS.
    pub async fn prune(&self, guild_id: Snowflake, days: u32) -> Result<()> {
        let days = if days == 0 { 7 } else { days };

        self.http()
            .request_empty(
                Method::POST,
                &format!("/guilds/{guild_id}/prune"),
                RequestConfig::new()
                    .query("days", days)
                    .query("compute_prune_count", false),
            )
            .await
    }

    /// Begin a prune and return the number of members removed.
    /// `days` defaults like [`Client::prune_count`]. Requires KICK_MEMBERS.
    pub async fn prune_with_count(&self, guild_id: Snowflake, days: u32) -> Result<u64> {
        let days = if days == 0 { 7 } else { days };

        let resp: Pruned = self
            .http()
            .request_json(
                Method::POST,
                &format!("/guilds/{guild_id}/prune"),
                RequestConfig::new()
                    .query("days", days)
                    .query("compute_prune_count", true),
            )
            .await?;

        Ok(resp.pruned.unwrap_or(0))
    }

    /// Remove a member from a guild. Requires KICK_MEMBERS.
    pub async fn kick(&self, guild_id: Snowflake, user_id: Snowflake) -> Result<()> {
        self.http()
            .request_empty(
                Method::DELETE,
                &format!("/guilds/{guild_id}/members/{user_id}"),
                RequestConfig::new(),
            )
            .await
    }

    /// List the users banned from a guild. Requires BAN_MEMBERS.
    pub async fn bans(&self, guild_id: Snowflake) -> Result<Vec<Ban>> {
        self.http()
            .request_json(
                Method::GET,
                &format!("/guilds/{guild_id}/bans"),
                RequestConfig::new(),
            )
            .await
    }

    /// Get the ban entry for a single user. Requires BAN_MEMBERS.
    pub async fn get_ban(&self, guild_id: Snowflake, user_id: Snowflake) -> Result<Ban> {
        self.http()
            .request_json(
                Method::GET,
                &format!("/guilds/{guild_id}/bans/{user_id}"),
                RequestConfig::new(),
            )
            .await
    }

    /// Ban a user, optionally deleting their recent messages.
    /// `delete_message_days` above 7 is clamped to 7. Requires BAN_MEMBERS.
    pub async fn ban(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        data: BanData,
    ) -> Result<()> {
        let mut config = RequestConfig::new();
        if let Some(days) = data.delete_message_days {
            config = config.query("delete_message_days", days.min(7));
        }
        if let Some(reason) = data.reason {
            config = config.query("reason", reason);
        }

        self.http()
            .request_empty(
                Method::PUT,
                &format!("/guilds/{guild_id}/bans/{user_id}"),
                config,
            )
            .await
    }

    /// Remove a user's ban. Requires BAN_MEMBERS.
    pub async fn unban(&self, guild_id: Snowflake, user_id: Snowflake) -> Result<()> {
        self.http()
            .request_empty(
                Method::DELETE,
                &format!("/guilds/{guild_id}/bans/{user_id}"),
                RequestConfig::new(),
            )
            .await
    }
}
