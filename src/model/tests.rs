//! Tests for resource model decoding

use super::*;
use crate::types::Snowflake;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_decode_member() {
    let payload = json!({
        "user": {
            "id": "80351110224678912",
            "username": "nelly",
            "discriminator": "1337",
            "avatar": "8342729096ea3675442027381ff50dfe",
            "bot": false
        },
        "nick": "NOT API SUPPORT",
        "roles": ["41771983423143936"],
        "joined_at": "2015-04-26T06:26:56.936000+00:00",
        "deaf": false,
        "mute": false,
        "flags": 0
    });

    let member: Member = serde_json::from_value(payload).unwrap();
    assert_eq!(member.user.id, Snowflake::new(80_351_110_224_678_912));
    assert_eq!(member.user.username, "nelly");
    assert_eq!(member.nick.as_deref(), Some("NOT API SUPPORT"));
    assert_eq!(member.roles, vec![Snowflake::new(41_771_983_423_143_936)]);
    assert!(member.joined_at.is_some());
    assert!(!member.deaf);
}

#[test]
fn test_decode_member_minimal() {
    // Optional fields omitted entirely
    let payload = json!({
        "user": {"id": "3", "username": "ghost"}
    });

    let member: Member = serde_json::from_value(payload).unwrap();
    assert_eq!(member.user.id, Snowflake::new(3));
    assert_eq!(member.user.discriminator, "");
    assert!(member.nick.is_none());
    assert!(member.roles.is_empty());
    assert!(member.joined_at.is_none());
}

#[test]
fn test_decode_ban() {
    let payload = json!({
        "reason": "mentioned everyone",
        "user": {
            "id": "53908099506183680",
            "username": "Mason",
            "discriminator": "9999"
        }
    });

    let ban: Ban = serde_json::from_value(payload).unwrap();
    assert_eq!(ban.reason.as_deref(), Some("mentioned everyone"));
    assert_eq!(ban.user.id, Snowflake::new(53_908_099_506_183_680));
}

#[test]
fn test_decode_ban_null_reason() {
    let payload = json!({
        "reason": null,
        "user": {"id": "1", "username": "u"}
    });

    let ban: Ban = serde_json::from_value(payload).unwrap();
    assert!(ban.reason.is_none());
}

#[test]
fn test_decode_guild_text_channel() {
    let payload = json!({
        "id": "41771983423143937",
        "guild_id": "41771983423143937",
        "name": "general",
        "type": 0,
        "position": 6,
        "permission_overwrites": [
            {"id": "4", "type": 0, "allow": "1024", "deny": "0"}
        ],
        "rate_limit_per_user": 2,
        "nsfw": true,
        "topic": "24/7 chat about how to gank Mike #2",
        "last_message_id": "155117677105512449",
        "parent_id": "399942396007890945"
    });

    let channel: Channel = serde_json::from_value(payload).unwrap();
    assert_eq!(channel.kind, ChannelType::GuildText);
    assert_eq!(channel.name.as_deref(), Some("general"));
    assert_eq!(channel.position, Some(6));
    assert!(channel.nsfw);
    assert_eq!(channel.permission_overwrites.len(), 1);
    assert_eq!(channel.permission_overwrites[0].kind, OverwriteType::Role);
    assert_eq!(channel.permission_overwrites[0].allow, "1024");
}

#[test]
fn test_decode_voice_channel() {
    let payload = json!({
        "id": "155101607195836416",
        "guild_id": "41771983423143937",
        "name": "ROCKET CHEESE",
        "type": 2,
        "nsfw": false,
        "position": 5,
        "bitrate": 64000,
        "user_limit": 0
    });

    let channel: Channel = serde_json::from_value(payload).unwrap();
    assert_eq!(channel.kind, ChannelType::GuildVoice);
    assert_eq!(channel.bitrate, Some(64_000));
    assert_eq!(channel.user_limit, Some(0));
    assert!(channel.topic.is_none());
}

#[test]
fn test_unknown_channel_type_tolerated() {
    let payload = json!({"id": "1", "type": 97});

    let channel: Channel = serde_json::from_value(payload).unwrap();
    assert_eq!(channel.kind, ChannelType::Unknown);
}

#[test]
fn test_decode_pinned_message() {
    let payload = json!({
        "id": "334385199974967042",
        "channel_id": "290926798999357250",
        "author": {
            "id": "53908099506183680",
            "username": "Mason",
            "discriminator": "9999"
        },
        "content": "Supa Hot",
        "timestamp": "2017-07-11T17:27:07.299000+00:00",
        "edited_timestamp": null,
        "pinned": true
    });

    let message: Message = serde_json::from_value(payload).unwrap();
    assert_eq!(message.content, "Supa Hot");
    assert!(message.pinned);
    assert!(message.edited_timestamp.is_none());
    assert_eq!(message.author.username, "Mason");
}

#[test]
fn test_channel_type_round_trip_as_integer() {
    let encoded = serde_json::to_string(&ChannelType::GuildCategory).unwrap();
    assert_eq!(encoded, "4");

    let decoded: ChannelType = serde_json::from_str("5").unwrap();
    assert_eq!(decoded, ChannelType::GuildAnnouncement);
}
