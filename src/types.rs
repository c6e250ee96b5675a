//! Common types used throughout discord-rest
//!
//! This module contains the `Snowflake` identifier type shared by every
//! resource model and API operation.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Milliseconds since the Unix epoch at which the platform started
/// allocating identifiers (2015-01-01T00:00:00Z).
const EPOCH_MS: u64 = 1_420_070_400_000;

/// A 64-bit resource identifier with embedded creation-time ordering.
///
/// Snowflakes are transmitted as decimal strings on the wire but compared
/// and stored as integers. Because the upper bits encode the creation
/// timestamp, snowflake order is creation order, which is what makes them
/// usable as pagination cursors: the zero snowflake sorts before every real
/// identifier and therefore means "from the beginning".
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snowflake(u64);

impl Snowflake {
    /// Create a snowflake from its raw integer value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw integer value
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whether this is the zero sentinel ("from the beginning")
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The creation time embedded in the identifier's upper 42 bits
    pub fn created_at(self) -> DateTime<Utc> {
        let ms = (self.0 >> 22) + EPOCH_MS;
        // (u64::MAX >> 22) + EPOCH_MS fits i64, so this never yields None
        DateTime::from_timestamp_millis(ms as i64).unwrap_or_default()
    }
}

impl From<u64> for Snowflake {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnowflakeVisitor;

        impl Visitor<'_> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a snowflake as a decimal string or integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse::<u64>().map(Snowflake).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Snowflake(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v).map(Snowflake).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0", 0; "zero")]
    #[test_case("80351110224678912", 80_351_110_224_678_912; "documented example")]
    #[test_case("18446744073709551615", u64::MAX; "max")]
    fn test_parse(input: &str, expected: u64) {
        let id: Snowflake = input.parse().unwrap();
        assert_eq!(id.value(), expected);
        assert_eq!(id.to_string(), input);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-number".parse::<Snowflake>().is_err());
        assert!("-5".parse::<Snowflake>().is_err());
    }

    #[test]
    fn test_serde_string_on_the_wire() {
        let id = Snowflake::new(80_351_110_224_678_912);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"80351110224678912\"");

        let back: Snowflake = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_serde_accepts_integer() {
        let id: Snowflake = serde_json::from_str("80351110224678912").unwrap();
        assert_eq!(id.value(), 80_351_110_224_678_912);
    }

    #[test]
    fn test_ordering_follows_creation_time() {
        let older = Snowflake::new(80_351_110_224_678_912);
        let newer = Snowflake::new(175_928_847_299_117_063);
        assert!(older < newer);
        assert!(older.created_at() < newer.created_at());
    }

    #[test]
    fn test_created_at_documented_example() {
        // 175928847299117063 >> 22 == 41944705796 ms past the epoch
        let id = Snowflake::new(175_928_847_299_117_063);
        assert_eq!(id.created_at().timestamp_millis(), 1_462_015_105_796);
    }

    #[test]
    fn test_zero_sentinel() {
        assert!(Snowflake::default().is_zero());
        assert!(!Snowflake::new(1).is_zero());
    }
}
