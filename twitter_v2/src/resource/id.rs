use std::{fmt, num::ParseIntError, str};

use serde::{
    de::{Error, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// Wire representation of a numeric id. The API sends ids as strings, but numbers are accepted
/// too.
#[derive(Clone, Copy, Debug)]
struct IdU64(u64);

impl Serialize for IdU64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for IdU64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IdU64Visitor)
    }
}

struct IdU64Visitor;

impl<'de> Visitor<'de> for IdU64Visitor {
    type Value = IdU64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an unsigned 64-bit integer id, as a string or a number")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(IdU64)
            .map_err(|_| E::custom(format!("id out of range: {}", v)))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(IdU64(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse()
            .map(IdU64)
            .map_err(|_| E::custom(format!("id is not a valid u64: \"{}\"", v)))
    }
}

macro_rules! id_types {
    ($($(#[$attr:meta])* $name:ident;)*) => {
        $(
            $(#[$attr])*
            #[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
            #[serde(from = "IdU64", into = "IdU64")]
            pub struct $name(pub u64);

            impl From<IdU64> for $name {
                fn from(IdU64(id): IdU64) -> Self {
                    Self(id)
                }
            }

            impl From<$name> for IdU64 {
                fn from($name(id): $name) -> Self {
                    Self(id)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    <u64 as fmt::Display>::fmt(&self.0, f)
                }
            }

            impl str::FromStr for $name {
                type Err = ParseIntError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    s.parse().map(Self)
                }
            }
        )*
    };
}

id_types! {
    TweetId;
    UserId;
    ListId;
}
