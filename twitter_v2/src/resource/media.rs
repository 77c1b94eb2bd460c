use std::{fmt, str};

use enumscribe::EnumDeserialize;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use thiserror::Error;

/// Identifies an attached piece of media, written on the wire as `<prefix>_<id>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MediaKey {
    prefix: u32,
    id: u64,
}

impl MediaKey {
    pub const fn new(prefix: u32, id: u64) -> Self {
        Self { prefix, id }
    }

    pub const fn prefix(self) -> u32 {
        self.prefix
    }

    pub const fn id(self) -> u64 {
        self.id
    }
}

#[derive(Error, Debug)]
#[error("invalid media key")]
pub struct MediaKeyError;

impl str::FromStr for MediaKey {
    type Err = MediaKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, id) = s.split_once('_').ok_or(MediaKeyError)?;
        let prefix = prefix.parse().map_err(|_| MediaKeyError)?;
        let id = id.parse().map_err(|_| MediaKeyError)?;
        Ok(Self::new(prefix, id))
    }
}

impl fmt::Display for MediaKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}", self.prefix, self.id)
    }
}

impl Serialize for MediaKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MediaKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MediaKeyVisitor;

        impl<'de> Visitor<'de> for MediaKeyVisitor {
            type Value = MediaKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a media key string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(MediaKeyVisitor)
    }
}

#[derive(Deserialize, Debug)]
pub struct Media {
    pub media_key: MediaKey,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: Option<Box<str>>,
    pub duration_ms: Option<u64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub preview_image_url: Option<Box<str>>,
    pub public_metrics: Option<MediaPublicMetrics>,
    pub alt_text: Option<Box<str>>,
    #[serde(default)]
    pub variants: Vec<MediaVariant>,
}

#[derive(EnumDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MediaType {
    #[enumscribe(str = "photo")]
    Photo,
    #[enumscribe(str = "animated_gif")]
    AnimatedGif,
    #[enumscribe(str = "video")]
    Video,
}

#[derive(Deserialize, Clone, Copy, Debug)]
pub struct MediaPublicMetrics {
    pub view_count: Option<u64>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct MediaVariant {
    pub content_type: Box<str>,
    pub url: Box<str>,
    pub bit_rate: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::{Media, MediaKey, MediaType};

    #[test]
    fn test_media_key_text_form() {
        let key = "13_1263145212760805376".parse::<MediaKey>().unwrap();
        assert_eq!(key, MediaKey::new(13, 1263145212760805376));
        assert_eq!(key.to_string(), "13_1263145212760805376");

        assert!("13".parse::<MediaKey>().is_err());
        assert!("a_1".parse::<MediaKey>().is_err());
    }

    #[test]
    fn test_decode_media() {
        let media = serde_json::from_str::<Media>(
            r#"{
                "media_key": "7_1263145212760805376",
                "type": "video",
                "duration_ms": 46947,
                "variants": [{"content_type": "video/mp4", "url": "https://video.twimg.com/a.mp4", "bit_rate": 832000}]
            }"#,
        )
        .unwrap();

        assert_eq!(media.media_type, MediaType::Video);
        assert_eq!(media.duration_ms, Some(46947));
        assert_eq!(media.variants[0].bit_rate, Some(832000));
        assert!(media.public_metrics.is_none());
    }
}
