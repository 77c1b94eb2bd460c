use chrono::{DateTime, Utc};
use enumscribe::EnumDeserialize;
use serde::Deserialize;

use super::{
    entity::{Annotation, Mention, Tag, Url},
    media::MediaKey,
    TweetId, UserId,
};

/// A Tweet. Apart from the id and text, a field is only present when it was requested through
/// `tweet.fields`.
#[derive(Deserialize, Debug)]
pub struct Tweet {
    pub id: TweetId,
    pub text: Box<str>,
    #[serde(default)]
    pub attachments: TweetAttachments,
    pub author_id: Option<UserId>,
    #[serde(default)]
    pub context_annotations: Vec<ContextAnnotation>,
    pub conversation_id: Option<TweetId>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub entities: TweetEntities,
    pub geo: Option<TweetGeo>,
    pub in_reply_to_user_id: Option<UserId>,
    pub lang: Option<Box<str>>,
    pub possibly_sensitive: Option<bool>,
    pub public_metrics: Option<TweetPublicMetrics>,
    #[serde(default)]
    pub referenced_tweets: Vec<ReferencedTweet>,
    pub reply_settings: Option<ReplySettings>,
    pub source: Option<Box<str>>,
    pub withheld: Option<Withheld>,
}

#[derive(Deserialize, Debug)]
pub struct ReferencedTweet {
    #[serde(rename = "type")]
    pub reference_type: ReferenceType,
    pub id: TweetId,
}

#[derive(EnumDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReferenceType {
    #[enumscribe(str = "replied_to")]
    RepliedTo,
    #[enumscribe(str = "quoted")]
    Quoted,
    #[enumscribe(str = "retweeted")]
    Retweeted,
}

#[derive(EnumDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReplySettings {
    #[enumscribe(str = "everyone")]
    Everyone,
    #[enumscribe(str = "mentionedUsers")]
    MentionedUsers,
    #[enumscribe(str = "following")]
    Following,
}

#[derive(Deserialize, Clone, Copy, Debug)]
pub struct TweetPublicMetrics {
    pub retweet_count: u64,
    pub reply_count: u64,
    pub like_count: u64,
    pub quote_count: u64,
}

#[derive(Deserialize, Default, Debug)]
pub struct TweetEntities {
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub cashtags: Vec<Tag>,
    #[serde(default)]
    pub hashtags: Vec<Tag>,
    #[serde(default)]
    pub mentions: Vec<Mention>,
    #[serde(default)]
    pub urls: Vec<Url>,
}

#[derive(Deserialize, Default, Debug)]
pub struct TweetAttachments {
    #[serde(default)]
    pub poll_ids: Vec<Box<str>>,
    #[serde(default)]
    pub media_keys: Vec<MediaKey>,
}

#[derive(Deserialize, Debug)]
pub struct TweetGeo {
    pub place_id: Option<Box<str>>,
}

#[derive(Deserialize, Debug)]
pub struct ContextAnnotation {
    pub domain: ContextEntity,
    pub entity: ContextEntity,
}

#[derive(Deserialize, Debug)]
pub struct ContextEntity {
    pub id: Box<str>,
    pub name: Option<Box<str>>,
    pub description: Option<Box<str>>,
}

/// Countries in which a Tweet or user is withheld.
#[derive(Deserialize, Debug)]
pub struct Withheld {
    #[serde(default)]
    pub copyright: bool,
    #[serde(default)]
    pub country_codes: Vec<Box<str>>,
}

/// The number of Tweets in one interval of a Tweet counts response.
#[derive(Deserialize, Clone, Debug)]
pub struct TweetCount {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub tweet_count: u64,
}
