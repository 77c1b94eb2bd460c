use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{
    entity::{Mention, Tag, Url},
    tweet::Withheld,
    TweetId, UserId,
};

/// A Twitter user. The id, name and username are always present; everything else depends on the
/// requested `user.fields`.
#[derive(Deserialize, Debug)]
pub struct User {
    pub id: UserId,
    pub name: Box<str>,
    pub username: Box<str>,
    pub created_at: Option<DateTime<Utc>>,
    pub description: Option<Box<str>>,
    #[serde(default)]
    pub entities: UserEntities,
    pub location: Option<Box<str>>,
    pub pinned_tweet_id: Option<TweetId>,
    pub profile_image_url: Option<Box<str>>,
    pub protected: Option<bool>,
    pub public_metrics: Option<UserPublicMetrics>,
    pub url: Option<Box<str>>,
    pub verified: Option<bool>,
    pub withheld: Option<Withheld>,
}

impl User {
    /// The name and handle of the user, as in `Name@username`.
    pub fn display_name(&self) -> String {
        format!("{}@{}", self.name, self.username)
    }
}

#[derive(Deserialize, Clone, Copy, Debug)]
pub struct UserPublicMetrics {
    pub followers_count: u64,
    pub following_count: u64,
    pub tweet_count: u64,
    pub listed_count: u64,
}

#[derive(Deserialize, Default, Debug)]
pub struct UserEntities {
    #[serde(default)]
    pub url: UserUrlEntities,
    #[serde(default)]
    pub description: UserDescriptionEntities,
}

#[derive(Deserialize, Default, Debug)]
pub struct UserUrlEntities {
    #[serde(default)]
    pub urls: Vec<Url>,
}

#[derive(Deserialize, Default, Debug)]
pub struct UserDescriptionEntities {
    #[serde(default)]
    pub cashtags: Vec<Tag>,
    #[serde(default)]
    pub hashtags: Vec<Tag>,
    #[serde(default)]
    pub mentions: Vec<Mention>,
    #[serde(default)]
    pub urls: Vec<Url>,
}
