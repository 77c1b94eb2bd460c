//! The small records returned in `data` by write operations.

use serde::Deserialize;

use super::TweetId;

#[derive(Deserialize, Clone, Debug)]
pub struct CreatedTweet {
    pub id: TweetId,
    pub text: Box<str>,
}

#[derive(Deserialize, Clone, Copy, Debug)]
pub struct Deleted {
    pub deleted: bool,
}

#[derive(Deserialize, Clone, Copy, Debug)]
pub struct Updated {
    pub updated: bool,
}

#[derive(Deserialize, Clone, Copy, Debug)]
pub struct Liked {
    pub liked: bool,
}

/// The result of following or unfollowing a user. `pending_follow` is set when the target is a
/// protected account which has not yet accepted the request.
#[derive(Deserialize, Clone, Copy, Debug)]
pub struct Following {
    pub following: bool,
    pub pending_follow: Option<bool>,
}

#[derive(Deserialize, Clone, Copy, Debug)]
pub struct Membership {
    pub is_member: bool,
}

#[derive(Deserialize, Clone, Copy, Debug)]
pub struct Pinned {
    pub pinned: bool,
}
