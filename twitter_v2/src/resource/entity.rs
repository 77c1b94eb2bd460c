use std::ops::{Range, RangeInclusive};

use serde::Deserialize;

use super::{media::MediaKey, UserId};

/// A named entity recognised in the text of a Tweet.
#[derive(Deserialize, Clone, Debug)]
pub struct Annotation {
    pub start: usize,
    #[serde(rename = "end")]
    pub end_inclusive: usize,
    pub probability: f64,
    #[serde(rename = "type")]
    pub annotation_type: Box<str>,
    pub normalized_text: Box<str>,
}

impl Annotation {
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end_inclusive
    }
}

/// A hashtag or cashtag.
#[derive(Deserialize, Clone, Debug)]
pub struct Tag {
    pub start: usize,
    pub end: usize,
    pub tag: Box<str>,
}

impl Tag {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// An `@username` mention. The id is only present on mentions inside Tweets.
#[derive(Deserialize, Clone, Debug)]
pub struct Mention {
    pub start: usize,
    pub end: usize,
    pub username: Box<str>,
    pub id: Option<UserId>,
}

impl Mention {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Url {
    pub start: usize,
    pub end: usize,
    /// The "t.co" link which redirects to the expanded URL.
    pub url: Box<str>,
    pub expanded_url: Option<Box<str>>,
    pub display_url: Option<Box<str>>,
    pub media_key: Option<MediaKey>,
    pub unwound_url: Option<Box<str>>,
}

impl Url {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
