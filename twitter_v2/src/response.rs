use serde::Deserialize;
use serde_json::Value;

use crate::resource::{Media, Place, Poll, Tweet, User};

/// Reports whether a response carries per-item errors alongside its data.
pub trait HasPartialError {
    fn has_partial_error(&self) -> bool;
}

/// The envelope the API wraps every successful response in.
#[derive(Deserialize, Debug)]
pub struct Response<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub includes: Includes,
    pub meta: Option<Meta>,
    #[serde(default)]
    pub errors: Vec<PartialError>,
}

impl<D> Default for Response<D> {
    fn default() -> Self {
        Self {
            data: None,
            includes: Includes::default(),
            meta: None,
            errors: Vec::new(),
        }
    }
}

impl<D> HasPartialError for Response<D> {
    fn has_partial_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Objects referenced by the primary data, requested through expansions.
#[derive(Deserialize, Default, Debug)]
pub struct Includes {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub tweets: Vec<Tweet>,
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub media: Vec<Media>,
    #[serde(default)]
    pub polls: Vec<Poll>,
}

#[derive(Deserialize, Default, Clone, Debug)]
pub struct Meta {
    pub result_count: Option<u64>,
    pub next_token: Option<String>,
    pub previous_token: Option<String>,
    pub newest_id: Option<String>,
    pub oldest_id: Option<String>,
    pub total_tweet_count: Option<u64>,
}

/// An error concerning a single item of an otherwise successful request, such as one unknown id
/// in a batch lookup.
#[derive(Deserialize, Default, Clone, PartialEq, Debug)]
pub struct PartialError {
    pub title: Option<String>,
    pub detail: Option<String>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub parameter: Option<String>,
    pub value: Option<Value>,
    pub section: Option<String>,
}
