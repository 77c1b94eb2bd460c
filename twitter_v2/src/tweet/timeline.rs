use chrono::{DateTime, Utc};
use enumscribe::ScribeStaticStr;

use crate::{
    bounded::Bounded,
    client::Method,
    fields::{
        set_field_params, ExpansionList, MediaFieldList, PlaceFieldList, PollFieldList,
        TweetFieldList, UserFieldList,
    },
    params::{
        insert_joined, insert_non_empty, insert_time, Credential, Descriptor, ParamMap,
        Parameters,
    },
    resource::Tweet,
    response::Response,
};

pub type TimelineMaxResults = Bounded<5, 100>;

/// Kinds of Tweet which can be left out of a user's timeline.
#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Exclude {
    #[enumscribe(str = "retweets")]
    Retweets,
    #[enumscribe(str = "replies")]
    Replies,
}

impl AsRef<str> for Exclude {
    fn as_ref(&self) -> &str {
        self.scribe()
    }
}

/// The Tweets composed by a user, most recent first.
#[derive(Clone, Default, Debug)]
pub struct UserTweets {
    credential: Credential,
    /// The id of the user whose Tweets are returned.
    pub id: String,
    pub end_time: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub since_id: String,
    pub until_id: String,
    pub exclude: Vec<Exclude>,
    pub max_results: TimelineMaxResults,
    pub pagination_token: String,
    pub expansions: ExpansionList,
    pub media_fields: MediaFieldList,
    pub place_fields: PlaceFieldList,
    pub poll_fields: PollFieldList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl UserTweets {
    #[inline]
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn start_time(self, start_time: DateTime<Utc>) -> Self {
        Self {
            start_time: Some(start_time),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub fn end_time(self, end_time: DateTime<Utc>) -> Self {
        Self {
            end_time: Some(end_time),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub fn exclude_retweets(self) -> Self {
        self.excluding(Exclude::Retweets)
    }

    #[inline]
    #[must_use]
    pub fn exclude_replies(self) -> Self {
        self.excluding(Exclude::Replies)
    }

    #[inline]
    #[must_use]
    pub fn max_results(self, max_results: u32) -> Self {
        Self {
            max_results: max_results.into(),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub fn pagination_token<S: Into<String>>(self, pagination_token: S) -> Self {
        Self {
            pagination_token: pagination_token.into(),
            ..self
        }
    }

    field_list_setters!(
        expansions,
        media_fields,
        place_fields,
        poll_fields,
        tweet_fields,
        user_fields
    );

    fn excluding(mut self, exclude: Exclude) -> Self {
        if !self.exclude.contains(&exclude) {
            self.exclude.push(exclude);
        }
        self
    }
}

impl Parameters for UserTweets {
    type Response = Response<Vec<Tweet>>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/users/:id/tweets",
        query_keys: &[
            "end_time",
            "exclude",
            "expansions",
            "max_results",
            "media.fields",
            "pagination_token",
            "place.fields",
            "poll.fields",
            "since_id",
            "start_time",
            "tweet.fields",
            "until_id",
            "user.fields",
        ],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str())]
    }

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
        insert_time(&mut params, "end_time", self.end_time);
        insert_time(&mut params, "start_time", self.start_time);
        insert_non_empty(&mut params, "since_id", &self.since_id);
        insert_non_empty(&mut params, "until_id", &self.until_id);
        insert_joined(&mut params, "exclude", &self.exclude);
        self.max_results.insert_into(&mut params, "max_results");
        insert_non_empty(&mut params, "pagination_token", &self.pagination_token);
        set_field_params(
            &mut params,
            &[
                &self.expansions,
                &self.media_fields,
                &self.place_fields,
                &self.poll_fields,
                &self.tweet_fields,
                &self.user_fields,
            ],
        );
        params
    }
}

/// The Tweets mentioning a user, most recent first.
#[derive(Clone, Default, Debug)]
pub struct UserMentions {
    credential: Credential,
    /// The id of the mentioned user.
    pub id: String,
    pub end_time: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub since_id: String,
    pub until_id: String,
    pub max_results: TimelineMaxResults,
    pub pagination_token: String,
    pub expansions: ExpansionList,
    pub media_fields: MediaFieldList,
    pub place_fields: PlaceFieldList,
    pub poll_fields: PollFieldList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl UserMentions {
    #[inline]
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn max_results(self, max_results: u32) -> Self {
        Self {
            max_results: max_results.into(),
            ..self
        }
    }

    field_list_setters!(
        expansions,
        media_fields,
        place_fields,
        poll_fields,
        tweet_fields,
        user_fields
    );
}

impl Parameters for UserMentions {
    type Response = Response<Vec<Tweet>>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/users/:id/mentions",
        query_keys: &[
            "end_time",
            "expansions",
            "max_results",
            "media.fields",
            "pagination_token",
            "place.fields",
            "poll.fields",
            "since_id",
            "start_time",
            "tweet.fields",
            "until_id",
            "user.fields",
        ],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str())]
    }

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
        insert_time(&mut params, "end_time", self.end_time);
        insert_time(&mut params, "start_time", self.start_time);
        insert_non_empty(&mut params, "since_id", &self.since_id);
        insert_non_empty(&mut params, "until_id", &self.until_id);
        self.max_results.insert_into(&mut params, "max_results");
        insert_non_empty(&mut params, "pagination_token", &self.pagination_token);
        set_field_params(
            &mut params,
            &[
                &self.expansions,
                &self.media_fields,
                &self.place_fields,
                &self.poll_fields,
                &self.tweet_fields,
                &self.user_fields,
            ],
        );
        params
    }
}
