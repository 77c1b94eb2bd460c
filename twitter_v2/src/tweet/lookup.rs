use crate::{
    client::Method,
    fields::{
        set_field_params, ExpansionList, MediaFieldList, PlaceFieldList, PollFieldList,
        TweetFieldList, UserFieldList,
    },
    params::{insert_joined, Credential, Descriptor, ParamMap, Parameters},
    resource::Tweet,
    response::Response,
};

/// Looks up several Tweets by id.
#[derive(Clone, Default, Debug)]
pub struct ListTweets {
    credential: Credential,
    /// Required; up to 100 ids.
    pub ids: Vec<String>,
    pub expansions: ExpansionList,
    pub media_fields: MediaFieldList,
    pub place_fields: PlaceFieldList,
    pub poll_fields: PollFieldList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl ListTweets {
    #[must_use]
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
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

impl Parameters for ListTweets {
    type Response = Response<Vec<Tweet>>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/tweets",
        query_keys: &[
            "expansions",
            "ids",
            "media.fields",
            "place.fields",
            "poll.fields",
            "tweet.fields",
            "user.fields",
        ],
    };

    credential_accessors!();

    fn has_required_values(&self) -> bool {
        !self.ids.is_empty()
    }

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
        insert_joined(&mut params, "ids", &self.ids);
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

/// Looks up a single Tweet by id.
#[derive(Clone, Default, Debug)]
pub struct GetTweet {
    credential: Credential,
    pub id: String,
    pub expansions: ExpansionList,
    pub media_fields: MediaFieldList,
    pub place_fields: PlaceFieldList,
    pub poll_fields: PollFieldList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl GetTweet {
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
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

impl Parameters for GetTweet {
    type Response = Response<Tweet>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/tweets/:id",
        query_keys: &[
            "expansions",
            "media.fields",
            "place.fields",
            "poll.fields",
            "tweet.fields",
            "user.fields",
        ],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str())]
    }

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
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
