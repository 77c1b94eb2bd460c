use serde::Serialize;

use crate::{
    bounded::Bounded,
    client::Method,
    fields::{
        set_field_params, ExpansionList, MediaFieldList, PlaceFieldList, PollFieldList,
        TweetFieldList, UserFieldList,
    },
    params::{insert_non_empty, json_body, Credential, Descriptor, ParamMap, Parameters},
    resource::{Liked, Tweet, User},
    response::Response,
};

pub type LikingUsersMaxResults = Bounded<1, 100>;
pub type LikedTweetsMaxResults = Bounded<10, 100>;

/// The users who have liked a Tweet.
#[derive(Clone, Default, Debug)]
pub struct ListLikingUsers {
    credential: Credential,
    /// The id of the liked Tweet.
    pub id: String,
    pub max_results: LikingUsersMaxResults,
    pub pagination_token: String,
    pub expansions: ExpansionList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl ListLikingUsers {
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

    field_list_setters!(expansions, tweet_fields, user_fields);
}

impl Parameters for ListLikingUsers {
    type Response = Response<Vec<User>>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/tweets/:id/liking_users",
        query_keys: &[
            "expansions",
            "max_results",
            "pagination_token",
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
        self.max_results.insert_into(&mut params, "max_results");
        insert_non_empty(&mut params, "pagination_token", &self.pagination_token);
        set_field_params(
            &mut params,
            &[&self.expansions, &self.tweet_fields, &self.user_fields],
        );
        params
    }
}

/// The Tweets a user has liked.
#[derive(Clone, Default, Debug)]
pub struct ListLikedTweets {
    credential: Credential,
    /// The id of the user.
    pub id: String,
    pub max_results: LikedTweetsMaxResults,
    pub pagination_token: String,
    pub expansions: ExpansionList,
    pub media_fields: MediaFieldList,
    pub place_fields: PlaceFieldList,
    pub poll_fields: PollFieldList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl ListLikedTweets {
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

impl Parameters for ListLikedTweets {
    type Response = Response<Vec<Tweet>>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/users/:id/liked_tweets",
        query_keys: &[
            "expansions",
            "max_results",
            "media.fields",
            "pagination_token",
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

/// Likes a Tweet on behalf of a user.
#[derive(Serialize, Clone, Default, Debug)]
pub struct Like {
    #[serde(skip)]
    credential: Credential,
    /// The id of the user doing the liking.
    #[serde(skip)]
    pub id: String,
    pub tweet_id: String,
}

impl Like {
    #[must_use]
    pub fn new<S, T>(id: S, tweet_id: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            tweet_id: tweet_id.into(),
            ..Self::default()
        }
    }
}

impl Parameters for Like {
    type Response = Response<Liked>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Post,
        endpoint: "/2/users/:id/likes",
        query_keys: &[],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str())]
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json_body(self)
    }
}

/// Removes a user's like from a Tweet.
#[derive(Clone, Default, Debug)]
pub struct Unlike {
    credential: Credential,
    pub id: String,
    pub tweet_id: String,
}

impl Unlike {
    #[must_use]
    pub fn new<S, T>(id: S, tweet_id: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            tweet_id: tweet_id.into(),
            ..Self::default()
        }
    }
}

impl Parameters for Unlike {
    type Response = Response<Liked>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Delete,
        endpoint: "/2/users/:id/likes/:tweet_id",
        query_keys: &[],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str()), (":tweet_id", self.tweet_id.as_str())]
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{Like, ListLikedTweets, ListLikingUsers, Unlike};
    use crate::params::Parameters;

    #[test]
    fn test_list_liking_users_resolve_endpoint() {
        let cases = [
            (ListLikingUsers::new("tid"), "test/endpoint/tid"),
            (
                ListLikingUsers {
                    pagination_token: "ptoken".to_owned(),
                    ..ListLikingUsers::new("tid")
                        .max_results(1)
                        .expansions(["ex"])
                        .tweet_fields(["tf"])
                        .user_fields(["uf"])
                },
                "test/endpoint/tid?expansions=ex&max_results=1&pagination_token=ptoken\
                 &tweet.fields=tf&user.fields=uf",
            ),
            (ListLikingUsers::new("tid").max_results(0), "test/endpoint/tid"),
            (ListLikingUsers::default().max_results(10), ""),
        ];

        for (params, expected) in cases {
            assert_eq!(params.resolve_endpoint("test/endpoint/:id"), expected);
        }
    }

    #[test]
    fn test_list_liked_tweets_resolve_endpoint() {
        let cases = [
            (
                ListLikedTweets::new("uid").max_results(10).tweet_fields(["tf"]),
                "test/endpoint/uid?max_results=10&tweet.fields=tf",
            ),
            (ListLikedTweets::new("uid").max_results(9), "test/endpoint/uid"),
            (ListLikedTweets::default(), ""),
        ];

        for (params, expected) in cases {
            assert_eq!(params.resolve_endpoint("test/endpoint/:id"), expected);
        }
    }

    #[test]
    fn test_like() {
        let params = Like::new("uid", "tid");
        assert_eq!(params.resolve_endpoint("test/endpoint/:id"), "test/endpoint/uid");

        let body = serde_json::from_slice::<Value>(&params.body().unwrap().unwrap()).unwrap();
        assert_eq!(body, json!({"tweet_id": "tid"}));

        let body = Like::new("uid", "").body().unwrap().unwrap();
        assert_eq!(body, br#"{"tweet_id":""}"#);
    }

    #[test]
    fn test_unlike() {
        let cases = [
            (Unlike::new("uid", "tid"), "test/endpoint/uid/tid"),
            (Unlike::new("uid", ""), ""),
            (Unlike::new("", "tid"), ""),
        ];

        for (params, expected) in cases {
            assert_eq!(
                params.resolve_endpoint("test/endpoint/:id/:tweet_id"),
                expected
            );
            assert!(params.body().unwrap().is_none());
        }
    }
}
