use serde::Serialize;

use crate::{
    bounded::Bounded,
    client::Method,
    fields::{set_field_params, ExpansionList, TweetFieldList, UserFieldList},
    params::{insert_non_empty, json_body, Credential, Descriptor, ParamMap, Parameters},
    resource::{Following, User},
    response::Response,
};

pub type FollowsMaxResults = Bounded<1, 1000>;

const FOLLOWS_QUERY_KEYS: &[&str] = &[
    "expansions",
    "max_results",
    "pagination_token",
    "tweet.fields",
    "user.fields",
];

macro_rules! follows_parameters {
    ($(#[$attr:meta])* $name:ident, $endpoint:literal) => {
        $(#[$attr])*
        #[derive(Clone, Default, Debug)]
        pub struct $name {
            credential: Credential,
            pub id: String,
            pub max_results: FollowsMaxResults,
            pub pagination_token: String,
            pub expansions: ExpansionList,
            pub tweet_fields: TweetFieldList,
            pub user_fields: UserFieldList,
        }

        impl $name {
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

            #[inline]
            #[must_use]
            pub fn pagination_token<S: Into<String>>(self, pagination_token: S) -> Self {
                Self {
                    pagination_token: pagination_token.into(),
                    ..self
                }
            }

            field_list_setters!(expansions, tweet_fields, user_fields);
        }

        impl Parameters for $name {
            type Response = Response<Vec<User>>;

            const DESCRIPTOR: Descriptor = Descriptor {
                method: Method::Get,
                endpoint: $endpoint,
                query_keys: FOLLOWS_QUERY_KEYS,
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
    };
}

follows_parameters!(
    /// The users who follow the given user.
    ListFollowers,
    "/2/users/:id/followers"
);

follows_parameters!(
    /// The users the given user follows.
    ListFollowings,
    "/2/users/:id/following"
);

/// Follows a user on behalf of another. Following a protected account sends a follow request
/// instead, reported through [`Following::pending_follow`].
#[derive(Serialize, Clone, Default, Debug)]
pub struct Follow {
    #[serde(skip)]
    credential: Credential,
    /// The id of the user who follows.
    #[serde(skip)]
    pub id: String,
    pub target_user_id: String,
}

impl Follow {
    #[must_use]
    pub fn new<S, T>(id: S, target_user_id: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            target_user_id: target_user_id.into(),
            ..Self::default()
        }
    }
}

impl Parameters for Follow {
    type Response = Response<Following>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Post,
        endpoint: "/2/users/:id/following",
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

#[derive(Clone, Default, Debug)]
pub struct Unfollow {
    credential: Credential,
    pub source_user_id: String,
    pub target_user_id: String,
}

impl Unfollow {
    #[must_use]
    pub fn new<S, T>(source_user_id: S, target_user_id: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            source_user_id: source_user_id.into(),
            target_user_id: target_user_id.into(),
            ..Self::default()
        }
    }
}

impl Parameters for Unfollow {
    type Response = Response<Following>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Delete,
        endpoint: "/2/users/:source_user_id/following/:target_user_id",
        query_keys: &[],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![
            (":source_user_id", self.source_user_id.as_str()),
            (":target_user_id", self.target_user_id.as_str()),
        ]
    }
}
