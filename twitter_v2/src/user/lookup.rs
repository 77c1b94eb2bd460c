use crate::{
    client::Method,
    fields::{set_field_params, ExpansionList, TweetFieldList, UserFieldList},
    params::{insert_joined, Credential, Descriptor, ParamMap, Parameters},
    resource::User,
    response::Response,
};

const USER_QUERY_KEYS: &[&str] = &["expansions", "tweet.fields", "user.fields"];

/// Looks up several users by id.
#[derive(Clone, Default, Debug)]
pub struct ListUsers {
    credential: Credential,
    /// Required; up to 100 ids.
    pub ids: Vec<String>,
    pub expansions: ExpansionList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl ListUsers {
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

    field_list_setters!(expansions, tweet_fields, user_fields);
}

impl Parameters for ListUsers {
    type Response = Response<Vec<User>>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/users",
        query_keys: &["expansions", "ids", "tweet.fields", "user.fields"],
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
            &[&self.expansions, &self.tweet_fields, &self.user_fields],
        );
        params
    }
}

/// Looks up a single user by id.
#[derive(Clone, Default, Debug)]
pub struct GetUser {
    credential: Credential,
    pub id: String,
    pub expansions: ExpansionList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl GetUser {
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    field_list_setters!(expansions, tweet_fields, user_fields);
}

impl Parameters for GetUser {
    type Response = Response<User>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/users/:id",
        query_keys: USER_QUERY_KEYS,
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str())]
    }

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
        set_field_params(
            &mut params,
            &[&self.expansions, &self.tweet_fields, &self.user_fields],
        );
        params
    }
}

/// Looks up several users by username.
#[derive(Clone, Default, Debug)]
pub struct ListUsersByUsernames {
    credential: Credential,
    /// Required; up to 100 usernames, without the leading `@`.
    pub usernames: Vec<String>,
    pub expansions: ExpansionList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl ListUsersByUsernames {
    #[must_use]
    pub fn new<I, S>(usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            usernames: usernames.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    field_list_setters!(expansions, tweet_fields, user_fields);
}

impl Parameters for ListUsersByUsernames {
    type Response = Response<Vec<User>>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/users/by",
        query_keys: &["expansions", "tweet.fields", "user.fields", "usernames"],
    };

    credential_accessors!();

    fn has_required_values(&self) -> bool {
        !self.usernames.is_empty()
    }

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
        insert_joined(&mut params, "usernames", &self.usernames);
        set_field_params(
            &mut params,
            &[&self.expansions, &self.tweet_fields, &self.user_fields],
        );
        params
    }
}

/// Looks up a single user by username.
#[derive(Clone, Default, Debug)]
pub struct GetUserByUsername {
    credential: Credential,
    pub username: String,
    pub expansions: ExpansionList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl GetUserByUsername {
    #[must_use]
    pub fn new<S: Into<String>>(username: S) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    field_list_setters!(expansions, tweet_fields, user_fields);
}

impl Parameters for GetUserByUsername {
    type Response = Response<User>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/users/by/username/:username",
        query_keys: USER_QUERY_KEYS,
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":username", self.username.as_str())]
    }

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
        set_field_params(
            &mut params,
            &[&self.expansions, &self.tweet_fields, &self.user_fields],
        );
        params
    }
}

/// The user the request is authenticated as. Requires user-context authentication.
#[derive(Clone, Default, Debug)]
pub struct GetMe {
    credential: Credential,
    pub expansions: ExpansionList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl GetMe {
    field_list_setters!(expansions, tweet_fields, user_fields);
}

impl Parameters for GetMe {
    type Response = Response<User>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/users/me",
        query_keys: USER_QUERY_KEYS,
    };

    credential_accessors!();

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
        set_field_params(
            &mut params,
            &[&self.expansions, &self.tweet_fields, &self.user_fields],
        );
        params
    }
}
