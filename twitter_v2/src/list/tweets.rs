use crate::{
    client::Method,
    fields::{set_field_params, ExpansionList, TweetFieldList, UserFieldList},
    list::ListMaxResults,
    params::{insert_non_empty, Credential, Descriptor, ParamMap, Parameters},
    resource::Tweet,
    response::Response,
};

/// The Tweets posted by the members of a List, most recent first.
#[derive(Clone, Default, Debug)]
pub struct ListTweets {
    credential: Credential,
    /// The id of the List.
    pub id: String,
    pub max_results: ListMaxResults,
    pub pagination_token: String,
    pub expansions: ExpansionList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl ListTweets {
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

impl Parameters for ListTweets {
    type Response = Response<Vec<Tweet>>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/lists/:id/tweets",
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

#[cfg(test)]
mod tests {
    use super::ListTweets;
    use crate::params::Parameters;

    #[test]
    fn test_list_tweets_resolve_endpoint() {
        let cases = [
            (ListTweets::new("lid"), "test/endpoint/lid"),
            (
                ListTweets::new("lid").tweet_fields(["tf1", "tf2"]),
                "test/endpoint/lid?tweet.fields=tf1%2Ctf2",
            ),
            (
                ListTweets::new("lid")
                    .max_results(10)
                    .pagination_token("ptoken")
                    .expansions(["ex"])
                    .tweet_fields(["tf"])
                    .user_fields(["uf"]),
                "test/endpoint/lid?expansions=ex&max_results=10&pagination_token=ptoken\
                 &tweet.fields=tf&user.fields=uf",
            ),
            (
                ListTweets::default().max_results(10).pagination_token("ptoken"),
                "",
            ),
        ];

        for (params, expected) in cases {
            assert_eq!(params.resolve_endpoint("test/endpoint/:id"), expected);
        }
    }
}
