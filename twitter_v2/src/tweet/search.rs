use chrono::{DateTime, Utc};
use enumscribe::ScribeStaticStr;

use crate::{
    bounded::Bounded,
    client::Method,
    fields::{
        set_field_params, ExpansionList, MediaFieldList, PlaceFieldList, PollFieldList,
        TweetFieldList, UserFieldList,
    },
    params::{insert_non_empty, insert_time, Credential, Descriptor, ParamMap, Parameters},
    resource::Tweet,
    response::Response,
};

pub type SearchRecentMaxResults = Bounded<10, 100>;
pub type SearchAllMaxResults = Bounded<10, 500>;

#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SortOrder {
    #[enumscribe(str = "recency")]
    Recency,
    #[enumscribe(str = "relevancy")]
    Relevancy,
}

const SEARCH_QUERY_KEYS: &[&str] = &[
    "end_time",
    "expansions",
    "max_results",
    "media.fields",
    "next_token",
    "place.fields",
    "poll.fields",
    "query",
    "since_id",
    "sort_order",
    "start_time",
    "tweet.fields",
    "until_id",
    "user.fields",
];

macro_rules! search_parameters {
    ($(#[$attr:meta])* $name:ident, $max_results:ty, $endpoint:literal) => {
        $(#[$attr])*
        #[derive(Clone, Default, Debug)]
        pub struct $name {
            credential: Credential,
            /// Required. A search query such as `from:TwitterDev -is:retweet`.
            pub query: String,
            pub end_time: Option<DateTime<Utc>>,
            pub start_time: Option<DateTime<Utc>>,
            pub since_id: String,
            pub until_id: String,
            pub max_results: $max_results,
            pub next_token: String,
            pub sort_order: Option<SortOrder>,
            pub expansions: ExpansionList,
            pub media_fields: MediaFieldList,
            pub place_fields: PlaceFieldList,
            pub poll_fields: PollFieldList,
            pub tweet_fields: TweetFieldList,
            pub user_fields: UserFieldList,
        }

        impl $name {
            #[must_use]
            pub fn new<S: Into<String>>(query: S) -> Self {
                Self {
                    query: query.into(),
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

        impl Parameters for $name {
            type Response = Response<Vec<Tweet>>;

            const DESCRIPTOR: Descriptor = Descriptor {
                method: Method::Get,
                endpoint: $endpoint,
                query_keys: SEARCH_QUERY_KEYS,
            };

            credential_accessors!();

            fn has_required_values(&self) -> bool {
                !self.query.is_empty()
            }

            fn parameter_map(&self) -> ParamMap {
                let mut params = ParamMap::new();
                params.insert("query", self.query.clone());
                insert_time(&mut params, "end_time", self.end_time);
                insert_time(&mut params, "start_time", self.start_time);
                insert_non_empty(&mut params, "since_id", &self.since_id);
                insert_non_empty(&mut params, "until_id", &self.until_id);
                self.max_results.insert_into(&mut params, "max_results");
                insert_non_empty(&mut params, "next_token", &self.next_token);
                if let Some(sort_order) = self.sort_order {
                    params.insert("sort_order", sort_order.scribe().to_owned());
                }
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
    };
}

search_parameters!(
    /// Searches Tweets from the last seven days.
    SearchRecent,
    SearchRecentMaxResults,
    "/2/tweets/search/recent"
);

search_parameters!(
    /// Searches the full archive of public Tweets. Requires academic research access.
    SearchAll,
    SearchAllMaxResults,
    "/2/tweets/search/all"
);

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{SearchAll, SearchRecent, SortOrder};
    use crate::params::Parameters;

    #[test]
    fn test_search_recent_resolve_endpoint() {
        let cases = [
            (
                SearchRecent::new("from:testuser"),
                "test/endpoint?query=from%3Atestuser",
            ),
            (
                SearchRecent {
                    next_token: "token".to_owned(),
                    sort_order: Some(SortOrder::Relevancy),
                    ..SearchRecent::new("from:testuser")
                        .max_results(10)
                        .expansions(["ex"])
                        .media_fields(["mf"])
                        .place_fields(["plf"])
                        .poll_fields(["pof"])
                        .tweet_fields(["tf"])
                        .user_fields(["uf"])
                },
                "test/endpoint?expansions=ex&max_results=10&media.fields=mf&next_token=token\
                 &place.fields=plf&poll.fields=pof&query=from%3Atestuser&sort_order=relevancy\
                 &tweet.fields=tf&user.fields=uf",
            ),
            (
                SearchRecent {
                    end_time: Some(
                        Utc.with_ymd_and_hms(2021, 10, 24, 23, 59, 59).unwrap()
                            + Duration::nanoseconds(59),
                    ),
                    start_time: Some(Utc.with_ymd_and_hms(2021, 10, 24, 0, 0, 0).unwrap()),
                    since_id: "sid".to_owned(),
                    until_id: "uid".to_owned(),
                    ..SearchRecent::new("from:testuser")
                },
                "test/endpoint?end_time=2021-10-24T23%3A59%3A59Z&query=from%3Atestuser\
                 &since_id=sid&start_time=2021-10-24T00%3A00%3A00Z&until_id=uid",
            ),
            (
                SearchRecent::default().max_results(10).expansions(["ex"]),
                "",
            ),
        ];

        for (params, expected) in cases {
            assert_eq!(params.resolve_endpoint("test/endpoint"), expected);
        }
    }

    #[test]
    fn test_search_max_results_bounds() {
        let recent = |max_results| {
            SearchRecent::new("q")
                .max_results(max_results)
                .resolve_endpoint("test/endpoint")
        };

        assert_eq!(recent(9), "test/endpoint?query=q");
        assert_eq!(recent(10), "test/endpoint?max_results=10&query=q");
        assert_eq!(recent(100), "test/endpoint?max_results=100&query=q");
        assert_eq!(recent(101), "test/endpoint?query=q");

        let all = |max_results| {
            SearchAll::new("q")
                .max_results(max_results)
                .resolve_endpoint("test/endpoint")
        };

        assert_eq!(all(500), "test/endpoint?max_results=500&query=q");
        assert_eq!(all(501), "test/endpoint?query=q");
    }

    #[test]
    fn test_search_has_no_body() {
        assert!(SearchAll::new("q").body().unwrap().is_none());
    }
}
