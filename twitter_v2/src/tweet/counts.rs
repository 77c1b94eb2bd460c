use chrono::{DateTime, Utc};
use enumscribe::ScribeStaticStr;

use crate::{
    client::Method,
    params::{insert_non_empty, insert_time, Credential, Descriptor, ParamMap, Parameters},
    resource::TweetCount,
    response::Response,
};

/// The width of each interval in a Tweet counts response.
#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Granularity {
    #[enumscribe(str = "minute")]
    Minute,
    #[default]
    #[enumscribe(str = "hour")]
    Hour,
    #[enumscribe(str = "day")]
    Day,
}

/// Counts Tweets from the last seven days which match a query.
#[derive(Clone, Default, Debug)]
pub struct CountsRecent {
    credential: Credential,
    /// Required.
    pub query: String,
    pub end_time: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub since_id: String,
    pub until_id: String,
    /// Always sent, so the API's own default never applies.
    pub granularity: Granularity,
}

impl CountsRecent {
    #[must_use]
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn granularity(self, granularity: Granularity) -> Self {
        Self {
            granularity,
            ..self
        }
    }
}

impl Parameters for CountsRecent {
    type Response = Response<Vec<TweetCount>>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/tweets/counts/recent",
        query_keys: &[
            "end_time",
            "granularity",
            "query",
            "since_id",
            "start_time",
            "until_id",
        ],
    };

    credential_accessors!();

    fn has_required_values(&self) -> bool {
        !self.query.is_empty()
    }

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
        insert_count_params(
            &mut params,
            &self.query,
            self.end_time,
            self.start_time,
            &self.since_id,
            &self.until_id,
            self.granularity,
        );
        params
    }
}

/// Counts Tweets from the full archive which match a query. Requires academic research access.
#[derive(Clone, Default, Debug)]
pub struct CountsAll {
    credential: Credential,
    /// Required.
    pub query: String,
    pub end_time: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub since_id: String,
    pub until_id: String,
    pub granularity: Granularity,
    pub next_token: String,
}

impl CountsAll {
    #[must_use]
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn granularity(self, granularity: Granularity) -> Self {
        Self {
            granularity,
            ..self
        }
    }
}

impl Parameters for CountsAll {
    type Response = Response<Vec<TweetCount>>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/tweets/counts/all",
        query_keys: &[
            "end_time",
            "granularity",
            "next_token",
            "query",
            "since_id",
            "start_time",
            "until_id",
        ],
    };

    credential_accessors!();

    fn has_required_values(&self) -> bool {
        !self.query.is_empty()
    }

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
        insert_count_params(
            &mut params,
            &self.query,
            self.end_time,
            self.start_time,
            &self.since_id,
            &self.until_id,
            self.granularity,
        );
        insert_non_empty(&mut params, "next_token", &self.next_token);
        params
    }
}

fn insert_count_params(
    params: &mut ParamMap,
    query: &str,
    end_time: Option<DateTime<Utc>>,
    start_time: Option<DateTime<Utc>>,
    since_id: &str,
    until_id: &str,
    granularity: Granularity,
) {
    params.insert("query", query.to_owned());
    insert_time(params, "end_time", end_time);
    insert_time(params, "start_time", start_time);
    insert_non_empty(params, "since_id", since_id);
    insert_non_empty(params, "until_id", until_id);
    params.insert("granularity", granularity.scribe().to_owned());
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{CountsAll, CountsRecent, Granularity};
    use crate::params::Parameters;

    #[test]
    fn test_counts_recent_resolve_endpoint() {
        let end_time =
            Utc.with_ymd_and_hms(2021, 10, 24, 23, 59, 59).unwrap() + Duration::nanoseconds(59);
        let start_time = Utc.with_ymd_and_hms(2021, 10, 24, 0, 0, 0).unwrap();

        let cases = [
            (
                CountsRecent::new("from:testuser"),
                "test/endpoint?granularity=hour&query=from%3Atestuser",
            ),
            (
                CountsRecent {
                    end_time: Some(end_time),
                    ..CountsRecent::new("from:testuser")
                },
                "test/endpoint?end_time=2021-10-24T23%3A59%3A59Z&granularity=hour&query=from%3Atestuser",
            ),
            (
                CountsRecent {
                    start_time: Some(start_time),
                    ..CountsRecent::new("from:testuser")
                },
                "test/endpoint?granularity=hour&query=from%3Atestuser&start_time=2021-10-24T00%3A00%3A00Z",
            ),
            (
                CountsRecent::new("from:testuser").granularity(Granularity::Day),
                "test/endpoint?granularity=day&query=from%3Atestuser",
            ),
            (
                CountsRecent {
                    end_time: Some(end_time),
                    start_time: Some(start_time),
                    since_id: "sid".to_owned(),
                    until_id: "uid".to_owned(),
                    ..CountsRecent::new("from:testuser").granularity(Granularity::Minute)
                },
                "test/endpoint?end_time=2021-10-24T23%3A59%3A59Z&granularity=minute\
                 &query=from%3Atestuser&since_id=sid&start_time=2021-10-24T00%3A00%3A00Z&until_id=uid",
            ),
            (CountsRecent::default(), ""),
        ];

        for (params, expected) in cases {
            assert_eq!(params.resolve_endpoint("test/endpoint"), expected);
        }
    }

    #[test]
    fn test_counts_all_resolve_endpoint() {
        let cases = [
            (
                CountsAll::new("from:testuser"),
                "test/endpoint?granularity=hour&query=from%3Atestuser",
            ),
            (
                CountsAll {
                    next_token: "n_token".to_owned(),
                    ..CountsAll::new("from:testuser")
                },
                "test/endpoint?granularity=hour&next_token=n_token&query=from%3Atestuser",
            ),
            (
                CountsAll {
                    since_id: "sid".to_owned(),
                    ..CountsAll::default()
                },
                "",
            ),
        ];

        for (params, expected) in cases {
            assert_eq!(params.resolve_endpoint("test/endpoint"), expected);
        }
    }
}
