use crate::{
    bounded::Bounded,
    client::Method,
    fields::{
        set_field_params, ExpansionList, MediaFieldList, PlaceFieldList, PollFieldList,
        TweetFieldList, UserFieldList,
    },
    params::{Credential, Descriptor, ParamMap, Parameters},
    resource::Tweet,
    response::Response,
};

pub type BackfillMinutes = Bounded<1, 5>;

/// A single message of the sample stream.
pub type SampleStreamResponse = Response<Tweet>;

/// Connects to a random sample of roughly 1% of all public Tweets in real time.
///
/// The response is newline-delimited; open it with
/// [`AsyncClient::open_stream`](crate::AsyncClient::open_stream) and decode each line with
/// [`decode_stream_line`].
#[derive(Clone, Default, Debug)]
pub struct SampleStream {
    credential: Credential,
    /// Minutes of missed Tweets to replay after a disconnection. Requires academic research
    /// access.
    pub backfill_minutes: BackfillMinutes,
    pub expansions: ExpansionList,
    pub media_fields: MediaFieldList,
    pub place_fields: PlaceFieldList,
    pub poll_fields: PollFieldList,
    pub tweet_fields: TweetFieldList,
    pub user_fields: UserFieldList,
}

impl SampleStream {
    #[inline]
    #[must_use]
    pub fn backfill_minutes(self, backfill_minutes: u32) -> Self {
        Self {
            backfill_minutes: backfill_minutes.into(),
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

impl Parameters for SampleStream {
    type Response = SampleStreamResponse;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/tweets/sample/stream",
        query_keys: &[
            "backfill_minutes",
            "expansions",
            "media.fields",
            "place.fields",
            "poll.fields",
            "tweet.fields",
            "user.fields",
        ],
    };

    credential_accessors!();

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
        self.backfill_minutes
            .insert_into(&mut params, "backfill_minutes");
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

/// Decodes one line of a Tweet stream.
///
/// Returns `None` for the blank keep-alive lines the API sends while no Tweets are available.
pub fn decode_stream_line(
    line: &[u8],
) -> Option<Result<SampleStreamResponse, serde_json::Error>> {
    if line.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    Some(serde_json::from_slice(line))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::{decode_stream_line, SampleStream};
    use crate::{
        auth::BearerToken, client::AsyncClient, config::ClientConfig, params::Parameters,
        resource::TweetId, test_server::serve_chunked,
    };

    #[test]
    fn test_sample_stream_resolve_endpoint() {
        let cases = [
            (SampleStream::default(), "test/endpoint"),
            (
                SampleStream::default()
                    .backfill_minutes(5)
                    .expansions(["author_id"])
                    .tweet_fields(["created_at"]),
                "test/endpoint?backfill_minutes=5&expansions=author_id&tweet.fields=created_at",
            ),
            (SampleStream::default().backfill_minutes(6), "test/endpoint"),
        ];

        for (params, expected) in cases {
            assert_eq!(params.resolve_endpoint("test/endpoint"), expected);
        }
    }

    #[test]
    fn test_decode_stream_line() {
        assert!(decode_stream_line(b"").is_none());
        assert!(decode_stream_line(b"\r\n").is_none());

        let message = decode_stream_line(b"{\"data\":{\"id\":\"1\",\"text\":\"hi\"}}\r\n")
            .unwrap()
            .unwrap();
        assert_eq!(message.data.unwrap().id, TweetId(1));

        assert!(decode_stream_line(b"{\"data\":").unwrap().is_err());
    }

    #[tokio::test]
    async fn test_read_sample_stream() {
        let server = MockServer::start().await;

        let first = json!({"data": {"id": "1", "text": "first"}});
        let second = json!({"data": {"id": "2", "text": "second"}});
        let body = format!("{}\r\n\r\n{}\r\n", first, second);

        Mock::given(method("GET"))
            .and(path("/2/tweets/sample/stream"))
            .and(query_param("tweet.fields", "created_at"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig {
            api_base: server.uri(),
            https_only: false,
            ..Default::default()
        };
        let client = AsyncClient::new(BearerToken::new("client-token"), &config).unwrap();

        let mut stream = client
            .open_stream(&SampleStream::default().tweet_fields(["created_at"]))
            .await
            .unwrap();

        let mut ids = Vec::new();
        while let Some(line) = stream.next_line().await.unwrap() {
            if let Some(message) = decode_stream_line(&line) {
                ids.push(message.unwrap().data.unwrap().id);
            }
        }

        assert_eq!(ids, [TweetId(1), TweetId(2)]);
    }

    #[tokio::test]
    async fn test_stream_outlives_client_timeout() {
        let lines = (1..=5)
            .map(|id| {
                format!("{}\r\n", json!({"data": {"id": id.to_string(), "text": "tick"}}))
                    .into_bytes()
            })
            .collect();

        // The whole stream takes twice as long as the configured timeout.
        let config = ClientConfig {
            api_base: serve_chunked(lines, Duration::from_millis(100)).await,
            https_only: false,
            timeout: Duration::from_millis(250),
            ..Default::default()
        };
        let client = AsyncClient::new(BearerToken::new("client-token"), &config).unwrap();

        let mut stream = client.open_stream(&SampleStream::default()).await.unwrap();

        let mut ids = Vec::new();
        while let Some(line) = stream.next_line().await.unwrap() {
            if let Some(message) = decode_stream_line(&line) {
                ids.push(message.unwrap().data.unwrap().id);
            }
        }

        assert_eq!(ids, (1..=5).map(TweetId).collect::<Vec<_>>());
    }
}
