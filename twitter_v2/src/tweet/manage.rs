use serde::Serialize;

use crate::{
    client::Method,
    params::{json_body, Credential, Descriptor, Parameters},
    resource::{CreatedTweet, Deleted},
    response::Response,
};

/// Publishes a Tweet on behalf of the authenticated user.
#[derive(Serialize, Clone, Default, Debug)]
pub struct CreateTweet {
    #[serde(skip)]
    credential: Credential,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<TweetReply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_tweet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<TweetMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<TweetPoll>,
    /// One of `everyone`, `mentionedUsers` or `following`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_settings: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub for_super_followers_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_message_deep_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<TweetGeo>,
}

impl CreateTweet {
    #[must_use]
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Makes this Tweet a reply to the given Tweet.
    #[inline]
    #[must_use]
    pub fn in_reply_to<S: Into<String>>(self, tweet_id: S) -> Self {
        Self {
            reply: Some(TweetReply {
                in_reply_to_tweet_id: tweet_id.into(),
                exclude_reply_user_ids: Vec::new(),
            }),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub fn quote<S: Into<String>>(self, tweet_id: S) -> Self {
        Self {
            quote_tweet_id: Some(tweet_id.into()),
            ..self
        }
    }
}

#[derive(Serialize, Clone, Default, Debug)]
pub struct TweetReply {
    pub in_reply_to_tweet_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_reply_user_ids: Vec<String>,
}

#[derive(Serialize, Clone, Default, Debug)]
pub struct TweetMedia {
    pub media_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tagged_user_ids: Vec<String>,
}

#[derive(Serialize, Clone, Default, Debug)]
pub struct TweetPoll {
    pub options: Vec<String>,
    pub duration_minutes: u32,
}

#[derive(Serialize, Clone, Default, Debug)]
pub struct TweetGeo {
    pub place_id: String,
}

impl Parameters for CreateTweet {
    type Response = Response<CreatedTweet>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Post,
        endpoint: "/2/tweets",
        query_keys: &[],
    };

    credential_accessors!();

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json_body(self)
    }
}

/// Deletes a Tweet owned by the authenticated user.
#[derive(Clone, Default, Debug)]
pub struct DeleteTweet {
    credential: Credential,
    pub id: String,
}

impl DeleteTweet {
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Parameters for DeleteTweet {
    type Response = Response<Deleted>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Delete,
        endpoint: "/2/tweets/:id",
        query_keys: &[],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str())]
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{CreateTweet, DeleteTweet, TweetPoll};
    use crate::params::Parameters;

    fn body_json<P: Parameters>(params: &P) -> Value {
        let body = params.body().unwrap().unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_create_tweet_body() {
        assert_eq!(body_json(&CreateTweet::default()), json!({}));

        assert_eq!(
            body_json(&CreateTweet::new("hello").in_reply_to("1455953449422516226")),
            json!({
                "text": "hello",
                "reply": {"in_reply_to_tweet_id": "1455953449422516226"}
            })
        );

        let params = CreateTweet {
            poll: Some(TweetPoll {
                options: vec!["yes".to_owned(), "no".to_owned()],
                duration_minutes: 120,
            }),
            for_super_followers_only: true,
            ..CreateTweet::new("poll")
        };

        assert_eq!(
            body_json(&params),
            json!({
                "text": "poll",
                "poll": {"options": ["yes", "no"], "duration_minutes": 120},
                "for_super_followers_only": true
            })
        );
    }

    #[test]
    fn test_create_tweet_credential_is_not_serialized() {
        let mut params = CreateTweet::new("hello");
        params.set_credential("secret".to_owned());
        assert_eq!(body_json(&params), json!({"text": "hello"}));
    }

    #[test]
    fn test_create_tweet_resolve_endpoint() {
        assert_eq!(
            CreateTweet::new("hello").resolve_endpoint("test/endpoint"),
            "test/endpoint"
        );
    }

    #[test]
    fn test_delete_tweet() {
        let params = DeleteTweet::new("tid");
        assert_eq!(params.resolve_endpoint("test/endpoint/:id"), "test/endpoint/tid");
        assert!(params.body().unwrap().is_none());

        assert_eq!(DeleteTweet::default().resolve_endpoint("test/endpoint/:id"), "");
    }
}
