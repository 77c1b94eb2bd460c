use std::{
    collections::{HashMap, HashSet},
    env,
};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use twitter_v2::{
    auth::BearerToken,
    fields::TweetField,
    resource::{User, UserId},
    tweet::search::SearchRecent,
    user::follow::{ListFollowers, ListFollowings},
    AsyncClient, ClientConfig, Parameters, Response,
};

const MAX_TWEETS_SHOWN: usize = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = env::var("TWITTER_BEARER_TOKEN").context("TWITTER_BEARER_TOKEN is not set")?;
    let user_id = env::args()
        .nth(1)
        .or_else(|| env::var("TWITTER_USER_ID").ok())
        .context("usage: twitter_v2_tests <user id> (or set TWITTER_USER_ID)")?;

    let client = AsyncClient::new(BearerToken::new(token.trim()), &ClientConfig::default())
        .context("failed to build the HTTP client")?;

    let followings = collect_users(&client, ListFollowings::new(user_id.as_str()).max_results(1000))
        .await
        .context("failed to list followings")?;

    let followers = collect_users(&client, ListFollowers::new(user_id.as_str()).max_results(1000))
        .await
        .context("failed to list followers")?
        .into_keys()
        .collect::<HashSet<_>>();

    let only_followings = followings
        .into_iter()
        .filter(|(id, _)| !followers.contains(id))
        .map(|(_, user)| user)
        .collect::<Vec<_>>();

    info!(count = only_followings.len(), "found one-way followings");

    for user in only_followings {
        let params = SearchRecent::new(format!("from:{} -is:retweet -is:reply", user.username))
            .max_results(10)
            .tweet_fields([TweetField::CreatedAt]);

        let (response, _) = client
            .execute(&params)
            .await
            .with_context(|| format!("failed to search Tweets from {}", user.username))?;

        println!("----- {}'s recent Tweets -----", user.display_name());
        for tweet in response.data.unwrap_or_default().iter().take(MAX_TWEETS_SHOWN) {
            match tweet.created_at {
                Some(created_at) => println!("[{}] {}", created_at, tweet.text),
                None => println!("{}", tweet.text),
            }
        }
        println!();
    }

    Ok(())
}

/// Follows `next_token` until the last page, keying every user by id.
async fn collect_users<P>(
    client: &AsyncClient<BearerToken>,
    mut params: P,
) -> Result<HashMap<UserId, User>, twitter_v2::Error>
where
    P: Parameters<Response = Response<Vec<User>>> + Paginated,
{
    let mut users = HashMap::new();

    loop {
        let (response, limit_info) = client.execute(&params).await?;

        users.extend(
            response
                .data
                .unwrap_or_default()
                .into_iter()
                .map(|user| (user.id, user)),
        );

        match response.meta.and_then(|meta| meta.next_token) {
            Some(next_token) => {
                info!(remaining = ?limit_info.remaining(), "fetching next page");
                params.set_pagination_token(next_token);
            }
            None => return Ok(users),
        }
    }
}

trait Paginated {
    fn set_pagination_token(&mut self, token: String);
}

impl Paginated for ListFollowers {
    fn set_pagination_token(&mut self, token: String) {
        self.pagination_token = token;
    }
}

impl Paginated for ListFollowings {
    fn set_pagination_token(&mut self, token: String) {
        self.pagination_token = token;
    }
}
