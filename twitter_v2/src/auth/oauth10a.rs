use std::{borrow::Cow, collections::BTreeSet, fmt};

use base64::{engine::GeneralPurpose, Engine};
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::{distributions::Alphanumeric, CryptoRng, Rng};
use sha1::Sha1;

use crate::client::Request;

use super::Auth;

const NONCE_LEN: usize = 42;

/// The unreserved characters of RFC 3986 are the only ones left unencoded in OAuth signatures.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A set of [OAuth 1.0a](https://oauth.net/core/1.0a/) credentials that can be used to
/// authenticate requests made on behalf of a specific user.
#[derive(Clone)]
pub struct OAuth10a {
    api_key_encoded: Box<str>,
    access_token_encoded: Box<str>,
    signing_key: Box<str>,
}

impl OAuth10a {
    pub fn new(
        api_key: &str,
        api_key_secret: &str,
        access_token: &str,
        access_token_secret: &str,
    ) -> Self {
        let signing_key = format!(
            "{}&{}",
            percent_encode(api_key_secret),
            percent_encode(access_token_secret)
        );

        Self {
            api_key_encoded: percent_encode(api_key).into(),
            access_token_encoded: percent_encode(access_token).into(),
            signing_key: signing_key.into_boxed_str(),
        }
    }

    fn parameter_string(&self, request: &Request<'_>, nonce: &str, timestamp: i64) -> String {
        let mut params = BTreeSet::<(Cow<str>, Cow<str>)>::new();

        params.insert((
            Cow::Borrowed("oauth_consumer_key"),
            Cow::Borrowed(&self.api_key_encoded),
        ));
        params.insert((Cow::Borrowed("oauth_nonce"), Cow::Borrowed(nonce)));
        params.insert((
            Cow::Borrowed("oauth_signature_method"),
            Cow::Borrowed("HMAC-SHA1"),
        ));
        params.insert((
            Cow::Borrowed("oauth_timestamp"),
            Cow::Owned(timestamp.to_string()),
        ));
        params.insert((
            Cow::Borrowed("oauth_token"),
            Cow::Borrowed(&self.access_token_encoded),
        ));
        params.insert((Cow::Borrowed("oauth_version"), Cow::Borrowed("1.0")));

        for (key, val) in request.params() {
            params.insert((percent_encode(key), percent_encode(val)));
        }

        params
            .iter()
            .map(|(key, val)| format!("{}={}", key, val))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn signature_base(&self, request: &Request<'_>, nonce: &str, timestamp: i64) -> String {
        format!(
            "{}&{}&{}",
            request.method().as_str(),
            percent_encode(request.base_url()),
            percent_encode(&self.parameter_string(request, nonce, timestamp))
        )
    }

    fn signature(&self, request: &Request<'_>, nonce: &str, timestamp: i64) -> String {
        const BASE64_ENGINE: GeneralPurpose = base64::engine::general_purpose::STANDARD;

        let base = self.signature_base(request, nonce, timestamp);

        let signature_bytes = {
            let mut mac = Hmac::<Sha1>::new_from_slice(self.signing_key.as_bytes())
                .expect("HMAC accepts keys of any length");
            mac.update(base.as_bytes());
            mac.finalize().into_bytes()
        };

        BASE64_ENGINE.encode(signature_bytes)
    }
}

impl Auth for OAuth10a {
    fn auth_header(&self, request: &Request<'_>) -> Cow<'_, str> {
        // The nonce is alphanumeric, so it needs no encoding.
        let nonce = gen_alphanumeric_nonce(&mut rand::thread_rng());
        let timestamp = Utc::now().timestamp();
        let signature = self.signature(request, &nonce, timestamp);

        Cow::Owned(format!(
            r#"OAuth oauth_consumer_key="{}", oauth_nonce="{}", oauth_signature="{}", oauth_signature_method="HMAC-SHA1", oauth_timestamp="{}", oauth_token="{}", oauth_version="1.0""#,
            self.api_key_encoded,
            nonce,
            percent_encode(&signature),
            timestamp,
            self.access_token_encoded
        ))
    }
}

impl fmt::Debug for OAuth10a {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("OAuth10a")
            .field("api_key", &self.api_key_encoded)
            .finish_non_exhaustive()
    }
}

fn percent_encode(s: &str) -> Cow<'_, str> {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).into()
}

fn gen_alphanumeric_nonce<R>(rng: &mut R) -> String
where
    R: Rng + CryptoRng + ?Sized,
{
    rng.sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{gen_alphanumeric_nonce, percent_encode, OAuth10a, NONCE_LEN};
    use crate::{
        auth::Auth,
        client::{Method, Request},
    };

    fn example_auth() -> OAuth10a {
        // These are example credentials from the Twitter documentation :)
        OAuth10a::new(
            "xvz1evFS4wEEPTGEFPHBog",
            "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
            "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
            "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
        )
    }

    #[test]
    fn test_signature() {
        let auth = example_auth();

        let request = Request::new(
            Method::Post,
            "https://api.twitter.com/1.1/statuses/update.json",
            vec![
                ("include_entities", "true"),
                ("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
            ],
        );

        let nonce = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
        let timestamp = 1318622958;

        assert_eq!(
            auth.signature(&request, nonce, timestamp),
            "hCtSmYh+iHYCEqBWrE7C7hYmtUk="
        );
    }

    #[test]
    fn test_percent_encode_unreserved() {
        assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
        assert_eq!(percent_encode("a-b.c_d~e"), "a-b.c_d~e");
        assert_eq!(percent_encode("☃"), "%E2%98%83");
    }

    #[test]
    fn test_auth_header_shape() {
        let auth = example_auth();
        let request = Request::new(Method::Get, "https://api.twitter.com/2/users/me", Vec::new());

        let header = auth.auth_header(&request);

        assert!(header.starts_with(r#"OAuth oauth_consumer_key="xvz1evFS4wEEPTGEFPHBog", oauth_nonce=""#));
        assert!(header.contains(r#"oauth_signature_method="HMAC-SHA1""#));
        assert!(header.ends_with(r#"oauth_version="1.0""#));
    }

    #[test]
    fn test_nonce_is_alphanumeric() {
        let nonce = gen_alphanumeric_nonce(&mut rand::thread_rng());
        assert_eq!(nonce.len(), NONCE_LEN);
        assert!(nonce.bytes().all(|b| b.is_ascii_alphanumeric()));
    }
}
