use std::{borrow::Cow, fmt};

use crate::client::Request;

use super::Auth;

/// An OAuth 2.0 bearer token, either app-only or issued on behalf of a user.
///
/// For more information about bearer tokens, see the
/// [Twitter documentation](https://developer.twitter.com/en/docs/authentication/oauth-2-0/bearer-tokens).
#[derive(Clone)]
pub struct BearerToken {
    auth_header: Box<str>,
}

impl BearerToken {
    pub fn new<S>(token: S) -> Self
    where
        S: AsRef<str>,
    {
        // The header is the same for every request, so build it once.
        Self {
            auth_header: bearer_header(token.as_ref()).into_boxed_str(),
        }
    }
}

impl Auth for BearerToken {
    fn auth_header(&self, _request: &Request<'_>) -> Cow<'_, str> {
        Cow::Borrowed(&self.auth_header)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

pub(crate) fn bearer_header(token: &str) -> String {
    const PREFIX: &str = "Bearer ";
    let mut buf = String::with_capacity(PREFIX.len() + token.len());
    buf.push_str(PREFIX);
    buf.push_str(token);
    buf
}

#[cfg(test)]
mod tests {
    use super::BearerToken;
    use crate::{
        auth::Auth,
        client::{Method, Request},
    };

    #[test]
    fn test_bearer_header() {
        let auth = BearerToken::new("AAAA%2Ftoken");
        let request = Request::new(Method::Get, "https://api.twitter.com/2/users/me", Vec::new());

        assert_eq!(auth.auth_header(&request), "Bearer AAAA%2Ftoken");
        assert_eq!(format!("{:?}", auth), "BearerToken(<redacted>)");
    }
}
