pub mod bearer_token;
pub mod oauth10a;

pub use bearer_token::BearerToken;
pub use oauth10a::OAuth10a;

use std::borrow::Cow;

use crate::client::Request;

/// Credentials which the client uses to authorize a request whose parameter object carries no
/// credential of its own.
pub trait Auth: sealed::Sealed {
    fn auth_header(&self, request: &Request<'_>) -> Cow<'_, str>;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::bearer_token::BearerToken {}
    impl Sealed for super::oauth10a::OAuth10a {}
}
