//! List endpoints: lookup, management, members, List Tweets and pinned Lists.

/// Defines a paginated lookup keyed by a single path id, with `max_results` in `1..=100`, a
/// pagination token and the List field selections.
macro_rules! list_page_parameters {
    ($(#[$attr:meta])* $name:ident, $endpoint:literal, $data:ty) => {
        $(#[$attr])*
        #[derive(Clone, Default, Debug)]
        pub struct $name {
            credential: $crate::params::Credential,
            pub id: String,
            pub max_results: $crate::list::ListMaxResults,
            pub pagination_token: String,
            pub expansions: $crate::fields::ExpansionList,
            pub list_fields: $crate::fields::ListFieldList,
            pub user_fields: $crate::fields::UserFieldList,
        }

        impl $name {
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

            field_list_setters!(expansions, list_fields, user_fields);
        }

        impl $crate::params::Parameters for $name {
            type Response = $crate::response::Response<$data>;

            const DESCRIPTOR: $crate::params::Descriptor = $crate::params::Descriptor {
                method: $crate::client::Method::Get,
                endpoint: $endpoint,
                query_keys: &[
                    "expansions",
                    "list.fields",
                    "max_results",
                    "pagination_token",
                    "user.fields",
                ],
            };

            credential_accessors!();

            fn path_values(&self) -> Vec<(&'static str, &str)> {
                vec![(":id", self.id.as_str())]
            }

            fn parameter_map(&self) -> $crate::params::ParamMap {
                let mut params = $crate::params::ParamMap::new();
                self.max_results.insert_into(&mut params, "max_results");
                $crate::params::insert_non_empty(
                    &mut params,
                    "pagination_token",
                    &self.pagination_token,
                );
                $crate::fields::set_field_params(
                    &mut params,
                    &[&self.expansions, &self.list_fields, &self.user_fields],
                );
                params
            }
        }
    };
}

pub mod lookup;
pub mod manage;
pub mod member;
pub mod pinned;
pub mod tweets;

use crate::bounded::Bounded;

pub type ListMaxResults = Bounded<1, 100>;

#[cfg(test)]
mod tests {
    use super::{
        lookup::ListOwnedLists,
        member::{ListMembers, ListMemberships},
        tweets::ListTweets,
    };
    use crate::params::Parameters;

    /// One result per page is a valid request for every paginated List endpoint.
    #[test]
    fn test_list_max_results_accepts_one() {
        let base = "test/endpoint/:id";
        let cases = [
            (ListOwnedLists::new("uid").max_results(1).resolve_endpoint(base), "uid"),
            (ListMemberships::new("uid").max_results(1).resolve_endpoint(base), "uid"),
            (ListMembers::new("lid").max_results(1).resolve_endpoint(base), "lid"),
            (ListTweets::new("lid").max_results(1).resolve_endpoint(base), "lid"),
        ];

        for (endpoint, id) in cases {
            assert_eq!(endpoint, format!("test/endpoint/{}?max_results=1", id));
        }
    }

    #[test]
    fn test_list_max_results_out_of_range_is_omitted() {
        let base = "test/endpoint/:id";
        for max_results in [0, 101] {
            assert_eq!(
                ListMembers::new("lid")
                    .max_results(max_results)
                    .resolve_endpoint(base),
                "test/endpoint/lid"
            );
        }
    }
}
