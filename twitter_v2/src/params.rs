use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::Method,
    query::{escape_path_value, query_string},
    response::HasPartialError,
};

/// Optional query values of a request, keyed by their wire name.
pub type ParamMap = BTreeMap<&'static str, String>;

/// The static description of an endpoint: how to call it and which query keys it understands.
#[derive(Clone, Copy, Debug)]
pub struct Descriptor {
    pub method: Method,
    /// The path of the endpoint relative to the API base, possibly containing `:placeholder`
    /// segments.
    pub endpoint: &'static str,
    /// The query keys the endpoint recognises. Any other key in the parameter map is dropped.
    pub query_keys: &'static [&'static str],
}

/// A typed parameter object for a single API operation.
///
/// Implementors describe their path values, their optional query values and (for write
/// operations) their JSON body; [`resolve_endpoint`](Self::resolve_endpoint) combines these into
/// the final URL in the same way for every operation.
pub trait Parameters {
    type Response: DeserializeOwned + HasPartialError;

    const DESCRIPTOR: Descriptor;

    /// The per-request bearer credential. An empty credential means the client's own
    /// authentication is used instead.
    fn credential(&self) -> &str;

    fn set_credential(&mut self, credential: String);

    /// The placeholders of the endpoint template paired with the values that replace them.
    fn path_values(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    /// Whether every required value which is not part of the path has been provided.
    fn has_required_values(&self) -> bool {
        true
    }

    fn parameter_map(&self) -> ParamMap {
        ParamMap::new()
    }

    /// The JSON request body, or `None` for operations which do not send one.
    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        Ok(None)
    }

    /// Builds the URL for this request from `base`, the API base joined with the endpoint
    /// template.
    ///
    /// Returns an empty string if a path value is empty or a required value is missing. In that
    /// case no query string is built, however many optional values are set.
    fn resolve_endpoint(&self, base: &str) -> String {
        let path_values = self.path_values();

        if path_values.iter().any(|(_, value)| value.is_empty()) || !self.has_required_values() {
            return String::new();
        }

        let mut endpoint = base.to_owned();
        for (placeholder, value) in path_values {
            endpoint = endpoint.replacen(placeholder, &escape_path_value(value), 1);
        }

        let query = query_string(&self.parameter_map(), Self::DESCRIPTOR.query_keys);
        if !query.is_empty() {
            endpoint.push('?');
            endpoint.push_str(&query);
        }

        endpoint
    }
}

/// A bearer credential attached to a single parameter object.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Credential {
    fn from(credential: String) -> Self {
        Self(credential)
    }
}

impl From<&str> for Credential {
    fn from(credential: &str) -> Self {
        Self(credential.to_owned())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Credential(<empty>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}

pub(crate) fn insert_non_empty(params: &mut ParamMap, key: &'static str, value: &str) {
    if !value.is_empty() {
        params.insert(key, value.to_owned());
    }
}

pub(crate) fn insert_time(params: &mut ParamMap, key: &'static str, time: Option<DateTime<Utc>>) {
    if let Some(time) = time {
        params.insert(key, rfc3339(time));
    }
}

pub(crate) fn insert_joined<T: AsRef<str>>(params: &mut ParamMap, key: &'static str, values: &[T]) {
    if !values.is_empty() {
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        params.insert(key, joined);
    }
}

/// Formats a timestamp as RFC 3339 with whole seconds and a `Z` suffix, the only form the API
/// accepts.
pub(crate) fn rfc3339(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn json_body<T: Serialize>(body: &T) -> Result<Option<Vec<u8>>, serde_json::Error> {
    serde_json::to_vec(body).map(Some)
}
