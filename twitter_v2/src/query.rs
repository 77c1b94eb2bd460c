use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::params::ParamMap;

/// Everything but the RFC 3986 unreserved characters is escaped. Spaces are handled separately.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Yields the entries of `params` whose key is one of `recognised`, in ascending key order.
pub(crate) fn recognised_params<'a>(
    params: &'a ParamMap,
    recognised: &'a [&'a str],
) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    params
        .iter()
        .filter(move |(key, _)| recognised.contains(*key))
        .map(|(key, val)| (*key, val.as_str()))
}

/// Builds the query string for a request.
///
/// Only keys listed in `recognised` are emitted. Keys are emitted in ASCII byte order no matter
/// what order the caller inserted them in, and both keys and values are escaped with
/// [`escape`]. An empty map (or a map with no recognised keys) produces an empty string.
pub fn query_string(params: &ParamMap, recognised: &[&str]) -> String {
    recognised_params(params, recognised)
        .map(|(key, val)| format!("{}={}", escape(key), escape(val)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Escapes a value so that it can be substituted into a path placeholder.
pub fn escape_path_value(value: &str) -> String {
    escape(value)
}

/// Query escaping: unreserved characters are kept, a space becomes `+` and every other byte is
/// percent-encoded with upper-case hex digits.
fn escape(value: &str) -> String {
    value
        .split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("+")
}
