use std::str;

use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

const X_RATE_LIMIT_LIMIT: HeaderName = HeaderName::from_static("x-rate-limit-limit");
const X_RATE_LIMIT_REMAINING: HeaderName = HeaderName::from_static("x-rate-limit-remaining");
const X_RATE_LIMIT_RESET: HeaderName = HeaderName::from_static("x-rate-limit-reset");

/// Stores information provided by the Twitter API about the rate limit of the endpoint that was
/// used. The client only reports these values; it never waits or retries on its own.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct LimitInfo {
    limit: Option<u64>,
    remaining: Option<u64>,
    reset: Option<u64>,
}

impl LimitInfo {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: headers.get(X_RATE_LIMIT_LIMIT).and_then(parse_int_header),
            remaining: headers.get(X_RATE_LIMIT_REMAINING).and_then(parse_int_header),
            reset: headers.get(X_RATE_LIMIT_RESET).and_then(parse_int_header),
        }
    }

    /// The maximum number of requests which may be made to the endpoint within its reset window.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// The number of requests remaining in the current window.
    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }

    /// The time at which the current window ends, as seconds since the Unix epoch.
    pub fn reset_epoch_secs(&self) -> Option<u64> {
        self.reset
    }

    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.reset?).ok()?;
        Utc.timestamp_opt(secs, 0).single()
    }

    /// Whether the API reported that no requests remain in the current window.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

fn parse_int_header(val: &HeaderValue) -> Option<u64> {
    str::from_utf8(val.as_bytes()).ok().and_then(|val| val.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use reqwest::header::{HeaderMap, HeaderValue};

    use super::LimitInfo;

    #[test]
    fn test_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-rate-limit-limit", HeaderValue::from_static("900"));
        headers.insert("x-rate-limit-remaining", HeaderValue::from_static("0"));
        headers.insert("x-rate-limit-reset", HeaderValue::from_static("1635120000"));

        let info = LimitInfo::from_headers(&headers);

        assert_eq!(info.limit(), Some(900));
        assert_eq!(info.remaining(), Some(0));
        assert!(info.is_exhausted());
        assert_eq!(
            info.reset_at(),
            Some(Utc.with_ymd_and_hms(2021, 10, 25, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_missing_or_malformed_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-rate-limit-remaining", HeaderValue::from_static("many"));

        let info = LimitInfo::from_headers(&headers);

        assert_eq!(info, LimitInfo::default());
        assert!(!info.is_exhausted());
        assert_eq!(info.reset_at(), None);
    }
}
