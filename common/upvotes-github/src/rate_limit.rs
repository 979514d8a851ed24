//! Rate-limit diagnostics derived from `X-RateLimit-*` response headers

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// UTC epoch second when the current rate-limit window resets
pub const RESET_HEADER: &str = "x-ratelimit-reset";

/// Requests left in the current window
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// GitHub signals an exhausted quota with either 403 or 429
pub fn is_rate_limit_status(status: StatusCode) -> bool {
    status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS
}

/// Rate-limit state reported alongside a rejected request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// `None` when the reset header is absent or unparseable
    pub reset_at: Option<DateTime<Utc>>,
    pub remaining: Option<u64>,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let reset_at = header_number::<i64>(headers, RESET_HEADER)
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));
        let remaining = header_number::<u64>(headers, REMAINING_HEADER);

        Self {
            reset_at,
            remaining,
        }
    }

    /// Time left until the window resets, measured from `now`
    pub fn wait_from(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        self.reset_at.map(|reset_at| reset_at - now)
    }

    /// Human readable hint such as `after 5 minute(s)`
    ///
    /// Falls back to `in sometime` when the reset time is unknown.
    pub fn retry_hint(&self, now: DateTime<Utc>) -> String {
        match self.wait_from(now) {
            Some(wait) if wait.num_minutes() > 0 => {
                format!("after {} minute(s)", wait.num_minutes())
            }
            Some(wait) => format!("after {} second(s)", wait.num_seconds().max(0)),
            None => "in sometime".to_string(),
        }
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}
