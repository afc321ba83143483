//! Classification of a gist lookup response.
//!
//! The upstream API reports failures as an object carrying a `message`
//! field. Classification compares that text against two known messages, so
//! any rewording upstream silently turns a failure into an empty scan.

use serde_json::Value;

/// Exact message returned for an unknown user.
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Prefix of the message returned when the caller is rate limited.
pub const RATE_LIMIT_PREFIX: &str = "API rate limit exceeded";

/// What a gist lookup response means for the search.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The user does not exist.
    UserNotFound,
    /// The upstream API refused the lookup because of rate limiting.
    RateLimited,
    /// Gist records to scan, in upstream order.
    Gists(Vec<Value>),
}

impl LookupOutcome {
    /// Classify a parsed lookup body.
    ///
    /// An array yields its elements as records. Any other payload that is not
    /// one of the two recognised errors yields no records.
    #[must_use]
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Array(records) => Self::Gists(records),
            Value::Object(ref map) => match map.get("message").and_then(Value::as_str) {
                Some(NOT_FOUND_MESSAGE) => Self::UserNotFound,
                Some(msg) if msg.starts_with(RATE_LIMIT_PREFIX) => Self::RateLimited,
                _ => Self::Gists(Vec::new()),
            },
            _ => Self::Gists(Vec::new()),
        }
    }
}
