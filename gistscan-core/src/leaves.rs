//! Leaf extraction from gist records.
//!
//! A gist record is walked depth-first in document order. Only nested objects
//! are descended into: an array is reported as a single leaf, so URLs held
//! inside arrays never become candidates.

use serde_json::Value;

/// Shortest string accepted as a URL: `"http://"` plus one character.
const MIN_URL_LEN: usize = 8;

/// Collect every non-object value reachable through nested objects of `record`.
///
/// A `record` that is not an object is itself the only leaf.
///
/// # Complexity
/// O(n) in the number of object entries.
#[must_use]
pub fn flatten_leaves(record: &Value) -> Vec<&Value> {
    let mut leaves = Vec::new();
    match record {
        Value::Object(_) => collect_leaves(record, &mut leaves),
        other => leaves.push(other),
    }
    leaves
}

fn collect_leaves<'a>(value: &'a Value, leaves: &mut Vec<&'a Value>) {
    if let Value::Object(map) = value {
        for child in map.values() {
            if child.is_object() {
                collect_leaves(child, leaves);
            } else {
                leaves.push(child);
            }
        }
    }
}

/// Syntactic URL test: a string of at least 8 characters that starts with
/// `http://` or `https://`.
///
/// No grammar check is made, so `"https://not a url"` passes while
/// `"HTTP://x.com"` and `"//x.com"` do not.
#[must_use]
pub fn is_url_like(value: &Value) -> bool {
    match value {
        Value::String(s) => {
            s.chars().count() >= MIN_URL_LEN
                && (s.starts_with("https://") || s.starts_with("http://"))
        }
        _ => false,
    }
}

/// The URL-like leaves of `record`, in discovery order.
#[must_use]
pub fn candidate_urls(record: &Value) -> Vec<&str> {
    flatten_leaves(record)
        .into_iter()
        .filter(|leaf| is_url_like(leaf))
        .filter_map(Value::as_str)
        .collect()
}
