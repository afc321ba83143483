//! Fuzz target: leaf flattening and candidate URL extraction.
//!
//! Any JSON document must flatten without panicking, yield no object leaves,
//! and only produce candidates that pass the URL-likeness test.

#![no_main]

use gistscan_core::{candidate_urls, flatten_leaves, is_url_like};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(record) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    let leaves = flatten_leaves(&record);
    if record.is_object() {
        assert!(leaves.iter().all(|leaf| !leaf.is_object()), "objects must be expanded");
    }

    for url in candidate_urls(&record) {
        assert!(is_url_like(&Value::String(url.to_owned())));
        assert!(url.starts_with("http://") || url.starts_with("https://"));
    }
});
