//! Fuzz target: JSON deserialization of `SearchRequest`.
//!
//! Arbitrary request bodies must never panic the parser; errors are expected.

#![no_main]

use gistscan_core::SearchRequest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<SearchRequest>(data);
});
