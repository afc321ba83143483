//! Fuzz target: pattern compilation and matching.
//!
//! The first line is the pattern, the rest the body. Compilation may fail but
//! must not panic, and matching a compiled pattern must not panic either.
#![no_main]

use gistscan_core::SearchPattern;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let text: &str = &text;
    let (pattern, body) = text.split_once('\n').unwrap_or((text, ""));
    if let Ok(pattern) = SearchPattern::new(pattern) {
        let _ = pattern.is_match(body);
    }
});
