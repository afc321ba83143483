//! Core types for searching a GitHub user's public gists by regular
//! expression.
//!
//! Defines the request/response model, the leaf walk over gist records, the
//! URL-likeness test, and the classification of gist lookup responses. No
//! I/O happens in this crate.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod leaves;
pub mod lookup;
pub mod pattern;
pub mod search;

pub use error::CoreError;
pub use id::SearchId;
pub use leaves::{candidate_urls, flatten_leaves, is_url_like};
pub use lookup::{LookupOutcome, NOT_FOUND_MESSAGE, RATE_LIMIT_PREFIX};
pub use pattern::SearchPattern;
pub use search::{SearchRequest, SearchResult, SearchStatus};
