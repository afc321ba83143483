//! Request and response bodies of the search endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// GitHub account whose public gists are searched.
    pub username: String,
    /// Regular expression tested against every fetched page.
    pub pattern: String,
}

/// Overall outcome of a search, serialised as the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SearchStatus {
    /// The scan completed and at least one URL matched.
    #[serde(rename = "success")]
    Success,
    /// The scan completed without a single match.
    #[serde(rename = "no match")]
    NoMatch,
    /// The user does not exist or the lookup was rate limited.
    #[serde(rename = "failure, search not completed")]
    Failure,
}

/// Body returned by `POST /api/v1/search`.
///
/// Every field is always present. `matches` keeps discovery order: gist order
/// first, then URL order within a gist. The same URL may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub status: SearchStatus,
    pub username: String,
    pub pattern: String,
    pub matches: Vec<String>,
}

impl SearchResult {
    /// Result for a search that could not run.
    #[must_use]
    pub fn failure(request: SearchRequest) -> Self {
        Self {
            status: SearchStatus::Failure,
            username: request.username,
            pattern: request.pattern,
            matches: Vec::new(),
        }
    }

    /// Result for a completed scan; the status follows from `matches`.
    #[must_use]
    pub fn completed(request: SearchRequest, matches: Vec<String>) -> Self {
        let status = if matches.is_empty() {
            SearchStatus::NoMatch
        } else {
            SearchStatus::Success
        };
        Self {
            status,
            username: request.username,
            pattern: request.pattern,
            matches,
        }
    }
}
