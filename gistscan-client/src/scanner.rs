//! Gist scanner: looks up a user's gists and reports which embedded URLs
//! serve a body matching a pattern.
//!
//! Every fetch is sequential. The order of `matches` is therefore the order
//! in which URLs were discovered: gist order first, then leaf order within a
//! gist.

use std::time::Instant;

use serde_json::Value;

use gistscan_core::{
    candidate_urls, LookupOutcome, SearchId, SearchPattern, SearchRequest, SearchResult,
};

use crate::{ClientError, Upstream};

/// Runs searches against an [`Upstream`].
///
/// Holds no per-request state, so one scanner serves every request.
#[derive(Debug)]
pub struct GistScanner<U: Upstream> {
    upstream: U,
}

impl<U: Upstream> GistScanner<U> {
    /// Create a scanner over the given upstream.
    #[must_use]
    pub fn new(upstream: U) -> Self {
        Self { upstream }
    }

    #[cfg(test)]
    fn upstream(&self) -> &U {
        &self.upstream
    }

    /// Search all of `request.username`'s gists for `request.pattern`.
    ///
    /// An unknown user or a rate-limited lookup produces a failure result,
    /// not an error.
    ///
    /// # Errors
    /// Returns [`ClientError::Core`] if the pattern does not compile, and
    /// [`ClientError::Lookup`] or [`ClientError::LookupBody`] if the gist
    /// lookup itself fails. Candidate URLs that fail to fetch are skipped.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResult, ClientError> {
        let search_id = SearchId::new();
        let started = Instant::now();
        let pattern = SearchPattern::new(&request.pattern)?;

        tracing::info!(
            %search_id,
            username = %request.username,
            pattern = %pattern,
            "starting gist search"
        );

        let body = self.upstream.gists_for_user(&request.username).await?;
        let gists = match LookupOutcome::classify(body) {
            LookupOutcome::UserNotFound => {
                tracing::info!(%search_id, username = %request.username, "user not found");
                return Ok(SearchResult::failure(request));
            }
            LookupOutcome::RateLimited => {
                tracing::warn!(
                    %search_id,
                    username = %request.username,
                    "gist lookup rate limited"
                );
                return Ok(SearchResult::failure(request));
            }
            LookupOutcome::Gists(gists) => gists,
        };

        if gists.is_empty() {
            tracing::debug!(
                %search_id,
                username = %request.username,
                "no gist records to scan"
            );
        }

        let mut matches = Vec::new();
        for gist in &gists {
            matches.extend(self.scan_record(search_id, gist, &pattern).await);
        }

        tracing::info!(
            %search_id,
            username = %request.username,
            gists = gists.len(),
            matches = matches.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "gist search complete"
        );

        Ok(SearchResult::completed(request, matches))
    }

    /// Fetch every candidate URL of one gist record and return those whose
    /// body matches `pattern`, in discovery order.
    pub async fn scan_record(
        &self,
        search_id: SearchId,
        record: &Value,
        pattern: &SearchPattern,
    ) -> Vec<String> {
        let mut matched = Vec::new();
        for url in candidate_urls(record) {
            let body = match self.upstream.fetch_page(url).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(%search_id, %url, error = %e, "skipping unreachable URL");
                    continue;
                }
            };
            if pattern.is_match(&body) {
                tracing::debug!(%search_id, %url, "pattern matched");
                matched.push(url.to_owned());
            }
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use gistscan_core::{CoreError, SearchStatus};

    use super::*;

    /// In-memory upstream: a fixed lookup body and a table of page bodies.
    /// URLs missing from the table fail like an unreachable host.
    struct StubUpstream {
        lookup: Value,
        pages: HashMap<String, String>,
        fetched: Mutex<Vec<String>>,
    }

    impl StubUpstream {
        fn new(lookup: Value, pages: &[(&str, &str)]) -> Self {
            Self {
                lookup,
                pages: pages
                    .iter()
                    .map(|(u, b)| ((*u).to_owned(), (*b).to_owned()))
                    .collect(),
                fetched: Mutex::new(Vec::new()),
            }
        }

        fn fetched(&self) -> Vec<String> {
            match self.fetched.lock() {
                Ok(f) => f.clone(),
                Err(e) => panic!("lock poisoned: {e}"),
            }
        }
    }

    #[async_trait]
    impl Upstream for StubUpstream {
        async fn gists_for_user(&self, _username: &str) -> Result<Value, ClientError> {
            Ok(self.lookup.clone())
        }

        async fn fetch_page(&self, url: &str) -> Result<String, ClientError> {
            match self.fetched.lock() {
                Ok(mut f) => f.push(url.to_owned()),
                Err(e) => panic!("lock poisoned: {e}"),
            }
            match self.pages.get(url) {
                Some(body) => Ok(body.clone()),
                None => Err(ClientError::Fetch {
                    url: url.to_owned(),
                    source: transport_error().await,
                }),
            }
        }
    }

    /// A genuine `reqwest::Error`, produced by sending to an unparsable URL.
    async fn transport_error() -> reqwest::Error {
        match reqwest::Client::new().get("not a url").send().await {
            Err(e) => e,
            Ok(_) => panic!("request to an unparsable URL must fail"),
        }
    }

    fn request(pattern: &str) -> SearchRequest {
        SearchRequest {
            username: "octocat".to_owned(),
            pattern: pattern.to_owned(),
        }
    }

    fn gist(id: &str, raw_url: &str) -> Value {
        json!({
            "id": id,
            "public": true,
            "comments": 0,
            "files": {"notes.txt": {"filename": "notes.txt", "raw_url": raw_url, "size": 12}},
            "description": null
        })
    }

    async fn run(upstream: StubUpstream, pattern: &str) -> SearchResult {
        let scanner = GistScanner::new(upstream);
        match scanner.search(request(pattern)).await {
            Ok(r) => r,
            Err(e) => panic!("search failed: {e}"),
        }
    }

    #[tokio::test]
    async fn search_user_not_found_is_failure_without_fetches() {
        let upstream = StubUpstream::new(json!({"message": "Not Found"}), &[]);
        let scanner = GistScanner::new(upstream);
        let result = match scanner.search(request("TODO")).await {
            Ok(r) => r,
            Err(e) => panic!("search failed: {e}"),
        };
        assert_eq!(result.status, SearchStatus::Failure);
        assert!(result.matches.is_empty());
        assert_eq!(result.username, "octocat");
        assert_eq!(result.pattern, "TODO");
        assert!(scanner.upstream().fetched().is_empty(), "no page may be fetched");
    }

    #[tokio::test]
    async fn search_rate_limited_is_failure() {
        let upstream = StubUpstream::new(
            json!({"message": "API rate limit exceeded for 198.51.100.1."}),
            &[],
        );
        let result = run(upstream, "TODO").await;
        assert_eq!(result.status, SearchStatus::Failure);
        assert!(result.matches.is_empty());
    }

    #[tokio::test]
    async fn search_single_match_is_success() {
        let url = "https://gist.githubusercontent.com/octocat/1/raw/notes.txt";
        let upstream = StubUpstream::new(json!([gist("1", url)]), &[(url, "remember: TODO")]);
        let result = run(upstream, "TODO").await;
        assert_eq!(result.status, SearchStatus::Success);
        assert_eq!(result.matches, vec![url.to_owned()]);
    }

    #[tokio::test]
    async fn search_without_matches_is_no_match() {
        let url = "https://gist.githubusercontent.com/octocat/1/raw/notes.txt";
        let upstream = StubUpstream::new(json!([gist("1", url)]), &[(url, "nothing here")]);
        let result = run(upstream, "TODO").await;
        assert_eq!(result.status, SearchStatus::NoMatch);
        assert!(result.matches.is_empty());
    }

    #[tokio::test]
    async fn search_with_no_gists_is_no_match() {
        let result = run(StubUpstream::new(json!([]), &[]), "TODO").await;
        assert_eq!(result.status, SearchStatus::NoMatch);
    }

    #[tokio::test]
    async fn search_unrecognised_error_object_is_no_match() {
        let upstream = StubUpstream::new(json!({"message": "Bad credentials"}), &[]);
        let result = run(upstream, "x").await;
        assert_eq!(result.status, SearchStatus::NoMatch);
        assert!(result.matches.is_empty());
    }

    #[tokio::test]
    async fn search_preserves_discovery_order_and_duplicates() {
        let a = "https://example.com/a";
        let b = "http://example.com/b";
        let c = "https://example.com/c";
        let gists = json!([
            {"url": b, "files": {"f": {"raw_url": a}}},
            {"html_url": c, "owner": {"avatar_url": a}},
        ]);
        let pages = [(a, "hit TODO"), (b, "hit TODO"), (c, "miss")];
        let upstream = StubUpstream::new(gists, &pages);
        let scanner = GistScanner::new(upstream);
        let result = match scanner.search(request("TODO")).await {
            Ok(r) => r,
            Err(e) => panic!("search failed: {e}"),
        };
        assert_eq!(result.status, SearchStatus::Success);
        assert_eq!(result.matches, vec![b.to_owned(), a.to_owned(), a.to_owned()]);
        assert_eq!(
            scanner.upstream().fetched(),
            vec![b.to_owned(), a.to_owned(), c.to_owned(), a.to_owned()],
            "fetches must follow discovery order"
        );
    }

    #[tokio::test]
    async fn search_skips_unreachable_urls_and_continues() {
        let dead = "https://dead.example.com/x";
        let live = "https://live.example.com/y";
        let gists = json!([{"url": dead, "html_url": live}]);
        let upstream = StubUpstream::new(gists, &[(live, "TODO")]);
        let result = run(upstream, "TODO").await;
        assert_eq!(result.status, SearchStatus::Success);
        assert_eq!(result.matches, vec![live.to_owned()]);
    }

    #[tokio::test]
    async fn search_ignores_urls_nested_in_arrays() {
        let url = "https://example.com/in-array";
        let gists = json!([{"history": [{"url": url}]}]);
        let upstream = StubUpstream::new(gists, &[(url, "TODO")]);
        let scanner = GistScanner::new(upstream);
        let result = match scanner.search(request("TODO")).await {
            Ok(r) => r,
            Err(e) => panic!("search failed: {e}"),
        };
        assert_eq!(result.status, SearchStatus::NoMatch);
        assert!(scanner.upstream().fetched().is_empty());
    }

    #[tokio::test]
    async fn search_invalid_pattern_returns_core_error() {
        let scanner = GistScanner::new(StubUpstream::new(json!([]), &[]));
        let result = scanner.search(request("([")).await;
        assert!(
            matches!(result, Err(ClientError::Core(CoreError::InvalidPattern { .. }))),
            "invalid pattern must be reported before the lookup"
        );
    }

    #[tokio::test]
    async fn scan_record_applies_regex_to_whole_body() {
        let url = "https://example.com/page";
        let upstream = StubUpstream::new(json!([]), &[(url, "line one\nFIXME: later\n")]);
        let scanner = GistScanner::new(upstream);
        let pattern = match SearchPattern::new(r"FIX(ME)?:\s+\w+") {
            Ok(p) => p,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let record = json!({"u": url});
        let matched = scanner.scan_record(SearchId::new(), &record, &pattern).await;
        assert_eq!(matched, vec![url.to_owned()]);
    }
}
