//! `reqwest`-backed [`Upstream`] implementation.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Url};
use serde_json::{json, Value};

use gistscan_core::NOT_FOUND_MESSAGE;

use crate::backend::Upstream;
use crate::{ClientConfig, ClientError};

/// Media type recommended by the GitHub REST API.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Real HTTP backend sharing one connection pool across all requests.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    api_base: Url,
}

impl HttpUpstream {
    /// Build a backend from `config`.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidApiBase`] if `config.api_base` is not an
    /// absolute URL with a path, or [`ClientError::Build`] if the underlying
    /// client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let api_base = Url::parse(&config.api_base).map_err(|e| ClientError::InvalidApiBase {
            base: config.api_base.clone(),
            reason: e.to_string(),
        })?;
        if api_base.cannot_be_a_base() {
            return Err(ClientError::InvalidApiBase {
                base: config.api_base.clone(),
                reason: "URL cannot carry a path".to_owned(),
            });
        }

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::Build)?;

        Ok(Self { client, api_base })
    }

    /// The lookup URL for `username`.
    ///
    /// The username is appended as a single percent-encoded path segment.
    /// Returns `None` for the empty string, `.` and `..`: URL normalisation
    /// drops or resolves those segments (even when written as `%2E`), so the
    /// request would reach a different path.
    #[must_use]
    pub fn gists_url(&self, username: &str) -> Option<Url> {
        if matches!(username, "" | "." | "..") {
            return None;
        }
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(["users", username, "gists"]);
        Some(url)
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn gists_for_user(&self, username: &str) -> Result<Value, ClientError> {
        let Some(url) = self.gists_url(username) else {
            // No GitHub login can be empty or made of dots only.
            tracing::debug!(%username, "username is not a path segment, answering not found");
            return Ok(json!({ "message": NOT_FOUND_MESSAGE }));
        };
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let response = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|source| ClientError::Lookup {
                username: username.to_owned(),
                source,
            })?;

        let status = response.status();
        tracing::debug!(%username, %status, "gist lookup response");

        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Lookup {
                username: username.to_owned(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| ClientError::LookupBody {
            username: username.to_owned(),
            source,
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::Fetch {
                url: url.to_owned(),
                source,
            })?;

        tracing::debug!(%url, status = %response.status(), "page fetched");

        response
            .text()
            .await
            .map_err(|source| ClientError::Fetch {
                url: url.to_owned(),
                source,
            })
    }
}
