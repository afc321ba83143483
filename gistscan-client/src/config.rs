//! Outbound HTTP configuration.

use std::time::Duration;

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// `User-Agent` sent when none is configured. GitHub rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("gistscan/", env!("CARGO_PKG_VERSION"));

/// Configuration for the outbound HTTP backend.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ClientConfig {
    /// Base URL the `/users/{username}/gists` path is appended to.
    pub api_base: String,

    /// Value of the `User-Agent` header on every request.
    pub user_agent: String,

    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a config pointing at the public GitHub API with no timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: None,
        }
    }

    /// Replace the API base, e.g. for a GitHub Enterprise host or a test stub.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Replace the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a whole-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
