//! Outbound HTTP abstraction.
//!
//! Lets the scanner run against the real GitHub API or an in-memory stub
//! without changing the search logic.

use async_trait::async_trait;
use serde_json::Value;

use crate::ClientError;

/// The two outbound calls a search makes.
///
/// Implementations must be `Send + Sync` so one instance can serve every
/// request of the gateway.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Fetch the first page of `username`'s public gists as parsed JSON.
    ///
    /// An error status with a JSON body is returned as `Ok`; callers classify
    /// it by its `message` field.
    ///
    /// # Errors
    /// Returns [`ClientError::Lookup`] if the request fails and
    /// [`ClientError::LookupBody`] if the body is not JSON.
    async fn gists_for_user(&self, username: &str) -> Result<Value, ClientError>;

    /// Fetch `url` and return its body as text.
    ///
    /// # Errors
    /// Returns [`ClientError::Fetch`] if the request or body read fails.
    async fn fetch_page(&self, url: &str) -> Result<String, ClientError>;
}
