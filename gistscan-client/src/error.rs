//! Error types for the client crate.

/// Errors that can occur while looking up gists or fetching pages.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The configured API base is not an absolute URL that can take a path.
    #[error("invalid API base '{base}': {reason}")]
    InvalidApiBase { base: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The gist lookup request failed before a body was received.
    #[error("gist lookup for '{username}' failed: {source}")]
    Lookup {
        username: String,
        #[source]
        source: reqwest::Error,
    },

    /// The gist lookup body is not JSON.
    #[error("gist lookup for '{username}' returned a non-JSON body: {source}")]
    LookupBody {
        username: String,
        #[source]
        source: serde_json::Error,
    },

    /// A candidate URL could not be fetched or its body could not be read.
    #[error("fetch of {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// An error propagated from the core crate.
    #[error(transparent)]
    Core(#[from] gistscan_core::CoreError),
}
