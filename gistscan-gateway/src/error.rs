//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gistscan_client::ClientError;
use serde_json::json;

/// Errors that can occur during gateway startup or request handling.
///
/// Searches that merely fail to find a user, or are rate limited, are not
/// errors: they return 200 with a failure `status`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An error propagated from the client layer.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The request body is malformed or lacks a required field.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An environment variable holds an unusable value.
    #[error("invalid value for {var}: {reason}")]
    InvalidConfig { var: &'static str, reason: String },
}

impl GatewayError {
    /// HTTP status this error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Client(
                ClientError::Lookup { .. }
                | ClientError::LookupBody { .. }
                | ClientError::Fetch { .. },
            ) => StatusCode::BAD_GATEWAY,
            GatewayError::Client(_) | GatewayError::InvalidConfig { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, %status, "search request failed");
        } else {
            tracing::debug!(error = %self, %status, "search request rejected");
        }
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
