//! Gateway configuration read from the environment.

use std::time::Duration;

use gistscan_client::ClientConfig;

use crate::error::GatewayError;

/// Address the server binds to when `GISTSCAN_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

pub const LISTEN_ADDR_VAR: &str = "GISTSCAN_LISTEN_ADDR";
pub const API_BASE_VAR: &str = "GISTSCAN_API_BASE";
pub const USER_AGENT_VAR: &str = "GISTSCAN_USER_AGENT";
pub const FETCH_TIMEOUT_VAR: &str = "GISTSCAN_FETCH_TIMEOUT_SECS";

/// Everything the binary needs to start serving.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// `host:port` to listen on.
    pub listen_addr: String,
    /// Outbound HTTP settings.
    pub client: ClientConfig,
}

impl GatewayConfig {
    /// Read the configuration from process environment variables.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidConfig`] if the timeout is not a
    /// positive whole number of seconds.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    /// See [`GatewayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let listen_addr =
            get(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());

        let mut client = ClientConfig::new();
        if let Some(base) = get(API_BASE_VAR) {
            client = client.with_api_base(base);
        }
        if let Some(agent) = get(USER_AGENT_VAR) {
            client = client.with_user_agent(agent);
        }
        if let Some(raw) = get(FETCH_TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|e| GatewayError::InvalidConfig {
                var: FETCH_TIMEOUT_VAR,
                reason: format!("'{raw}': {e}"),
            })?;
            if secs == 0 {
                return Err(GatewayError::InvalidConfig {
                    var: FETCH_TIMEOUT_VAR,
                    reason: "must be at least 1".to_owned(),
                });
            }
            client = client.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self { listen_addr, client })
    }
}
