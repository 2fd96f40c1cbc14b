//! API connection settings

use crate::{ApiVersion, HttpError, HttpResult};
use serde::{Deserialize, Serialize};

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://api.context.io";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings needed to reach the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Consumer key
    pub key: String,
    /// Consumer secret
    pub secret: String,
    /// API host, without the version segment
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Version segment joined after the host
    #[serde(default)]
    pub version: ApiVersion,
    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional User-Agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ApiConfig {
    /// Configuration for the full 2.0 API
    pub fn v2(key: &str, secret: &str) -> Self {
        Self {
            key: key.to_string(),
            secret: secret.to_string(),
            base_url: default_base_url(),
            version: ApiVersion::V2,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }

    /// Configuration for the lite API
    pub fn lite(key: &str, secret: &str) -> Self {
        Self {
            version: ApiVersion::Lite,
            ..Self::v2(key, secret)
        }
    }

    /// Build a configuration from `CONTEXTIO_*` environment variables
    pub fn from_env() -> HttpResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> HttpResult<Self> {
        let key = lookup("CONTEXTIO_KEY")
            .ok_or_else(|| HttpError::InvalidConfig("CONTEXTIO_KEY is not set".to_string()))?;
        let secret = lookup("CONTEXTIO_SECRET")
            .ok_or_else(|| HttpError::InvalidConfig("CONTEXTIO_SECRET is not set".to_string()))?;

        let mut config = Self::v2(&key, &secret);

        if let Some(base_url) = lookup("CONTEXTIO_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(version) = lookup("CONTEXTIO_VERSION") {
            config.version = version.parse().map_err(HttpError::InvalidConfig)?;
        }
        if let Some(timeout) = lookup("CONTEXTIO_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|e| {
                HttpError::InvalidConfig(format!("Invalid CONTEXTIO_TIMEOUT_SECS: {}", e))
            })?;
        }

        Ok(config)
    }

    /// Root URL including the version segment, without a trailing slash
    pub fn root_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.version)
    }
}
