use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Request parameters: POST/PUT body fields or GET/DELETE query constraints
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Version segment of the API root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ApiVersion {
    /// The full account-centric API
    #[default]
    #[serde(rename = "2.0")]
    V2,
    /// The user/email-account centric "lite" API
    #[serde(rename = "lite")]
    Lite,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V2 => "2.0",
            ApiVersion::Lite => "lite",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2.0" | "2" => Ok(ApiVersion::V2),
            "lite" => Ok(ApiVersion::Lite),
            other => Err(format!("unknown API version: {}", other)),
        }
    }
}

/// HTTP verb of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether params travel in the query string rather than the body
    pub fn uses_query(&self) -> bool {
        matches!(self, Method::Get | Method::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flatten params into query pairs. Strings are sent as-is, other scalars
/// by their JSON text, nulls are dropped.
pub fn query_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(name, value)| {
            let text = match value {
                serde_json::Value::Null => return None,
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((name.clone(), text))
        })
        .collect()
}
