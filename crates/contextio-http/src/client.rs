use crate::error::{HttpError, HttpResult};
use crate::types::*;
use crate::ApiConfig;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Performs one request against a path relative to the versioned API root
/// and returns the parsed JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> HttpResult<serde_json::Value>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    root_url: String,
    key: String,
    secret: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> HttpResult<Self> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        Ok(Self {
            client: builder.build()?,
            root_url: config.root_url(),
            key: config.key.clone(),
            secret: config.secret.clone(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.root_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> HttpResult<serde_json::Value> {
        let url = self.url_for(path);
        debug!("ContextIO: {} {} ({} params)", method, url, params.len());

        let request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        let request = if method.uses_query() {
            request.query(&query_pairs(params))
        } else {
            request.json(params)
        };

        let response = request
            .basic_auth(&self.key, Some(&self.secret))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::ApiError { status, body });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }

        let parsed: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| HttpError::ParseError(e.to_string()))?;

        debug!("ContextIO: {} {} -> {} bytes", method, path, body.len());
        Ok(parsed)
    }
}
