//! Shared test helpers: an in-memory transport that records every request.

#![allow(dead_code)]

use async_trait::async_trait;
use contextio_core::http::{ApiVersion, HttpError, Method, Params, Transport};
use contextio_core::{Api, UrlResolver};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub params: Params,
}

enum Reply {
    Body(Value),
    Status(u16),
}

#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<HashMap<(Method, String), Reply>>,
}

impl RecordingTransport {
    /// Answer `method path` with `body`. Unscripted requests get `{}`.
    pub fn respond(&self, method: Method, path: &str, body: Value) {
        self.replies
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Reply::Body(body));
    }

    /// Answer `method path` with an HTTP error status
    pub fn fail(&self, method: Method, path: &str, status: u16) {
        self.replies
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Reply::Status(status));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    pub fn total(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<Value, HttpError> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            params: params.clone(),
        });

        match self.replies.lock().unwrap().get(&(method, path.to_string())) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Status(status)) => Err(HttpError::ApiError {
                status: *status,
                body: "error".to_string(),
            }),
            None => Ok(json!({})),
        }
    }
}

/// An API handle with the standard rule table over a recording transport
pub fn api(version: ApiVersion) -> (Api, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let api = Api::new(transport.clone(), UrlResolver::standard(version));
    (api, transport)
}

pub fn params(value: Value) -> Params {
    value.as_object().cloned().expect("params must be a JSON object")
}
