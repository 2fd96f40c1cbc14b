//! Transport layer for the Context.IO API
//!
//! Provides the configuration, the API version tag and the `Transport`
//! abstraction used by `contextio-core` to talk to the remote API.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{HttpTransport, Transport};
pub use config::ApiConfig;
pub use error::{HttpError, HttpResult};
pub use types::*;
