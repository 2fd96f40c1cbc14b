//! Error types for the core module

use crate::{UrlError, Variant};
use contextio_http::HttpError;
use thiserror::Error;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, Error)]
pub enum CoreError {
    /// Path could not be derived for a resource
    #[error(transparent)]
    Url(#[from] UrlError),

    /// `create` was called without fields the API requires
    #[error("Missing required fields for {variant}: {}", .fields.join(", "))]
    MissingFields {
        variant: Variant,
        fields: Vec<String>,
    },

    /// The collection cannot create members
    #[error("{0} does not support create")]
    CreateUnsupported(Variant),

    /// Request failed in the transport
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// A response body did not have the expected shape
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::InvalidPayload(e.to_string())
    }
}
