//! Resource model of the Context.IO API
//!
//! Resources and collections know their parents; a [`UrlResolver`] turns
//! that ownership chain into the API path, and each resource fetches its
//! attributes lazily, once, through the [`Api`] handle it carries.

mod api;
mod collection;
mod error;
mod resource;
pub mod resources;
mod routable;
mod url;
mod variant;

pub use api::Api;
pub use collection::Collection;
pub use error::{CoreError, CoreResult};
pub use resource::{AttributeSet, CollectionKind, Kind, Resource};
pub use routable::{Owners, Routable};
pub use url::{UrlError, UrlResolver, UrlRule};
pub use variant::{Link, Variant};

/// Re-export transport types for convenience
pub mod http {
    pub use contextio_http::{
        ApiConfig, ApiVersion, HttpError, HttpTransport, Method, Params, Transport,
    };
}
