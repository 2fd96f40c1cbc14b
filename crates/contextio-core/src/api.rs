//! Handle tying the transport to the URL resolver

use crate::resources::{
    Account, AccountCollection, ConnectToken, ConnectTokenCollection, EmailSettings,
    OAuthProvider, OAuthProviderCollection, User, UserCollection,
};
use crate::{CoreResult, Owners, Resource, Routable, UrlError, UrlResolver};
use contextio_http::{ApiConfig, ApiVersion, HttpTransport, Method, Params, Transport};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Entry point of the client. Cheap to clone; every resource and collection
/// holds one.
#[derive(Clone)]
pub struct Api {
    transport: Arc<dyn Transport>,
    resolver: Arc<UrlResolver>,
}

impl Api {
    /// The resolver is frozen from here on.
    pub fn new(transport: Arc<dyn Transport>, resolver: UrlResolver) -> Self {
        Self {
            transport,
            resolver: Arc::new(resolver),
        }
    }

    /// HTTP transport plus the standard rule table for the configured version
    pub fn from_config(config: &ApiConfig) -> CoreResult<Self> {
        let transport = HttpTransport::new(config)?;
        debug!("Client configured for {}", config.root_url());
        Ok(Self::new(
            Arc::new(transport),
            UrlResolver::standard(config.version),
        ))
    }

    pub fn resolver(&self) -> &UrlResolver {
        &self.resolver
    }

    pub fn version(&self) -> ApiVersion {
        self.resolver.version()
    }

    pub fn resolve(&self, resource: &dyn Routable) -> Result<String, UrlError> {
        self.resolver.resolve(resource)
    }

    /// Raw request against a path relative to the versioned root
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> CoreResult<serde_json::Value> {
        Ok(self.transport.request(method, path, params).await?)
    }

    pub fn accounts(&self) -> AccountCollection {
        AccountCollection::new(self.clone(), Owners::none())
    }

    pub fn users(&self) -> UserCollection {
        UserCollection::new(self.clone(), Owners::none())
    }

    pub fn connect_tokens(&self) -> ConnectTokenCollection {
        ConnectTokenCollection::new(self.clone(), Owners::none())
    }

    pub fn oauth_providers(&self) -> OAuthProviderCollection {
        OAuthProviderCollection::new(self.clone(), Owners::none())
    }

    pub fn account(&self, id: impl Into<String>) -> Arc<Account> {
        Arc::new(Resource::new(self.clone(), id, Owners::none()))
    }

    pub fn user(&self, id: impl Into<String>) -> Arc<User> {
        Arc::new(Resource::new(self.clone(), id, Owners::none()))
    }

    pub fn connect_token(&self, token: impl Into<String>) -> Arc<ConnectToken> {
        Arc::new(Resource::new(self.clone(), token, Owners::none()))
    }

    pub fn oauth_provider(&self, consumer_key: impl Into<String>) -> Arc<OAuthProvider> {
        Arc::new(Resource::new(self.clone(), consumer_key, Owners::none()))
    }

    /// Server settings discovered for an address. `source_type` is usually
    /// "IMAP".
    pub fn email_settings(&self, email: &str, source_type: &str) -> EmailSettings {
        let mut query = Params::new();
        query.insert("email".to_string(), email.into());
        query.insert("source_type".to_string(), source_type.into());

        Resource::new(self.clone(), email, Owners::none()).with_query(query)
    }
}

impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("version", &self.version())
            .finish_non_exhaustive()
    }
}
