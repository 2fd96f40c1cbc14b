//! Ownership view shared by resources and collections

use crate::resources::{Account, EmailAccount, Folder, Message, Source, User};
use crate::{Link, Variant};
use std::sync::Arc;

/// What a URL rule can see of a resource or collection: its tag, its
/// identifying segment and its parents.
pub trait Routable: Send + Sync {
    fn variant(&self) -> Variant;

    /// Identifying path segment; always `None` for collections
    fn key(&self) -> Option<&str>;

    fn parent(&self, link: Link) -> Option<&dyn Routable>;
}

/// Parent references held by a resource or collection.
///
/// References point upward only, so holding them as `Arc` never forms a
/// cycle. Any slot may be empty.
#[derive(Debug, Clone, Default)]
pub struct Owners {
    pub account: Option<Arc<Account>>,
    pub user: Option<Arc<User>>,
    pub source: Option<Arc<Source>>,
    pub email_account: Option<Arc<EmailAccount>>,
    pub folder: Option<Arc<Folder>>,
    pub message: Option<Arc<Message>>,
}

impl Owners {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn account(account: Arc<Account>) -> Self {
        Self::none().with_account(account)
    }

    pub fn user(user: Arc<User>) -> Self {
        Self::none().with_user(user)
    }

    pub fn source(source: Arc<Source>) -> Self {
        Self::none().with_source(source)
    }

    pub fn email_account(email_account: Arc<EmailAccount>) -> Self {
        Self::none().with_email_account(email_account)
    }

    pub fn folder(folder: Arc<Folder>) -> Self {
        Self::none().with_folder(folder)
    }

    pub fn message(message: Arc<Message>) -> Self {
        Self::none().with_message(message)
    }

    pub fn with_account(mut self, account: Arc<Account>) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_user(mut self, user: Arc<User>) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_source(mut self, source: Arc<Source>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_email_account(mut self, email_account: Arc<EmailAccount>) -> Self {
        self.email_account = Some(email_account);
        self
    }

    pub fn with_folder(mut self, folder: Arc<Folder>) -> Self {
        self.folder = Some(folder);
        self
    }

    pub fn with_message(mut self, message: Arc<Message>) -> Self {
        self.message = Some(message);
        self
    }

    /// Parent in the given slot, viewed as routable
    pub fn get(&self, link: Link) -> Option<&dyn Routable> {
        match link {
            Link::Account => self.account.as_deref().map(|r| r as &dyn Routable),
            Link::User => self.user.as_deref().map(|r| r as &dyn Routable),
            Link::Source => self.source.as_deref().map(|r| r as &dyn Routable),
            Link::EmailAccount => self.email_account.as_deref().map(|r| r as &dyn Routable),
            Link::Folder => self.folder.as_deref().map(|r| r as &dyn Routable),
            Link::Message => self.message.as_deref().map(|r| r as &dyn Routable),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.account.is_none()
            && self.user.is_none()
            && self.source.is_none()
            && self.email_account.is_none()
            && self.folder.is_none()
            && self.message.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Api, Resource, UrlResolver};
    use async_trait::async_trait;
    use contextio_http::{ApiVersion, HttpResult, Method, Params, Transport};

    struct NullTransport;

    #[async_trait]
    impl Transport for NullTransport {
        async fn request(
            &self,
            _method: Method,
            _path: &str,
            _params: &Params,
        ) -> HttpResult<serde_json::Value> {
            Ok(serde_json::Value::Null)
        }
    }

    #[test]
    fn test_owner_slots() {
        let api = Api::new(Arc::new(NullTransport), UrlResolver::new(ApiVersion::V2));
        let account: Arc<Account> = Arc::new(Resource::new(api.clone(), "a1", Owners::none()));
        let user: Arc<User> = Arc::new(Resource::new(api, "u1", Owners::none()));

        assert!(Owners::none().is_empty());

        let owners = Owners::account(account).with_user(user);
        assert!(!owners.is_empty());
        assert_eq!(owners.get(Link::Account).and_then(|a| a.key()), Some("a1"));
        assert_eq!(
            owners.get(Link::User).map(|u| u.variant()),
            Some(Variant::User)
        );
        assert!(owners.get(Link::Folder).is_none());
    }
}
