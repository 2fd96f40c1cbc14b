//! Resource-to-path routing
//!
//! A [`UrlResolver`] maps each [`Variant`] to a rule that derives the API
//! path of a resource or collection from its key and parent chain. Paths are
//! relative to the versioned API root and never start with a slash.
//!
//! Rules for kinds with more than one ownership chain try the chains in a
//! fixed order and use the first one that is populated all the way down to
//! an identifier. When no chain is complete, resolution fails with
//! [`UrlError::IncompleteChain`] before any request is made.

use crate::{Link, Routable, Variant};
use contextio_http::ApiVersion;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Routing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// No rule was registered for this kind
    #[error("URL could not be built for unregistered variant: {0}")]
    Unregistered(Variant),

    /// The rule found no fully populated ownership chain
    #[error("URL could not be built for {0}: ownership chain is incomplete")]
    IncompleteChain(Variant),
}

/// A path rule. Returns `None` when the parents it needs are missing.
pub type UrlRule = Arc<dyn Fn(&dyn Routable, ApiVersion) -> Option<String> + Send + Sync>;

/// Table of path rules, built once and read many times
#[derive(Clone)]
pub struct UrlResolver {
    version: ApiVersion,
    rules: HashMap<Variant, UrlRule>,
}

impl fmt::Debug for UrlResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<&Variant> = self.rules.keys().collect();
        registered.sort_by_key(|v| v.name());
        f.debug_struct("UrlResolver")
            .field("version", &self.version)
            .field("registered", &registered)
            .finish()
    }
}

impl UrlResolver {
    /// An empty table
    pub fn new(version: ApiVersion) -> Self {
        Self {
            version,
            rules: HashMap::new(),
        }
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// Associate a rule with a variant. A second registration for the same
    /// variant replaces the first.
    pub fn register<F>(&mut self, variant: Variant, rule: F) -> &mut Self
    where
        F: Fn(&dyn Routable, ApiVersion) -> Option<String> + Send + Sync + 'static,
    {
        if self.rules.insert(variant, Arc::new(rule)).is_some() {
            warn!("URL rule for {} registered twice, keeping the latest", variant);
        }
        self
    }

    pub fn is_registered(&self, variant: Variant) -> bool {
        self.rules.contains_key(&variant)
    }

    /// Compute the path of a resource or collection
    pub fn resolve(&self, resource: &dyn Routable) -> Result<String, UrlError> {
        let variant = resource.variant();
        let rule = self
            .rules
            .get(&variant)
            .ok_or(UrlError::Unregistered(variant))?;

        let path = rule(resource, self.version).ok_or(UrlError::IncompleteChain(variant))?;
        debug!("Resolved {} to {}", variant, path);
        Ok(path)
    }

    /// The table covering every routable kind of the API
    pub fn standard(version: ApiVersion) -> Self {
        let mut resolver = Self::new(version);

        resolver
            .register(Variant::ConnectToken, |token, _| {
                Some(format!("connect_tokens/{}", token.key()?))
            })
            .register(Variant::ConnectTokenCollection, |tokens, _| {
                if let Some(id) = account_id(tokens) {
                    Some(format!("accounts/{}/connect_tokens", id))
                } else if let Some(id) = user_id(tokens) {
                    Some(format!("users/{}/connect_tokens", id))
                } else if tokens.parent(Link::EmailAccount).is_some() {
                    // No email account scoped listing exists
                    None
                } else {
                    Some("connect_tokens".to_string())
                }
            })
            .register(Variant::OAuthProvider, |provider, _| {
                Some(format!("oauth_providers/{}", provider.key()?))
            })
            .register(Variant::OAuthProviderCollection, |_, _| {
                Some("oauth_providers".to_string())
            })
            .register(Variant::EmailSettings, |_, _| Some("discovery".to_string()));

        resolver
            .register(Variant::Account, |account, _| {
                Some(format!("accounts/{}", account.key()?))
            })
            .register(Variant::AccountCollection, |_, _| Some("accounts".to_string()))
            // Users share the account path shape, pending confirmation
            // against the live API.
            .register(Variant::User, |user, _| {
                Some(format!("accounts/{}", user.key()?))
            })
            .register(Variant::UserCollection, |_, _| Some("users".to_string()))
            .register(Variant::EmailAccount, |email_account, _| {
                Some(format!(
                    "users/{}/email_accounts/{}",
                    user_id(email_account)?,
                    email_account.key()?
                ))
            })
            .register(Variant::EmailAccountCollection, |email_accounts, _| {
                Some(format!("users/{}/email_accounts", user_id(email_accounts)?))
            })
            .register(Variant::Source, |source, _| {
                Some(format!(
                    "accounts/{}/sources/{}",
                    account_id(source)?,
                    source.key()?
                ))
            })
            .register(Variant::SourceCollection, |sources, _| {
                Some(format!("accounts/{}/sources", account_id(sources)?))
            });

        resolver
            .register(Variant::Folder, |folder, _| {
                Some(format!("{}/{}", folders_path(folder)?, folder.key()?))
            })
            .register(Variant::FolderCollection, |folders, _| folders_path(folders))
            .register(Variant::Message, |message, version| match version {
                ApiVersion::V2 => Some(format!(
                    "accounts/{}/messages/{}",
                    account_id(message)?,
                    message.key()?
                )),
                ApiVersion::Lite => Some(format!(
                    "{}/{}",
                    folder_messages_path(message)?,
                    message.key()?
                )),
            })
            .register(Variant::MessageCollection, |messages, _| {
                if let Some(id) = account_id(messages) {
                    Some(format!("accounts/{}/messages", id))
                } else {
                    folder_messages_path(messages)
                }
            })
            .register(Variant::BodyPartCollection, |parts, _| {
                let message = parts.parent(Link::Message)?;
                Some(format!(
                    "accounts/{}/messages/{}/body",
                    account_id(message)?,
                    message.key()?
                ))
            })
            .register(Variant::Thread, |thread, _| {
                Some(format!(
                    "accounts/{}/threads/{}",
                    account_id(thread)?,
                    thread.key()?
                ))
            })
            .register(Variant::ThreadCollection, |threads, _| {
                Some(format!("accounts/{}/threads", account_id(threads)?))
            });

        resolver
            .register(Variant::Webhook, |webhook, _| {
                let webhook_id = webhook.key()?;
                if let Some(id) = account_id(webhook) {
                    Some(format!("accounts/{}/webhooks/{}", id, webhook_id))
                } else {
                    // Singular "webhook" segment is what the user-scoped
                    // endpoint is registered under.
                    Some(format!("users/{}/webhook/{}", user_id(webhook)?, webhook_id))
                }
            })
            .register(Variant::WebhookCollection, |webhooks, _| {
                if let Some(id) = account_id(webhooks) {
                    Some(format!("accounts/{}/webhooks", id))
                } else {
                    Some(format!("users/{}/webhooks", user_id(webhooks)?))
                }
            })
            .register(Variant::EmailAddress, |email_address, _| {
                Some(format!(
                    "accounts/{}/email_addresses/{}",
                    account_id(email_address)?,
                    email_address.key()?
                ))
            })
            .register(Variant::EmailAddressCollection, |email_addresses, _| {
                Some(format!(
                    "accounts/{}/email_addresses",
                    account_id(email_addresses)?
                ))
            })
            .register(Variant::Contact, |contact, _| {
                Some(format!(
                    "accounts/{}/contacts/{}",
                    account_id(contact)?,
                    contact.key()?
                ))
            })
            .register(Variant::ContactCollection, |contacts, _| {
                Some(format!("accounts/{}/contacts", account_id(contacts)?))
            })
            .register(Variant::File, |file, _| {
                Some(format!(
                    "accounts/{}/files/{}",
                    account_id(file)?,
                    file.key()?
                ))
            })
            .register(Variant::FileCollection, |files, _| {
                Some(format!("accounts/{}/files", account_id(files)?))
            });

        resolver
    }
}

fn account_id(resource: &dyn Routable) -> Option<&str> {
    resource.parent(Link::Account)?.key()
}

fn user_id(resource: &dyn Routable) -> Option<&str> {
    resource.parent(Link::User)?.key()
}

/// Folder listing path, via the source chain first, then the email account chain
fn folders_path(resource: &dyn Routable) -> Option<String> {
    let via_source = resource.parent(Link::Source).and_then(|source| {
        Some(format!(
            "accounts/{}/sources/{}/folders",
            account_id(source)?,
            source.key()?
        ))
    });

    via_source.or_else(|| {
        let email_account = resource.parent(Link::EmailAccount)?;
        Some(format!(
            "users/{}/email_accounts/{}/folders",
            user_id(email_account)?,
            email_account.key()?
        ))
    })
}

/// Lite message listing path: folder -> email account -> user
fn folder_messages_path(resource: &dyn Routable) -> Option<String> {
    let folder = resource.parent(Link::Folder)?;
    let email_account = folder.parent(Link::EmailAccount)?;
    Some(format!(
        "users/{}/email_accounts/{}/folders/{}/messages",
        user_id(email_account)?,
        email_account.key()?,
        folder.key()?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Minimal routable used to exercise rules without any resource plumbing
    #[derive(Default)]
    struct Node {
        variant: Option<Variant>,
        key: Option<String>,
        parents: HashMap<Link, Node>,
    }

    impl Node {
        fn new(variant: Variant, key: Option<&str>) -> Self {
            Self {
                variant: Some(variant),
                key: key.map(str::to_string),
                parents: HashMap::new(),
            }
        }

        fn with(mut self, link: Link, parent: Node) -> Self {
            self.parents.insert(link, parent);
            self
        }
    }

    impl Routable for Node {
        fn variant(&self) -> Variant {
            self.variant.unwrap_or(Variant::Account)
        }

        fn key(&self) -> Option<&str> {
            self.key.as_deref()
        }

        fn parent(&self, link: Link) -> Option<&dyn Routable> {
            self.parents.get(&link).map(|p| p as &dyn Routable)
        }
    }

    #[test]
    fn test_unregistered_variant() {
        let resolver = UrlResolver::new(ApiVersion::V2);
        let account = Node::new(Variant::Account, Some("a1"));

        assert_eq!(
            resolver.resolve(&account),
            Err(UrlError::Unregistered(Variant::Account))
        );
        assert!(UrlError::Unregistered(Variant::Account)
            .to_string()
            .contains("Account"));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut resolver = UrlResolver::new(ApiVersion::V2);
        resolver
            .register(Variant::Account, |_, _| Some("first".to_string()))
            .register(Variant::Account, |_, _| Some("second".to_string()));

        let account = Node::new(Variant::Account, Some("a1"));
        assert_eq!(resolver.resolve(&account).unwrap(), "second");
    }

    #[test]
    fn test_missing_identifier_is_incomplete() {
        let resolver = UrlResolver::standard(ApiVersion::V2);
        let account = Node::new(Variant::Account, None);

        assert_eq!(
            resolver.resolve(&account),
            Err(UrlError::IncompleteChain(Variant::Account))
        );
    }

    #[test]
    fn test_folder_chain_priority() {
        let resolver = UrlResolver::standard(ApiVersion::V2);
        let source = Node::new(Variant::Source, Some("src"))
            .with(Link::Account, Node::new(Variant::Account, Some("a1")));
        let email_account = Node::new(Variant::EmailAccount, Some("ea"))
            .with(Link::User, Node::new(Variant::User, Some("u1")));

        let both = Node::new(Variant::Folder, Some("INBOX"))
            .with(Link::Source, source)
            .with(Link::EmailAccount, email_account);
        assert_eq!(
            resolver.resolve(&both).unwrap(),
            "accounts/a1/sources/src/folders/INBOX"
        );

        // A source without an account id does not count as a complete chain
        let broken_source = Node::new(Variant::Source, Some("src"));
        let email_account = Node::new(Variant::EmailAccount, Some("ea"))
            .with(Link::User, Node::new(Variant::User, Some("u1")));
        let fallback = Node::new(Variant::Folder, Some("INBOX"))
            .with(Link::Source, broken_source)
            .with(Link::EmailAccount, email_account);
        assert_eq!(
            resolver.resolve(&fallback).unwrap(),
            "users/u1/email_accounts/ea/folders/INBOX"
        );

        let neither = Node::new(Variant::FolderCollection, None);
        assert_eq!(
            resolver.resolve(&neither),
            Err(UrlError::IncompleteChain(Variant::FolderCollection))
        );
    }

    #[test]
    fn test_standard_registers_every_routable_kind() {
        let resolver = UrlResolver::standard(ApiVersion::Lite);
        for variant in Variant::ALL {
            assert_eq!(
                resolver.is_registered(variant),
                variant != Variant::BodyPart,
                "{}",
                variant
            );
        }
        assert_eq!(resolver.version(), ApiVersion::Lite);
    }
}
