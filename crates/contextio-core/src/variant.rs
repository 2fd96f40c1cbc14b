//! Resource variant tags and parent slots

use std::fmt;

/// Closed set of resource and collection kinds known to the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    ConnectToken,
    ConnectTokenCollection,
    OAuthProvider,
    OAuthProviderCollection,
    EmailSettings,
    Account,
    AccountCollection,
    User,
    UserCollection,
    EmailAccount,
    EmailAccountCollection,
    Source,
    SourceCollection,
    Folder,
    FolderCollection,
    Message,
    MessageCollection,
    BodyPart,
    BodyPartCollection,
    Thread,
    ThreadCollection,
    Webhook,
    WebhookCollection,
    EmailAddress,
    EmailAddressCollection,
    Contact,
    ContactCollection,
    File,
    FileCollection,
}

impl Variant {
    pub const ALL: [Variant; 29] = [
        Variant::ConnectToken,
        Variant::ConnectTokenCollection,
        Variant::OAuthProvider,
        Variant::OAuthProviderCollection,
        Variant::EmailSettings,
        Variant::Account,
        Variant::AccountCollection,
        Variant::User,
        Variant::UserCollection,
        Variant::EmailAccount,
        Variant::EmailAccountCollection,
        Variant::Source,
        Variant::SourceCollection,
        Variant::Folder,
        Variant::FolderCollection,
        Variant::Message,
        Variant::MessageCollection,
        Variant::BodyPart,
        Variant::BodyPartCollection,
        Variant::Thread,
        Variant::ThreadCollection,
        Variant::Webhook,
        Variant::WebhookCollection,
        Variant::EmailAddress,
        Variant::EmailAddressCollection,
        Variant::Contact,
        Variant::ContactCollection,
        Variant::File,
        Variant::FileCollection,
    ];

    /// Type name, e.g. "EmailAccountCollection"
    pub fn name(&self) -> &'static str {
        match self {
            Variant::ConnectToken => "ConnectToken",
            Variant::ConnectTokenCollection => "ConnectTokenCollection",
            Variant::OAuthProvider => "OAuthProvider",
            Variant::OAuthProviderCollection => "OAuthProviderCollection",
            Variant::EmailSettings => "EmailSettings",
            Variant::Account => "Account",
            Variant::AccountCollection => "AccountCollection",
            Variant::User => "User",
            Variant::UserCollection => "UserCollection",
            Variant::EmailAccount => "EmailAccount",
            Variant::EmailAccountCollection => "EmailAccountCollection",
            Variant::Source => "Source",
            Variant::SourceCollection => "SourceCollection",
            Variant::Folder => "Folder",
            Variant::FolderCollection => "FolderCollection",
            Variant::Message => "Message",
            Variant::MessageCollection => "MessageCollection",
            Variant::BodyPart => "BodyPart",
            Variant::BodyPartCollection => "BodyPartCollection",
            Variant::Thread => "Thread",
            Variant::ThreadCollection => "ThreadCollection",
            Variant::Webhook => "Webhook",
            Variant::WebhookCollection => "WebhookCollection",
            Variant::EmailAddress => "EmailAddress",
            Variant::EmailAddressCollection => "EmailAddressCollection",
            Variant::Contact => "Contact",
            Variant::ContactCollection => "ContactCollection",
            Variant::File => "File",
            Variant::FileCollection => "FileCollection",
        }
    }

    /// Collection tag of a singular variant
    pub fn collection(&self) -> Option<Variant> {
        match self {
            Variant::ConnectToken => Some(Variant::ConnectTokenCollection),
            Variant::OAuthProvider => Some(Variant::OAuthProviderCollection),
            Variant::Account => Some(Variant::AccountCollection),
            Variant::User => Some(Variant::UserCollection),
            Variant::EmailAccount => Some(Variant::EmailAccountCollection),
            Variant::Source => Some(Variant::SourceCollection),
            Variant::Folder => Some(Variant::FolderCollection),
            Variant::Message => Some(Variant::MessageCollection),
            Variant::BodyPart => Some(Variant::BodyPartCollection),
            Variant::Thread => Some(Variant::ThreadCollection),
            Variant::Webhook => Some(Variant::WebhookCollection),
            Variant::EmailAddress => Some(Variant::EmailAddressCollection),
            Variant::Contact => Some(Variant::ContactCollection),
            Variant::File => Some(Variant::FileCollection),
            _ => None,
        }
    }

    pub fn is_collection(&self) -> bool {
        match self {
            Variant::ConnectTokenCollection
            | Variant::OAuthProviderCollection
            | Variant::AccountCollection
            | Variant::UserCollection
            | Variant::EmailAccountCollection
            | Variant::SourceCollection
            | Variant::FolderCollection
            | Variant::MessageCollection
            | Variant::BodyPartCollection
            | Variant::ThreadCollection
            | Variant::WebhookCollection
            | Variant::EmailAddressCollection
            | Variant::ContactCollection
            | Variant::FileCollection => true,
            Variant::ConnectToken
            | Variant::OAuthProvider
            | Variant::EmailSettings
            | Variant::Account
            | Variant::User
            | Variant::EmailAccount
            | Variant::Source
            | Variant::Folder
            | Variant::Message
            | Variant::BodyPart
            | Variant::Thread
            | Variant::Webhook
            | Variant::EmailAddress
            | Variant::Contact
            | Variant::File => false,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parent slot a resource or collection can be owned through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    Account,
    User,
    Source,
    EmailAccount,
    Folder,
    Message,
}
