//! Resource kinds of the API and their associations

mod account;
mod body_part;
mod connect_token;
mod contact;
mod email_account;
mod email_address;
mod email_settings;
mod file;
mod folder;
mod message;
mod oauth_provider;
mod source;
mod thread;
mod user;
mod webhook;

pub use account::{Account, AccountAttributes, AccountCollection, AccountKind};
pub use body_part::{BodyPart, BodyPartAttributes, BodyPartCollection, BodyPartKind};
pub use connect_token::{
    ConnectToken, ConnectTokenAttributes, ConnectTokenCollection, ConnectTokenKind,
};
pub use contact::{Contact, ContactAttributes, ContactCollection, ContactKind};
pub use email_account::{
    EmailAccount, EmailAccountAttributes, EmailAccountCollection, EmailAccountKind,
};
pub use email_address::{
    EmailAddress, EmailAddressAttributes, EmailAddressCollection, EmailAddressKind,
};
pub use email_settings::{EmailSettings, EmailSettingsAttributes, EmailSettingsKind};
pub use file::{File, FileAttributes, FileCollection, FileKind};
pub use folder::{Folder, FolderAttributes, FolderCollection, FolderKind};
pub use message::{Message, MessageAttributes, MessageCollection, MessageKind};
pub use oauth_provider::{
    OAuthProvider, OAuthProviderAttributes, OAuthProviderCollection, OAuthProviderKind,
};
pub use source::{Source, SourceAttributes, SourceCollection, SourceKind};
pub use thread::{Thread, ThreadAttributes, ThreadCollection, ThreadKind};
pub use user::{User, UserAttributes, UserCollection, UserKind};
pub use webhook::{Webhook, WebhookAttributes, WebhookCollection, WebhookKind};
