//! Mailboxes attached to a user (lite API)

use super::{ConnectTokenCollection, FolderCollection, User};
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, CoreResult, Owners, Resource, Variant};
use std::sync::Arc;

pub struct EmailAccountKind;

impl Kind for EmailAccountKind {
    const VARIANT: Variant = Variant::EmailAccount;
    const PRIMARY_KEY: &'static str = "label";
    type Attributes = EmailAccountAttributes;
}

impl CollectionKind for EmailAccountKind {
    const COLLECTION: Variant = Variant::EmailAccountCollection;
    const REQUIRED_ON_CREATE: Option<&'static [&'static str]> =
        Some(&["email", "server", "username", "use_ssl", "port", "type"]);
}

lazy_attributes! {
    EmailAccountAttributes for EmailAccountKind {
        pub server: String,
        pub username: String,
        pub port: u16,
        pub authentication_type: String,
        pub status: String,
        pub sync_period: String,
        use_ssl: bool,
        /// Server protocol, e.g. "IMAP"
        #[serde(rename = "type")]
        pub kind: String,
    }
}

pub type EmailAccount = Resource<EmailAccountKind>;
pub type EmailAccountCollection = Collection<EmailAccountKind>;

impl EmailAccount {
    /// Whether the server connection uses SSL. Unknown counts as no.
    pub async fn uses_ssl(&self) -> CoreResult<bool> {
        Ok(self.use_ssl().await?.unwrap_or(false))
    }

    pub fn user(&self) -> Option<&Arc<User>> {
        self.owners().user.as_ref()
    }

    pub fn folders(self: &Arc<Self>) -> FolderCollection {
        Collection::new(self.api().clone(), Owners::email_account(self.clone()))
    }

    /// Connect tokens of this mailbox. The API offers no listing scoped to
    /// an email account, so resolving this collection fails with an
    /// incomplete chain.
    pub fn connect_tokens(self: &Arc<Self>) -> ConnectTokenCollection {
        Collection::new(self.api().clone(), Owners::email_account(self.clone()))
    }
}
