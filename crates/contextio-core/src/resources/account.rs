//! Accounts of the full API

use super::{
    ConnectTokenCollection, ContactCollection, EmailAddressCollection, FileCollection,
    MessageCollection, SourceCollection, ThreadCollection, WebhookCollection,
};
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, Owners, Resource, Variant};
use std::sync::Arc;

pub struct AccountKind;

impl Kind for AccountKind {
    const VARIANT: Variant = Variant::Account;
    const PRIMARY_KEY: &'static str = "id";
    type Attributes = AccountAttributes;
}

impl CollectionKind for AccountKind {
    const COLLECTION: Variant = Variant::AccountCollection;
    const REQUIRED_ON_CREATE: Option<&'static [&'static str]> = Some(&["email"]);
}

lazy_attributes! {
    AccountAttributes for AccountKind {
        pub username: String,
        /// Unix timestamp
        pub created: i64,
        /// Unix timestamp, 0 when active
        pub suspended: i64,
        pub first_name: String,
        pub last_name: String,
        pub password_expired: i64,
        pub nb_messages: i64,
        pub nb_files: i64,
    }
}

pub type Account = Resource<AccountKind>;
pub type AccountCollection = Collection<AccountKind>;

impl Account {
    fn scoped<K: CollectionKind>(self: &Arc<Self>) -> Collection<K> {
        Collection::new(self.api().clone(), Owners::account(self.clone()))
    }

    pub fn sources(self: &Arc<Self>) -> SourceCollection {
        self.scoped()
    }

    pub fn messages(self: &Arc<Self>) -> MessageCollection {
        self.scoped()
    }

    pub fn threads(self: &Arc<Self>) -> ThreadCollection {
        self.scoped()
    }

    pub fn webhooks(self: &Arc<Self>) -> WebhookCollection {
        self.scoped()
    }

    pub fn email_addresses(self: &Arc<Self>) -> EmailAddressCollection {
        self.scoped()
    }

    pub fn contacts(self: &Arc<Self>) -> ContactCollection {
        self.scoped()
    }

    pub fn files(self: &Arc<Self>) -> FileCollection {
        self.scoped()
    }

    pub fn connect_tokens(self: &Arc<Self>) -> ConnectTokenCollection {
        self.scoped()
    }
}
