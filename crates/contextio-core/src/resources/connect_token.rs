//! Connect tokens: one-shot links a user follows to attach a mailbox

use super::{Account, User};
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, Resource, Variant};
use std::sync::Arc;

pub struct ConnectTokenKind;

impl Kind for ConnectTokenKind {
    const VARIANT: Variant = Variant::ConnectToken;
    const PRIMARY_KEY: &'static str = "token";
    type Attributes = ConnectTokenAttributes;
}

impl CollectionKind for ConnectTokenKind {
    const COLLECTION: Variant = Variant::ConnectTokenCollection;
    const REQUIRED_ON_CREATE: Option<&'static [&'static str]> = Some(&["callback_url"]);
}

lazy_attributes! {
    ConnectTokenAttributes for ConnectTokenKind {
        pub email: String,
        pub callback_url: String,
        pub browser_redirect_url: String,
        pub first_name: String,
        pub last_name: String,
        /// Unix timestamp
        pub created: i64,
        pub used: i64,
        pub expires: i64,
    }
}

pub type ConnectToken = Resource<ConnectTokenKind>;
pub type ConnectTokenCollection = Collection<ConnectTokenKind>;

impl ConnectToken {
    pub fn account(&self) -> Option<&Arc<Account>> {
        self.owners().account.as_ref()
    }

    pub fn user(&self) -> Option<&Arc<User>> {
        self.owners().user.as_ref()
    }
}
